//! Core domain logic for the roster member registry.
//! This crate is the single source of truth for business invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::member::{Member, MemberId};
pub use repo::member_repo::{MemberRepository, MemoryMemberRepository};
pub use service::member_service::{MemberService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
