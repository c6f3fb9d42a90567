//! Domain model for the member registry.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every persisted member is identified by a store-assigned `MemberId`.

pub mod member;
