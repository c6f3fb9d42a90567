//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the data access contract for member records.
//! - Isolate storage details from service/business orchestration.
//!
//! # Invariants
//! - Repository lookups return `Option`, never sentinel values.

pub mod member_repo;
