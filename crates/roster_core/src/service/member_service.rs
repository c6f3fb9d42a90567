//! Member registration use-case service.
//!
//! # Responsibility
//! - Enforce the one business invariant: no two members share a name.
//! - Mediate all repository access for callers.
//!
//! # Invariants
//! - All state lives in the repository; the service is a stateless facade.
//! - `join` is validate-then-save across two repository calls and is NOT
//!   atomic: two concurrent joins with the same name can both pass
//!   validation. Accepted for the in-memory scope; a durable backend
//!   would enforce uniqueness with a storage-level constraint inside a
//!   transaction.

use crate::model::member::{Member, MemberId};
use crate::repo::member_repo::MemberRepository;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Registration failure reported by `MemberService`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// A member with the requested name already exists. Retrying with the
    /// same input will always fail again.
    DuplicateMember,
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateMember => write!(f, "a member with this name already exists"),
        }
    }
}

impl Error for ServiceError {}

/// Use-case service for member registration and lookup.
pub struct MemberService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> MemberService<R> {
    /// Creates a service over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new member and returns the assigned identifier.
    ///
    /// # Errors
    /// - `ServiceError::DuplicateMember` when a member with the same name
    ///   is already stored. The store is left unchanged in that case.
    pub fn join(&self, member: Member) -> ServiceResult<MemberId> {
        if self.repo.find_by_name(&member.name).is_some() {
            warn!(
                "event=member_join module=service status=rejected reason=duplicate_name name={}",
                member.name
            );
            return Err(ServiceError::DuplicateMember);
        }

        let saved = self.repo.save(member);
        // save() always populates the id; fall back to 0 rather than
        // panicking if a repository implementation violates that contract.
        let id = saved.id.unwrap_or(0);
        info!("event=member_join module=service status=ok member_id={id}");
        Ok(id)
    }

    /// Returns every registered member.
    pub fn find_members(&self) -> Vec<Member> {
        self.repo.find_all()
    }

    /// Looks up one member by identifier.
    pub fn find_one(&self, id: MemberId) -> Option<Member> {
        self.repo.find_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{MemberService, ServiceError};
    use crate::model::member::Member;
    use crate::repo::member_repo::MemoryMemberRepository;

    #[test]
    fn join_returns_assigned_id() {
        let service = MemberService::new(MemoryMemberRepository::new());
        let id = service.join(Member::new("alice")).unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn duplicate_name_is_rejected_with_fixed_message() {
        let service = MemberService::new(MemoryMemberRepository::new());
        service.join(Member::new("Alice")).unwrap();

        let err = service.join(Member::new("Alice")).unwrap_err();
        assert_eq!(err, ServiceError::DuplicateMember);
        assert_eq!(err.to_string(), "a member with this name already exists");
        assert_eq!(service.find_members().len(), 1);
    }

    #[test]
    fn find_one_missing_id_returns_none() {
        let service = MemberService::new(MemoryMemberRepository::new());
        assert!(service.find_one(999).is_none());
    }
}
