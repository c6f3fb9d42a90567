//! Member repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide a stable storage API over member records.
//! - Keep storage details out of service orchestration.
//!
//! # Invariants
//! - Every identifier handed out by `save` comes from the sequence counter
//!   exactly once; no two stored members share an identifier.
//! - Lookups report absence as `None`, never as an error or sentinel.

use crate::model::member::{Member, MemberId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

/// Storage contract required of any member backend.
///
/// Implementations are infallible: the store always accepts a save, and
/// missing records surface as `None`.
pub trait MemberRepository {
    /// Stores a member, assigning the next identifier when it has none.
    ///
    /// Returns the stored value with its identifier populated. A member
    /// that already carries an id is stored under that id unchanged.
    fn save(&self, member: Member) -> Member;

    /// Looks up a member by identifier.
    fn find_by_id(&self, id: MemberId) -> Option<Member>;

    /// Looks up a member by exact, case-sensitive name match.
    fn find_by_name(&self, name: &str) -> Option<Member>;

    /// Returns every stored member as detached clones, ordered by id.
    fn find_all(&self) -> Vec<Member>;
}

/// Mutex-guarded in-memory member store.
///
/// A placeholder pending a durable backend: no eviction, nothing survives
/// a process restart. Individual operations are atomic, which is all the
/// concurrency this store promises (see `MemberService` for the
/// validate-then-save caveat).
#[derive(Debug, Default)]
pub struct MemoryMemberRepository {
    store: Mutex<HashMap<MemberId, Member>>,
    sequence: AtomicI64,
}

impl MemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every stored member. Intended for test teardown.
    ///
    /// The sequence counter is left untouched so identifiers are never
    /// reused within a process.
    pub fn clear(&self) {
        self.lock_store().clear();
    }

    fn lock_store(&self) -> std::sync::MutexGuard<'_, HashMap<MemberId, Member>> {
        // A panic while holding the lock cannot leave the map half-written,
        // so a poisoned lock is still safe to use.
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn next_id(&self) -> MemberId {
        self.sequence.fetch_add(1, Ordering::Relaxed) + 1
    }
}

impl MemberRepository for MemoryMemberRepository {
    fn save(&self, mut member: Member) -> Member {
        let id = match member.id {
            Some(existing) => existing,
            None => self.next_id(),
        };
        member.id = Some(id);
        self.lock_store().insert(id, member.clone());
        member
    }

    fn find_by_id(&self, id: MemberId) -> Option<Member> {
        self.lock_store().get(&id).cloned()
    }

    fn find_by_name(&self, name: &str) -> Option<Member> {
        self.lock_store()
            .values()
            .find(|member| member.name == name)
            .cloned()
    }

    fn find_all(&self) -> Vec<Member> {
        let mut members: Vec<Member> = self.lock_store().values().cloned().collect();
        members.sort_by_key(|member| member.id);
        members
    }
}

#[cfg(test)]
mod tests {
    use super::{MemberRepository, MemoryMemberRepository};
    use crate::model::member::Member;

    #[test]
    fn save_assigns_sequential_ids_starting_at_one() {
        let repo = MemoryMemberRepository::new();
        let first = repo.save(Member::new("alice"));
        let second = repo.save(Member::new("bob"));
        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[test]
    fn save_keeps_caller_provided_id() {
        let repo = MemoryMemberRepository::new();
        let saved = repo.save(Member::with_id(42, "imported"));
        assert_eq!(saved.id, Some(42));
        assert_eq!(repo.find_by_id(42).unwrap().name, "imported");
    }

    #[test]
    fn find_by_name_is_case_sensitive() {
        let repo = MemoryMemberRepository::new();
        repo.save(Member::new("Alice"));
        assert!(repo.find_by_name("Alice").is_some());
        assert!(repo.find_by_name("alice").is_none());
    }

    #[test]
    fn find_all_returns_members_ordered_by_id() {
        let repo = MemoryMemberRepository::new();
        repo.save(Member::new("a"));
        repo.save(Member::new("b"));
        repo.save(Member::new("c"));
        let ids: Vec<_> = repo.find_all().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn clear_empties_store_without_resetting_sequence() {
        let repo = MemoryMemberRepository::new();
        repo.save(Member::new("ephemeral"));
        repo.clear();
        assert!(repo.find_all().is_empty());

        let next = repo.save(Member::new("fresh"));
        assert_eq!(next.id, Some(2));
    }

    #[test]
    fn stored_copy_is_detached_from_caller_value() {
        let repo = MemoryMemberRepository::new();
        let mut local = repo.save(Member::new("original"));
        local.name = "mutated locally".to_string();
        assert_eq!(repo.find_by_id(1).unwrap().name, "original");
    }
}
