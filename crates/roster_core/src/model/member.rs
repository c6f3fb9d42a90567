//! Member domain model.
//!
//! # Responsibility
//! - Define the identity record shared by registration and lookup paths.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one on save.
//! - An assigned `id` is unique and never changes afterwards.
//! - Name uniqueness is a service-layer rule, not enforced here.

use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a persisted member.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type MemberId = i64;

/// An identity record: a caller-supplied name plus a store-assigned id.
///
/// Callers construct an unsaved member with [`Member::new`]; the repository
/// populates `id` on save and hands back a detached copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// `None` for a member that has not been saved yet.
    pub id: Option<MemberId>,
    /// Caller-supplied display name. Exact, case-sensitive matching.
    pub name: String,
}

impl Member {
    /// Creates an unsaved member with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Creates a member whose identity is already known.
    ///
    /// Used by test fixtures and import paths where the id exists externally.
    pub fn with_id(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Returns whether this member has been assigned an identifier.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::Member;

    #[test]
    fn new_member_has_no_id() {
        let member = Member::new("alice");
        assert_eq!(member.id, None);
        assert_eq!(member.name, "alice");
        assert!(!member.is_saved());
    }

    #[test]
    fn with_id_marks_member_saved() {
        let member = Member::with_id(7, "bob");
        assert_eq!(member.id, Some(7));
        assert!(member.is_saved());
    }

    #[test]
    fn serde_roundtrip_preserves_fields() {
        let member = Member::with_id(3, "carol");
        let json = serde_json::to_string(&member).unwrap();
        let back: Member = serde_json::from_str(&json).unwrap();
        assert_eq!(back, member);
    }

    #[test]
    fn unsaved_member_serializes_null_id() {
        let json = serde_json::to_string(&Member::new("dave")).unwrap();
        assert_eq!(json, r#"{"id":null,"name":"dave"}"#);
    }
}
