//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use roster_core::{Member, MemberService, MemoryMemberRepository};

fn main() {
    println!("roster_core version={}", roster_core::core_version());

    let service = MemberService::new(MemoryMemberRepository::new());

    for name in ["alice", "bob"] {
        match service.join(Member::new(name)) {
            Ok(id) => println!("joined name={name} id={id}"),
            Err(err) => println!("join rejected name={name}: {err}"),
        }
    }

    // Duplicate join exercises the one business invariant end to end.
    match service.join(Member::new("alice")) {
        Ok(id) => println!("joined name=alice id={id}"),
        Err(err) => println!("join rejected name=alice: {err}"),
    }

    println!("members={}", service.find_members().len());
}
