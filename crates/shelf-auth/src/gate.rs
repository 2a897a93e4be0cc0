use super::*;
use shelf_core::ID;

/// Verdict of the ownership gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Allow,
    Deny,
}

/// Only the owner may mutate; a non-positive requester is never an owner.
pub fn authorize(requester: ID<Member>, owner: ID<Member>) -> Access {
    if requester.valid() && requester == owner {
        Access::Allow
    } else {
        Access::Deny
    }
}
