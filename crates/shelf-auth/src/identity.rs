use super::*;
use shelf_core::ID;

/// A member id proven by a validated token.
///
/// Only [`Crypto::validate`] builds one, so holding an `Identity` means the
/// id is positive and the token had not expired when it was checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    user: ID<Member>,
}

impl Identity {
    pub fn user(&self) -> ID<Member> {
        self.user
    }
}

impl From<Claims> for Identity {
    fn from(claims: Claims) -> Self {
        Self {
            user: claims.user(),
        }
    }
}
