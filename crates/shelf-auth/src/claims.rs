use super::*;
use shelf_core::ID;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Claims {
    pub sub: i64,
    #[serde(default)]
    pub authorized: bool,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: ID<Member>) -> Self {
        let now = shelf_core::now();
        Self {
            sub: user.inner(),
            authorized: true,
            iat: now,
            exp: now + Crypto::duration().as_secs() as i64,
        }
    }
    pub fn expired(&self) -> bool {
        self.exp <= shelf_core::now()
    }
    pub fn user(&self) -> ID<Member> {
        ID::from(self.sub)
    }
}
