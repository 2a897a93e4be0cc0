use super::*;
use shelf_core::ID;
use shelf_core::ServiceError;

/// Signs and verifies access tokens with a process-wide HS256 secret.
pub struct Crypto {
    encoding: jsonwebtoken::EncodingKey,
    decoding: jsonwebtoken::DecodingKey,
    validation: jsonwebtoken::Validation,
}

impl Crypto {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
        validation.leeway = 0;
        Self {
            encoding: jsonwebtoken::EncodingKey::from_secret(secret),
            decoding: jsonwebtoken::DecodingKey::from_secret(secret),
            validation,
        }
    }
    pub fn encode(&self, claims: &Claims) -> Result<String, jsonwebtoken::errors::Error> {
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), claims, &self.encoding)
    }
    pub fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
    }
    /// Mints a token for `user`, valid for [`Crypto::duration`].
    pub fn issue(&self, user: ID<Member>) -> Result<String, ServiceError> {
        self.encode(&Claims::new(user))
            .map_err(ServiceError::internal)
    }
    /// Verifies signature, expiry, the authorized flag and the subject.
    ///
    /// Every failure collapses to [`ServiceError::Unauthenticated`].
    pub fn validate(&self, token: &str) -> Result<Identity, ServiceError> {
        let claims = self
            .decode(token)
            .inspect_err(|e| log::debug!("token rejected: {}", e))
            .map_err(|_| ServiceError::Unauthenticated)?;
        match claims {
            c if c.expired() => Err(ServiceError::Unauthenticated),
            c if !c.authorized => Err(ServiceError::Unauthenticated),
            c if !c.user().valid() => Err(ServiceError::Unauthenticated),
            c => Ok(Identity::from(c)),
        }
    }
    pub const fn duration() -> std::time::Duration {
        shelf_core::TOKEN_DURATION
    }
}
