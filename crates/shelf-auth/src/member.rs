use shelf_core::ID;
use shelf_core::ServiceError;
use shelf_core::Unique;

/// Registered account. The password hash is a storage-only column and
/// never part of this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Member {
    id: ID<Self>,
    name: String,
    email: String,
    address: String,
    phone: String,
}

impl Member {
    pub fn new(id: ID<Self>, name: String, email: String, address: String, phone: String) -> Self {
        Self {
            id,
            name,
            email,
            address,
            phone,
        }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn email(&self) -> &str {
        &self.email
    }
    pub fn address(&self) -> &str {
        &self.address
    }
    pub fn phone(&self) -> &str {
        &self.phone
    }
}

impl Unique for Member {
    fn id(&self) -> ID<Self> {
        self.id
    }
}

/// Column widths of the users table.
pub const NAME_MAX: usize = 255;
pub const EMAIL_MAX: usize = 255;
pub const PHONE_MAX: usize = 32;

/// Candidate account submitted at registration. `password` is plaintext
/// and is dropped once hashed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone: String,
    pub password: String,
}

impl MemberDraft {
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.name.trim().is_empty() {
            return Err(ServiceError::validation("name is required"));
        }
        if !plausible(&self.email) {
            return Err(ServiceError::validation("email is invalid"));
        }
        if self.password.is_empty() {
            return Err(ServiceError::validation("password is required"));
        }
        ServiceError::bounded("name", &self.name, NAME_MAX)?;
        ServiceError::bounded("email", &self.email, EMAIL_MAX)?;
        ServiceError::bounded("phone", &self.phone, PHONE_MAX)?;
        Ok(())
    }
}

/// Partial profile change. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
}

impl MemberPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.address.is_none()
            && self.phone.is_none()
            && self.password.is_none()
    }
    pub fn validate(&self) -> Result<(), ServiceError> {
        if self.is_empty() {
            return Err(ServiceError::validation("nothing to update"));
        }
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ServiceError::validation("name must not be empty"));
        }
        if self.email.as_deref().is_some_and(|e| !plausible(e)) {
            return Err(ServiceError::validation("email is invalid"));
        }
        if self.password.as_deref().is_some_and(str::is_empty) {
            return Err(ServiceError::validation("password must not be empty"));
        }
        for (field, value, max) in [
            ("name", &self.name, NAME_MAX),
            ("email", &self.email, EMAIL_MAX),
            ("phone", &self.phone, PHONE_MAX),
        ] {
            if let Some(value) = value {
                ServiceError::bounded(field, value, max)?;
            }
        }
        Ok(())
    }
}

/// `local@domain` with both halves present and no whitespace.
fn plausible(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(feature = "database")]
mod schema {
    use super::*;
    use shelf_pg::*;

    impl Schema for Member {
        fn name() -> &'static str {
            USERS
        }
        fn creates() -> &'static str {
            const_format::concatcp!(
                "CREATE TABLE IF NOT EXISTS ",
                USERS,
                " (
                    id          BIGSERIAL PRIMARY KEY,
                    name        VARCHAR(",
                NAME_MAX,
                ") NOT NULL,
                    email       VARCHAR(",
                EMAIL_MAX,
                ") UNIQUE NOT NULL,
                    address     TEXT NOT NULL DEFAULT '',
                    phone       VARCHAR(",
                PHONE_MAX,
                ") NOT NULL DEFAULT '',
                    hashword    TEXT NOT NULL,
                    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                    updated_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
                    deleted_at  TIMESTAMPTZ
                );"
            )
        }
        fn indices() -> &'static str {
            const_format::concatcp!(
                "CREATE INDEX IF NOT EXISTS idx_users_active ON ",
                USERS,
                " (id) WHERE deleted_at IS NULL;"
            )
        }
    }
}
