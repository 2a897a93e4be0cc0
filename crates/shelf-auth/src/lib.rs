//! Credentials, password hashing, ownership checks and member accounts.
//!
//! JWT-based stateless authentication with Argon2 password hashing.
//! Tokens are never stored; expiry is the only way one stops working.
//!
//! ## Identity Types
//!
//! - [`Member`]: Registered account with contact details
//! - [`Identity`]: Member id proven by a validated token
//!
//! ## Security
//!
//! - [`Crypto`]: JWT issuing and validation
//! - [`Claims`]: JWT payload structure
//! - [`password`]: Argon2 hashing and verification
//! - [`authorize`]: Ownership gate for mutating owned resources
//!
//! ## Accounts
//!
//! - [`Accounts`]: register, login, profile, update, deactivate
//! - [`MemberRepository`]: storage port for member rows
mod accounts;
mod claims;
mod crypto;
mod dto;
mod gate;
mod identity;
mod member;
pub mod password;
mod repository;

pub use accounts::*;
pub use claims::*;
pub use crypto::*;
pub use dto::*;
pub use gate::*;
pub use identity::*;
pub use member::*;
pub use repository::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
mod middleware;
#[cfg(feature = "server")]
pub use handlers::*;
#[cfg(feature = "server")]
pub use middleware::*;
