//! Books owned by members.
//!
//! Anyone may list books; only the owner may change or remove one.
//! A book that does not exist and a book owned by someone else look the
//! same to the caller: both are `NotFound`.
//!
//! - [`Book`]: Stored book with its owner's display name
//! - [`Shelf`]: add, list, update, delete
//! - [`BookRepository`]: storage port for book rows
mod book;
mod dto;
mod repository;
mod shelf;

pub use book::*;
pub use dto::*;
pub use repository::*;
pub use shelf::*;

#[cfg(feature = "server")]
mod handlers;
#[cfg(feature = "server")]
pub use handlers::*;
