//! PostgreSQL connectivity and storage error kinds.
//!
//! ## Connectivity
//!
//! - [`db()`]: Establishes a database connection from a URL
//! - [`bootstrap()`]: Creates a table and its indices if absent
//!
//! ## Errors
//!
//! - [`StoreError`]: Typed outcome of a failed statement
//!
//! ## Table Names
//!
//! Constants for all persistent entities: users and books.
mod error;
mod schema;

pub use error::*;
pub use schema::*;

use std::sync::Arc;
use tokio_postgres::Client;

/// Establishes a database connection.
///
/// Returns an `Arc<Client>` suitable for sharing across actix workers.
/// The connection task is spawned onto the current runtime.
pub async fn db(url: &str) -> Result<Arc<Client>, PgErr> {
    log::info!("connecting to database");
    let tls = tokio_postgres::tls::NoTls;
    let (client, connection) = tokio_postgres::connect(url, tls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .execute("SET client_min_messages TO WARNING", &[])
        .await?;
    Ok(Arc::new(client))
}

/// Creates the table described by `S` and its indices, if they do not exist.
pub async fn bootstrap<S: Schema>(client: &Client) -> Result<(), PgErr> {
    log::info!("ensuring table ({})", S::name());
    client.batch_execute(S::creates()).await?;
    client.batch_execute(S::indices()).await?;
    Ok(())
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Table for registered member accounts.
#[rustfmt::skip]
pub const USERS: &str = "users";
/// Table for books owned by members.
#[rustfmt::skip]
pub const BOOKS: &str = "books";
