//! HTTP backend for member accounts and books.
//!
//! Wires the account and book handlers into a single actix-web server
//! backed by PostgreSQL.

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;
use shelf_auth::Crypto;
use shelf_auth::Member;
use shelf_auth::MemberRepository;
use shelf_books::Book;
use shelf_books::BookRepository;
use shelf_core::Config;
use shelf_core::Reply;
use shelf_core::ServiceError;
use std::sync::Arc;
use tokio_postgres::Client;

/// Liveness of the backing store.
#[allow(async_fn_in_trait)]
pub trait Liveness {
    async fn healthy(&self) -> bool;
}

impl Liveness for Arc<Client> {
    async fn healthy(&self) -> bool {
        self.simple_query("SELECT 1")
            .await
            .inspect_err(|e| log::error!("storage ping failed: {}", e))
            .is_ok()
    }
}

async fn health<R: Liveness + 'static>(db: web::Data<R>) -> HttpResponse {
    match db.healthy().await {
        true => HttpResponse::Ok().json(Reply::message("healthy")),
        false => HttpResponse::ServiceUnavailable().json(Reply::message("storage unavailable")),
    }
}

/// Registers the health check and every account and book route against
/// repository `R`.
///
/// The caller provides `web::Data<R>` and `web::Data<Crypto>`.
#[rustfmt::skip]
pub fn routes<R>(cfg: &mut web::ServiceConfig)
where
    R: MemberRepository + BookRepository + Liveness + 'static,
{
    cfg.app_data(web::JsonConfig::default().error_handler(|e, _| ServiceError::validation(e.to_string()).into()))
        .app_data(web::PathConfig::default().error_handler(|e, _| ServiceError::validation(e.to_string()).into()))
        .route("/health",     web::get().to(health::<R>))
        .route("/register",   web::post().to(shelf_auth::register::<R>))
        .route("/login",      web::post().to(shelf_auth::login::<R>))
        .route("/users",      web::get().to(shelf_auth::profile::<R>))
        .route("/users",      web::put().to(shelf_auth::update::<R>))
        .route("/users",      web::delete().to(shelf_auth::deactivate::<R>))
        .route("/books",      web::post().to(shelf_books::add::<R>))
        .route("/books",      web::get().to(shelf_books::all::<R>))
        .route("/mybooks",    web::get().to(shelf_books::mine::<R>))
        .route("/books/{id}", web::put().to(shelf_books::update::<R>))
        .route("/books/{id}", web::delete().to(shelf_books::delete::<R>));
}

pub async fn run(config: Config) -> Result<(), std::io::Error> {
    let client = shelf_pg::db(&config.url())
        .await
        .map_err(std::io::Error::other)?;
    shelf_pg::bootstrap::<Member>(&client)
        .await
        .map_err(std::io::Error::other)?;
    shelf_pg::bootstrap::<Book>(&client)
        .await
        .map_err(std::io::Error::other)?;
    let crypto = web::Data::new(Crypto::new(config.jwt_key.as_bytes()));
    let client = web::Data::new(client);
    log::info!("starting server on {}", config.bind_addr);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header(),
            )
            .app_data(crypto.clone())
            .app_data(client.clone())
            .configure(routes::<Arc<Client>>)
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
