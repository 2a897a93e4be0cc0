//! Core identifiers, error kinds and runtime helpers for bookshelf.
//!
//! Everything here is storage and transport agnostic; the `server` feature
//! adds logger setup, signal handling and HTTP rendering of [`ServiceError`].
mod config;
mod error;
mod id;
mod reply;

pub use config::*;
pub use error::*;
pub use id::*;
pub use reply::*;

/// Validity window of an issued access token.
pub const TOKEN_DURATION: std::time::Duration = std::time::Duration::from_secs(60 * 60);

/// Seconds since the unix epoch.
pub fn now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}

/// Terminal logging at INFO plus a per-run DEBUG file under `logs/`.
#[cfg(feature = "server")]
pub fn log() -> std::io::Result<()> {
    use simplelog::*;
    std::fs::create_dir_all("logs")?;
    let path = format!("logs/backend-{}.log", now());
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Off)
        .add_filter_ignore_str("tokio_postgres")
        .build();
    CombinedLogger::init(vec![
        TermLogger::new(LevelFilter::Info, config.clone(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(LevelFilter::Debug, config, std::fs::File::create(path)?),
    ])
    .map_err(std::io::Error::other)
}

/// Exits the process on the first Ctrl+C.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("interrupt received, shutting down");
            std::process::exit(0);
        }
    });
}
