//! Bookshelf Backend Binary
//!
//! Serves the account and book API on BIND_ADDR (e.g. 0.0.0.0:8000).
//! Settings come from the environment, else from `--config`.

use clap::Parser;
use shelf_core::Config;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value = shelf_core::CONFIG_FILE)]
    config: String,
    #[arg(long, help = "Override the configured listen address")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shelf_core::log()?;
    shelf_core::kys();
    let args = Args::parse();
    let mut config = Config::load(&args.config)?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    log::info!("database at {}:{}/{}", config.db_host, config.db_port, config.db_name);
    shelf_server::run(config).await?;
    Ok(())
}
