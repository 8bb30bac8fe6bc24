//! hello-api server.
//!
//! ```text
//!     Client Request
//!     ──────────────▶ request id ─▶ trace span ─▶ metrics ─▶ body limit ─▶ router
//!                                                                            │
//!            ┌─────────────┬──────────────┬──────────────┬──────────────┬────┘
//!            ▼             ▼              ▼              ▼              ▼
//!     /hello/{name}      /add    /multiply/{x}/{y}     /user          /sheet
//!            │             │              │              │              │
//!            └─────────────┴──────┬───────┴──────────────┘              ▼
//!                                 ▼                               SheetWriter
//!                        JSON or 422 {detail}                   (file on disk)
//! ```

use std::path::PathBuf;

use clap::Parser;

use hello_api::config::{load_config, ApiConfig};
use hello_api::lifecycle;
use hello_api::observability::logging::init_logging;

#[derive(Parser)]
#[command(name = "hello-api")]
#[command(about = "Small validated JSON API", long_about = None)]
struct Args {
    /// TOML config file; defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override listener.bind_address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ApiConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    init_logging(&config.observability);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "hello-api starting");

    lifecycle::start(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
