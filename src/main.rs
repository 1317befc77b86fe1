//! eventdesk: the dashboard API server.
//!
//! Usage:
//!   eventdesk [--port 8080] [--config path/to/eventdesk.toml] [--data-dir DIR]
//!
//! Environment variables:
//!   EVENTDESK_PORT     - Port to listen on (default: 8080)
//!   EVENTDESK_DATA_DIR - Directory for persisted tables (default: ~/.eventdesk)

use anyhow::Result;
use clap::Parser;
use eventdesk::config::Config;
use eventdesk::{server, Args};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load(),
    };
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    eprintln!("eventdesk starting...");
    eprintln!("Port: {}", config.port);
    eprintln!("Data dir: {}", config.data_dir.display());

    server::run(config).await
}
