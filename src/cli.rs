//! Command-line arguments for the server binaries.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "eventdesk", about = "School event management dashboard API")]
pub struct Args {
    #[arg(long, env = "EVENTDESK_PORT", help = "Port to listen on")]
    pub port: Option<u16>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    #[arg(long, env = "EVENTDESK_DATA_DIR", help = "Directory for persisted tables")]
    pub data_dir: Option<PathBuf>,
}
