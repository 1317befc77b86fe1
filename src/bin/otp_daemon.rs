//! eventdesk-otp: standalone one-time-code service.
//!
//! Issues a 6-digit code per email and verifies by exact match, consuming
//! the code on success. Delivery is a stderr log line placeholder.
//!
//! Usage:
//!   eventdesk-otp [--port 4000]
//!
//! Environment variables:
//!   EVENTDESK_OTP_PORT - Port to listen on (default: 4000)

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use eventdesk::config::Config;
use eventdesk::otp::OtpStore;
use eventdesk::server::routes::otp;

#[derive(Debug, Parser)]
#[command(name = "eventdesk-otp", about = "One-time-code side service")]
struct OtpArgs {
    #[arg(long, env = "EVENTDESK_OTP_PORT", help = "Port to listen on")]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = OtpArgs::parse();
    let port = args.port.unwrap_or_else(|| Config::load().otp_port);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let store = Arc::new(OtpStore::new());
    let app = otp::routes().with_state(store).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    eprintln!("[otp] listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
