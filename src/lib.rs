//! Eventdesk - school event management dashboard backend.
//!
//! One axum service owns authentication, sessions, the page-level record
//! lists, and the persisted `users` / `event_requests` tables; a separate
//! small daemon handles one-time codes.

pub mod auth;
pub mod calendar;
pub mod cli;
pub mod config;
pub mod model;
pub mod otp;
pub mod roster;
pub mod seed;
pub mod server;
pub mod session;
pub mod store;

// Re-export Args for the binaries
pub use cli::Args;
