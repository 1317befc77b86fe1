//! Process configuration for the server and OTP daemon.
//!
//! Defaults cover local use; a TOML file and `EVENTDESK_*` environment
//! variables may override them, with the environment winning.

use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port the dashboard API listens on.
    pub port: u16,
    /// Port the standalone OTP daemon listens on.
    pub otp_port: u16,
    /// Directory holding the persisted tables.
    pub data_dir: PathBuf,
}

/// Optional-field mirror of [`Config`] for the TOML file.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    port: Option<u16>,
    otp_port: Option<u16>,
    data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            otp_port: 4000,
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".eventdesk")
}

impl Config {
    /// Defaults plus environment overrides.
    pub fn load() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    /// Read a TOML config file, then apply environment overrides on top.
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let file: FileConfig = toml::from_str(&text)?;
        let mut config = Self::default();
        if let Some(port) = file.port {
            config.port = port;
        }
        if let Some(otp_port) = file.otp_port {
            config.otp_port = otp_port;
        }
        if let Some(data_dir) = file.data_dir {
            config.data_dir = data_dir;
        }
        config.apply_env();
        Ok(config)
    }

    fn apply_env(&mut self) {
        if let Ok(port) = env::var("EVENTDESK_PORT") {
            if let Ok(p) = port.parse() {
                self.port = p;
            }
        }
        if let Ok(port) = env::var("EVENTDESK_OTP_PORT") {
            if let Ok(p) = port.parse() {
                self.otp_port = p;
            }
        }
        if let Ok(dir) = env::var("EVENTDESK_DATA_DIR") {
            self.data_dir = PathBuf::from(dir);
        }
    }
}
