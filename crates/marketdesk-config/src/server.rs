//! HTTP server configuration.
//!
//! # Environment Variables
//!
//! - `HOST`: interface to bind (default: `0.0.0.0`)
//! - `PORT`: port to bind (default: `3000`)
//! - `PERMISSION_CATALOG_PATH`: optional JSON file replacing the built-in
//!   permission catalog
//! - `LOG_DIR`: directory for rolling log files (default: `storage/logs`)

use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub catalog_path: Option<PathBuf>,
    pub log_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            host: env::var("HOST").unwrap_or(defaults.host),
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            catalog_path: env::var("PERMISSION_CATALOG_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from),
            log_dir: env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            catalog_path: None,
            log_dir: PathBuf::from("storage/logs"),
        }
    }
}
