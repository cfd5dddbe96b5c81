//! # Marketdesk Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`server`]: bind address and permission catalog override
//! - [`api`]: remote admin API base URL and bearer token key
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! Every struct has a `from_env()` constructor that falls back to a sensible
//! default for each variable, so a bare `.env`-less start works locally.
//!
//! # Example
//!
//! ```ignore
//! use marketdesk_config::{ApiConfig, CorsConfig, ServerConfig};
//!
//! let server = ServerConfig::from_env();
//! let api = ApiConfig::from_env();
//! let cors = CorsConfig::from_env();
//! ```

pub mod api;
pub mod cors;
pub mod server;

// Re-export commonly used types at crate root
pub use api::ApiConfig;
pub use cors::CorsConfig;
pub use server::ServerConfig;
