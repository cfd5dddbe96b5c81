//! # Marketdesk Store
//!
//! Everything that holds or moves permission profiles:
//!
//! - [`repository`]: the [`ProfileRepository`] contract
//! - [`memory`]: in-memory store used by the service and as a test double
//! - [`http`]: HTTP-backed store talking to a Marketdesk service
//! - [`token`]: flat key/value token storage
//! - [`admin_client`]: client for `GET/PUT /api/admin/profile`
//! - [`editor`]: draft editing and submission of a single profile
//! - [`error`]: the [`StoreError`] shared by all of the above

pub mod admin_client;
pub mod editor;
pub mod error;
pub mod http;
pub mod memory;
pub mod repository;
pub mod token;

pub use admin_client::AdminProfileClient;
pub use editor::{CategoryRow, EditorError, LabelCell, ProfileEditor};
pub use error::StoreError;
pub use http::HttpProfileRepository;
pub use memory::InMemoryProfileRepository;
pub use repository::ProfileRepository;
pub use token::TokenStore;
