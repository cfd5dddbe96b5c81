//! Request extractors for cross-cutting concerns.
//!
//! - [`auth`]: bearer token extraction for the admin account endpoints

pub mod auth;
