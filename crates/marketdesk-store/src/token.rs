//! Flat key/value token storage.
//!
//! Mirrors the browser local storage the dashboard keeps its bearer token in:
//! one string per key, trusted as-is.

use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStore {
    entries: HashMap<String, String>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store holding `token` under `key`; a blank token leaves it empty.
    pub fn with_token(key: &str, token: &str) -> Self {
        let mut store = Self::new();
        store.set(key, token);
        store
    }

    /// Reads `ADMIN_TOKEN` from the environment into `key`.
    pub fn from_env(key: &str) -> Self {
        match std::env::var("ADMIN_TOKEN") {
            Ok(token) => Self::with_token(key, &token),
            Err(_) => Self::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Blank values are treated as a removal.
    pub fn set(&mut self, key: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.entries.remove(key);
        } else {
            self.entries.insert(key.to_string(), value.to_string());
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }
}
