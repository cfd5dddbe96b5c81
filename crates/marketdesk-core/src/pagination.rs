//! Pagination for list endpoints.
//!
//! The profile store is in memory, so pagination is applied to a fully
//! materialized list: [`PaginationParams::paginate`] slices the window and
//! builds the matching [`PaginationMeta`].
//!
//! Query parameters:
//! - `limit`: items per page (1-100, default 20)
//! - `offset`: items to skip (default 0)
//! - `page`: 1-indexed page number; takes precedence over `offset`

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_LIMIT: usize = 20;
pub const MAX_LIMIT: usize = 100;

/// Query strings send empty values as `""`; treat those as absent.
fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<usize>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    /// Total number of items across all pages
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    /// Present when page-based pagination was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PaginationParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<usize>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<usize>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<usize>,
}

impl PaginationParams {
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
    }

    #[must_use]
    pub fn page(&self) -> Option<usize> {
        self.page.map(|p| p.max(1))
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        match self.page() {
            Some(page) => page.saturating_sub(1).saturating_mul(self.limit()),
            None => self.offset.unwrap_or(0),
        }
    }

    /// Cuts the requested window out of `items`.
    pub fn paginate<T>(&self, items: Vec<T>) -> (Vec<T>, PaginationMeta) {
        let total = items.len();
        let limit = self.limit();
        let offset = self.offset();

        let window: Vec<T> = items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset.saturating_add(window.len()) < total;

        let meta = PaginationMeta {
            total,
            limit,
            offset,
            page: self.page(),
            has_more,
        };

        (window, meta)
    }
}
