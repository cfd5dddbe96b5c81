//! The permission catalog.
//!
//! A catalog is an ordered list of categories, each holding an ordered list of
//! permission-type labels. Every category carries the [`ALL`] sentinel exactly
//! once; it stands for "every concrete label in this category".
//!
//! The catalog is built once at startup (either [`PermissionCatalog::marketplace`]
//! or a JSON override) and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;
use utoipa::ToSchema;

/// Sentinel label meaning "every concrete label in the category".
pub const ALL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown permission category: {0}")]
    UnknownCategory(String),
    #[error("Unknown permission type '{label}' in category '{category}'")]
    UnknownLabel { category: String, label: String },
    #[error("Permission category name must not be empty")]
    EmptyCategoryName,
    #[error("Duplicate permission category: {0}")]
    DuplicateCategory(String),
    #[error("Duplicate permission type '{label}' in category '{category}'")]
    DuplicateLabel { category: String, label: String },
    #[error("Category '{0}' must contain the \"All\" permission type exactly once")]
    MissingAll(String),
    #[error("Permission catalog must contain at least one category")]
    Empty,
    #[error("Invalid permission catalog: {0}")]
    Parse(String),
}

/// One row of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PermissionCategory {
    pub name: String,
    /// Ordered labels, [`ALL`] included.
    pub labels: Vec<String>,
}

impl PermissionCategory {
    pub fn new(name: impl Into<String>, labels: &[&str]) -> Self {
        Self {
            name: name.into(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Number of labels, the sentinel counted as one.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels other than the sentinel, in catalog order.
    pub fn concrete_labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str).filter(|l| *l != ALL)
    }

    /// Returns `label` if it belongs to this category.
    pub fn resolve_label(&self, label: &str) -> Result<&str, CatalogError> {
        self.labels
            .iter()
            .find(|l| *l == label)
            .map(String::as_str)
            .ok_or_else(|| CatalogError::UnknownLabel {
                category: self.name.clone(),
                label: label.to_string(),
            })
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyCategoryName);
        }

        let mut seen = HashSet::new();
        for label in &self.labels {
            if !seen.insert(label.as_str()) {
                return Err(CatalogError::DuplicateLabel {
                    category: self.name.clone(),
                    label: label.clone(),
                });
            }
        }

        if !seen.contains(ALL) {
            return Err(CatalogError::MissingAll(self.name.clone()));
        }

        Ok(())
    }
}

/// Immutable mapping of category name to its ordered labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PermissionCatalog {
    categories: Vec<PermissionCategory>,
}

impl PermissionCatalog {
    /// Builds a catalog, rejecting an empty list, empty names, duplicates and
    /// categories without exactly one [`ALL`] label.
    pub fn new(categories: Vec<PermissionCategory>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut names = HashSet::new();
        for category in &categories {
            category.validate()?;
            if !names.insert(category.name.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.name.clone()));
            }
        }

        Ok(Self { categories })
    }

    /// Parses a JSON array of `{"name": ..., "labels": [...]}` objects.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let categories: Vec<PermissionCategory> =
            serde_json::from_str(raw).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(categories)
    }

    /// The built-in catalog for the marketplace admin.
    pub fn marketplace() -> Self {
        Self {
            categories: vec![
                PermissionCategory::new(
                    "Vendor Management",
                    &[
                        "New Vendor",
                        "Approved Vendor",
                        "Vendor Service",
                        "View Vendor",
                        ALL,
                    ],
                ),
                PermissionCategory::new(
                    "Product Management",
                    &[
                        "New Product",
                        "Approved Product",
                        "Product Category",
                        "View Product",
                        ALL,
                    ],
                ),
                PermissionCategory::new(
                    "Inventory",
                    &["Stock Levels", "Stock Adjustment", "Low Stock Alerts", ALL],
                ),
                PermissionCategory::new(
                    "Order Management",
                    &[
                        "New Order",
                        "Processing Order",
                        "Delivered Order",
                        "Cancelled Order",
                        "Refunds",
                        ALL,
                    ],
                ),
                PermissionCategory::new(
                    "Customer Service",
                    &["Open Tickets", "Assign Tickets", "Close Tickets", ALL],
                ),
                PermissionCategory::new(
                    "Content Management",
                    &["Pages", "Banners", "Blog Posts", "FAQ", ALL],
                ),
                PermissionCategory::new(
                    "Admin Management",
                    &["New Admin", "Edit Admin", "Permission Profiles", ALL],
                ),
                PermissionCategory::new(
                    "Finance",
                    &["Commission Settings", "Payouts", "Tax Settings", ALL],
                ),
                PermissionCategory::new(
                    "Analytics",
                    &["Sales Charts", "Vendor Charts", "Customer Charts", ALL],
                ),
            ],
        }
    }

    pub fn categories(&self) -> &[PermissionCategory] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&PermissionCategory> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn resolve(&self, name: &str) -> Result<&PermissionCategory, CatalogError> {
        self.category(name)
            .ok_or_else(|| CatalogError::UnknownCategory(name.to_string()))
    }
}

impl Default for PermissionCatalog {
    fn default() -> Self {
        Self::marketplace()
    }
}
