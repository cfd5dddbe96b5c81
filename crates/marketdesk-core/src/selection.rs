//! Permission selections and the reducer that edits them.
//!
//! [`Selections`] maps a category name to the labels selected in it. A category
//! with nothing selected is never stored, so two selection maps compare equal
//! exactly when they select the same labels.
//!
//! Edits go through [`toggle_type`] and [`toggle_category`], both pure: they
//! take the current map and return the next one. [`Selections::apply`] is the
//! checked entry point that first resolves an event against the catalog.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use utoipa::ToSchema;

use crate::catalog::{ALL, CatalogError, PermissionCatalog, PermissionCategory};

/// Sparse map of category name to selected labels, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(
    from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct Selections(BTreeMap<String, Vec<String>>);

/// A single user edit on a profile's selections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SelectionEvent {
    /// Toggle one label (the `"All"` sentinel included) within a category.
    ToggleType { category: String, label: String },
    /// Toggle the whole category.
    ToggleCategory { category: String },
}

impl SelectionEvent {
    pub fn category(&self) -> &str {
        match self {
            SelectionEvent::ToggleType { category, .. } => category,
            SelectionEvent::ToggleCategory { category } => category,
        }
    }
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels selected in `category`; empty when the category is absent.
    pub fn get(&self, category: &str) -> &[String] {
        self.0.get(category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_selected(&self, category: &str, label: &str) -> bool {
        self.get(category).iter().any(|l| l == label)
    }

    /// Literal completeness check: the number of selected labels equals the
    /// number of catalog labels, the sentinel counted as a label.
    pub fn is_category_fully_selected(&self, category: &PermissionCategory) -> bool {
        self.get(&category.name).len() == category.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Categories holding `"All"` together with other labels.
    ///
    /// [`toggle_category`] produces this state when it selects a whole
    /// category; [`toggle_type`] never does.
    pub fn violates_exclusivity(&self) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, labels)| labels.len() > 1 && labels.iter().any(|l| l == ALL))
            .map(|(category, _)| category.as_str())
            .collect()
    }

    /// Replaces the labels of `category`, dropping the entry when empty.
    pub fn with_category(mut self, category: &str, labels: Vec<String>) -> Self {
        if labels.is_empty() {
            self.0.remove(category);
        } else {
            self.0.insert(category.to_string(), labels);
        }
        self
    }

    /// Checks every category and label against the catalog and rejects
    /// repeated labels.
    pub fn validate(&self, catalog: &PermissionCatalog) -> Result<(), CatalogError> {
        for (category, labels) in &self.0 {
            let entry = catalog.resolve(category)?;
            let mut seen = HashSet::new();
            for label in labels {
                entry.resolve_label(label)?;
                if !seen.insert(label.as_str()) {
                    return Err(CatalogError::DuplicateLabel {
                        category: category.clone(),
                        label: label.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Resolves `event` against `catalog` and returns the next selections.
    pub fn apply(
        &self,
        catalog: &PermissionCatalog,
        event: &SelectionEvent,
    ) -> Result<Selections, CatalogError> {
        match event {
            SelectionEvent::ToggleType { category, label } => {
                let entry = catalog.resolve(category)?;
                let label = entry.resolve_label(label)?;
                Ok(toggle_type(self, &entry.name, label))
            }
            SelectionEvent::ToggleCategory { category } => {
                let entry = catalog.resolve(category)?;
                Ok(toggle_category(self, entry))
            }
        }
    }
}

impl From<BTreeMap<String, Vec<String>>> for Selections {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        map.into_iter().collect()
    }
}

impl From<Selections> for BTreeMap<String, Vec<String>> {
    fn from(selections: Selections) -> Self {
        selections.0
    }
}

impl FromIterator<(String, Vec<String>)> for Selections {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Selections::new(), |acc, (category, labels)| {
                acc.with_category(&category, labels)
            })
    }
}

/// Toggles one label in `category`.
///
/// Toggling `"All"` either clears the category (when `"All"` is selected) or
/// makes it exactly `{"All"}`. Toggling a concrete label first drops `"All"`,
/// then removes or appends the label.
pub fn toggle_type(selections: &Selections, category: &str, label: &str) -> Selections {
    let current = selections.get(category);

    let next = if label == ALL {
        if current.iter().any(|l| l == ALL) {
            Vec::new()
        } else {
            vec![ALL.to_string()]
        }
    } else {
        let mut labels: Vec<String> = current.iter().filter(|l| *l != ALL).cloned().collect();
        if let Some(pos) = labels.iter().position(|l| l == label) {
            labels.remove(pos);
        } else {
            labels.push(label.to_string());
        }
        labels
    };

    selections.clone().with_category(category, next)
}

/// Toggles a whole category.
///
/// Clears it when the literal completeness check holds, otherwise selects
/// every catalog label, `"All"` included.
pub fn toggle_category(selections: &Selections, category: &PermissionCategory) -> Selections {
    let next = if selections.is_category_fully_selected(category) {
        Vec::new()
    } else {
        category.labels.clone()
    };

    selections.clone().with_category(&category.name, next)
}
