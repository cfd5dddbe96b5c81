//! Editing a single permission profile.
//!
//! [`ProfileEditor`] keeps a draft of one profile, runs selection events
//! through the reducer, renders the catalog/selection matrix and submits the
//! draft to a [`ProfileRepository`]. Nothing reaches the store until
//! [`ProfileEditor::submit`]; dropping the editor discards the draft.
//!
//! `submit` takes `&self` and guards itself with a `saving` flag, so a second
//! submit issued while the first is still awaiting the store is rejected with
//! [`EditorError::SaveInFlight`].

use marketdesk_core::{CatalogError, PermissionCatalog, SelectionEvent, Selections};
use marketdesk_models::{ProfileDraft, ProfileId, ProfileKind};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;
use tracing::{info, instrument};
use validator::Validate;

use crate::error::StoreError;
use crate::repository::ProfileRepository;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("A save is already in progress")]
    SaveInFlight,
    #[error("Invalid profile: {0}")]
    Invalid(String),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One checkbox of the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCell {
    pub label: String,
    pub checked: bool,
}

/// One category of the matrix, labels in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryRow {
    pub category: String,
    pub fully_selected: bool,
    pub labels: Vec<LabelCell>,
}

/// Resets the saving flag however the save ends, cancellation included.
struct SavingGuard<'a>(&'a AtomicBool);

impl Drop for SavingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct ProfileEditor {
    catalog: Arc<PermissionCatalog>,
    id: Mutex<Option<ProfileId>>,
    draft: ProfileDraft,
    saving: AtomicBool,
}

impl ProfileEditor {
    /// Editor for a new, unnamed view-only profile with nothing selected.
    pub fn new(catalog: Arc<PermissionCatalog>) -> Self {
        Self::from_parts(catalog, None, ProfileDraft::new("", ProfileKind::View))
    }

    /// Editor for an existing profile.
    pub async fn load(
        catalog: Arc<PermissionCatalog>,
        repo: &dyn ProfileRepository,
        id: ProfileId,
    ) -> Result<Self, EditorError> {
        let profile = repo.get(id).await?;
        Ok(Self::from_parts(catalog, Some(id), profile.to_draft()))
    }

    fn from_parts(
        catalog: Arc<PermissionCatalog>,
        id: Option<ProfileId>,
        draft: ProfileDraft,
    ) -> Self {
        Self {
            catalog,
            id: Mutex::new(id),
            draft,
            saving: AtomicBool::new(false),
        }
    }

    /// Id of the stored profile; `None` until a new profile is first saved.
    pub fn id(&self) -> Option<ProfileId> {
        *self.id.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn draft(&self) -> &ProfileDraft {
        &self.draft
    }

    pub fn selections(&self) -> &Selections {
        &self.draft.selections
    }

    pub fn is_saving(&self) -> bool {
        self.saving.load(Ordering::Acquire)
    }

    pub fn rename(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_kind(&mut self, kind: ProfileKind) {
        self.draft.kind = kind;
    }

    /// Runs `event` through the reducer and keeps the result as the draft.
    pub fn apply(&mut self, event: &SelectionEvent) -> Result<&Selections, CatalogError> {
        self.draft.selections = self.draft.selections.apply(&self.catalog, event)?;
        Ok(&self.draft.selections)
    }

    /// The catalog rendered against the draft's selections.
    pub fn rows(&self) -> Vec<CategoryRow> {
        render_rows(&self.catalog, &self.draft.selections)
    }

    /// Creates or updates the profile in `repo` and returns its id.
    #[instrument(skip(self, repo), fields(name = %self.draft.name))]
    pub async fn submit(&self, repo: &dyn ProfileRepository) -> Result<ProfileId, EditorError> {
        if self.saving.swap(true, Ordering::AcqRel) {
            return Err(EditorError::SaveInFlight);
        }
        let _guard = SavingGuard(&self.saving);

        let mut draft = self.draft.clone();
        draft.name = draft.name.trim().to_string();
        draft
            .validate()
            .map_err(|e| EditorError::Invalid(e.to_string()))?;
        draft.selections.validate(&self.catalog)?;

        let id = match self.id() {
            Some(id) => repo.update(id, draft).await?.id,
            None => {
                let id = repo.create(draft).await?;
                *self.id.lock().unwrap_or_else(PoisonError::into_inner) = Some(id);
                id
            }
        };

        info!(profile_id = %id, "Profile saved");
        Ok(id)
    }
}

/// Renders every catalog category against `selections`.
pub fn render_rows(catalog: &PermissionCatalog, selections: &Selections) -> Vec<CategoryRow> {
    catalog
        .categories()
        .iter()
        .map(|category| CategoryRow {
            category: category.name.clone(),
            fully_selected: selections.is_category_fully_selected(category),
            labels: category
                .labels
                .iter()
                .map(|label| LabelCell {
                    label: label.clone(),
                    checked: selections.is_selected(&category.name, label),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::InMemoryProfileRepository;
    use async_trait::async_trait;
    use marketdesk_core::ALL;
    use marketdesk_models::PermissionProfile;
    use std::time::Duration;

    const VENDORS: &str = "Vendor Management";

    fn toggle(label: &str) -> SelectionEvent {
        SelectionEvent::ToggleType {
            category: VENDORS.to_string(),
            label: label.to_string(),
        }
    }

    /// Store whose writes take a while, so two submits overlap.
    struct SlowRepository {
        inner: InMemoryProfileRepository,
        delay: Duration,
    }

    #[async_trait]
    impl ProfileRepository for SlowRepository {
        async fn list(&self) -> Result<Vec<PermissionProfile>, StoreError> {
            self.inner.list().await
        }

        async fn get(&self, id: ProfileId) -> Result<PermissionProfile, StoreError> {
            self.inner.get(id).await
        }

        async fn create(&self, draft: ProfileDraft) -> Result<ProfileId, StoreError> {
            tokio::time::sleep(self.delay).await;
            self.inner.create(draft).await
        }

        async fn update(
            &self,
            id: ProfileId,
            draft: ProfileDraft,
        ) -> Result<PermissionProfile, StoreError> {
            tokio::time::sleep(self.delay).await;
            self.inner.update(id, draft).await
        }
    }

    #[test]
    fn test_vendor_scenario() {
        let mut editor = ProfileEditor::new(Arc::new(PermissionCatalog::marketplace()));

        assert_eq!(editor.apply(&toggle("New Vendor")).unwrap().get(VENDORS), ["New Vendor"]);
        assert_eq!(editor.apply(&toggle(ALL)).unwrap().get(VENDORS), ["All"]);
        assert_eq!(editor.apply(&toggle("View Vendor")).unwrap().get(VENDORS), ["View Vendor"]);
    }

    #[test]
    fn test_rows_render_catalog_order() {
        let mut editor = ProfileEditor::new(Arc::new(PermissionCatalog::marketplace()));
        editor
            .apply(&SelectionEvent::ToggleCategory {
                category: VENDORS.to_string(),
            })
            .unwrap();

        let rows = editor.rows();
        assert_eq!(rows.len(), PermissionCatalog::marketplace().categories().len());

        let vendors = rows.iter().find(|r| r.category == VENDORS).unwrap();
        assert!(vendors.fully_selected);
        assert!(vendors.labels.iter().all(|cell| cell.checked));
        assert_eq!(vendors.labels.last().unwrap().label, ALL);

        let finance = rows.iter().find(|r| r.category == "Finance").unwrap();
        assert!(!finance.fully_selected);
        assert!(finance.labels.iter().all(|cell| !cell.checked));
    }

    #[tokio::test]
    async fn test_submit_creates_then_updates() {
        let repo = InMemoryProfileRepository::new();
        let mut editor = ProfileEditor::new(Arc::new(PermissionCatalog::marketplace()));
        editor.rename("  Vendor Desk ");
        editor.set_kind(ProfileKind::Edit);
        editor.apply(&toggle("New Vendor")).unwrap();

        let id = editor.submit(&repo).await.unwrap();
        assert_eq!(editor.id(), Some(id));
        assert_eq!(repo.get(id).await.unwrap().name, "Vendor Desk");

        editor.apply(&toggle(ALL)).unwrap();
        let same = editor.submit(&repo).await.unwrap();
        assert_eq!(same, id);
        assert_eq!(repo.len().await, 1);
        assert_eq!(repo.get(id).await.unwrap().selections.get(VENDORS), ["All"]);
        assert!(!editor.is_saving());
    }

    #[tokio::test]
    async fn test_submit_rejects_blank_name() {
        let repo = InMemoryProfileRepository::new();
        let editor = ProfileEditor::new(Arc::new(PermissionCatalog::marketplace()));

        let err = editor.submit(&repo).await.unwrap_err();
        assert!(matches!(err, EditorError::Invalid(_)));
        assert!(repo.is_empty().await);
        assert!(!editor.is_saving());
    }

    #[tokio::test]
    async fn test_double_submit_is_rejected() {
        let repo = SlowRepository {
            inner: InMemoryProfileRepository::new(),
            delay: Duration::from_millis(50),
        };
        let mut editor = ProfileEditor::new(Arc::new(PermissionCatalog::marketplace()));
        editor.rename("Support Desk");

        let (first, second) = tokio::join!(editor.submit(&repo), editor.submit(&repo));

        assert!(first.is_ok());
        assert!(matches!(second, Err(EditorError::SaveInFlight)));
        assert_eq!(repo.inner.len().await, 1);
        assert!(!editor.is_saving());
    }

    #[tokio::test]
    async fn test_load_existing_profile() {
        let repo = InMemoryProfileRepository::seeded();
        let catalog = Arc::new(PermissionCatalog::marketplace());

        let editor = ProfileEditor::load(catalog.clone(), &repo, ProfileId::new(1))
            .await
            .unwrap();
        assert_eq!(editor.draft().name, "Vendor Supervisor");
        assert_eq!(editor.id(), Some(ProfileId::new(1)));

        let missing = ProfileEditor::load(catalog, &repo, ProfileId::new(42)).await;
        assert!(matches!(
            missing,
            Err(EditorError::Store(StoreError::NotFound(_)))
        ));
    }
}
