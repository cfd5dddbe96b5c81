//! In-memory profile store.
//!
//! Backs the service (nothing is persisted; a restart brings back the seed
//! profile only) and doubles as the store in tests.

use async_trait::async_trait;
use chrono::Utc;
use marketdesk_core::{ALL, Selections};
use marketdesk_models::{PermissionProfile, ProfileDraft, ProfileId, ProfileKind};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::error::StoreError;
use crate::repository::ProfileRepository;

#[derive(Debug)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<BTreeMap<ProfileId, PermissionProfile>>,
    next_id: AtomicU64,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// A store holding the single example profile the dashboard ships with.
    pub fn seeded() -> Self {
        let now = Utc::now();
        let example = PermissionProfile {
            id: ProfileId::new(1),
            name: "Vendor Supervisor".to_string(),
            kind: ProfileKind::Edit,
            selections: Selections::new()
                .with_category("Vendor Management", vec![ALL.to_string()])
                .with_category(
                    "Product Management",
                    vec!["Approved Product".to_string(), "View Product".to_string()],
                )
                .with_category("Customer Service", vec!["Open Tickets".to_string()]),
            created_at: now,
            updated_at: now,
        };

        let mut profiles = BTreeMap::new();
        profiles.insert(example.id, example);

        Self {
            profiles: RwLock::new(profiles),
            next_id: AtomicU64::new(2),
        }
    }

    pub async fn len(&self) -> usize {
        self.profiles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.profiles.read().await.is_empty()
    }
}

impl Default for InMemoryProfileRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn list(&self) -> Result<Vec<PermissionProfile>, StoreError> {
        Ok(self.profiles.read().await.values().cloned().collect())
    }

    async fn get(&self, id: ProfileId) -> Result<PermissionProfile, StoreError> {
        self.profiles
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: ProfileDraft) -> Result<ProfileId, StoreError> {
        let id = ProfileId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        let now = Utc::now();

        let profile = PermissionProfile {
            id,
            name: draft.name,
            kind: draft.kind,
            selections: draft.selections,
            created_at: now,
            updated_at: now,
        };

        self.profiles.write().await.insert(id, profile);
        debug!(profile_id = %id, "Profile created");

        Ok(id)
    }

    #[instrument(skip(self, draft))]
    async fn update(
        &self,
        id: ProfileId,
        draft: ProfileDraft,
    ) -> Result<PermissionProfile, StoreError> {
        let mut profiles = self.profiles.write().await;
        let profile = profiles.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        profile.name = draft.name;
        profile.kind = draft.kind;
        profile.selections = draft.selections;
        profile.updated_at = Utc::now();
        debug!(profile_id = %id, "Profile updated");

        Ok(profile.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_has_example_profile() {
        let repo = InMemoryProfileRepository::seeded();
        let profiles = repo.list().await.unwrap();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Vendor Supervisor");
        assert!(profiles[0].selections.is_selected("Vendor Management", ALL));
    }

    #[tokio::test]
    async fn test_create_assigns_increasing_ids() {
        let repo = InMemoryProfileRepository::seeded();
        let a = repo
            .create(ProfileDraft::new("Support Desk", ProfileKind::View))
            .await
            .unwrap();
        let b = repo
            .create(ProfileDraft::new("Finance Desk", ProfileKind::Edit))
            .await
            .unwrap();

        assert_eq!(a, ProfileId::new(2));
        assert!(b > a);
        assert_eq!(repo.len().await, 3);

        let created = repo.get(a).await.unwrap();
        assert_eq!(created.name, "Support Desk");
        assert!(created.selections.is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let repo = InMemoryProfileRepository::new();
        let err = repo.get(ProfileId::new(99)).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryProfileRepository::seeded();
        let mut draft = ProfileDraft::new("Vendor Viewer", ProfileKind::View);
        draft.selections = Selections::new()
            .with_category("Vendor Management", vec!["View Vendor".to_string()]);

        let updated = repo.update(ProfileId::new(1), draft).await.unwrap();
        assert_eq!(updated.name, "Vendor Viewer");
        assert_eq!(updated.kind, ProfileKind::View);
        assert_eq!(updated.selections.get("Vendor Management"), ["View Vendor"]);
        assert!(updated.selections.get("Product Management").is_empty());
        assert!(updated.updated_at >= updated.created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_is_not_found() {
        let repo = InMemoryProfileRepository::new();
        let err = repo
            .update(ProfileId::new(5), ProfileDraft::new("Ghost", ProfileKind::View))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == ProfileId::new(5)));
    }
}
