use async_trait::async_trait;
use marketdesk_models::{PermissionProfile, ProfileDraft, ProfileId};

use crate::error::StoreError;

/// Storage contract for permission profiles.
///
/// Implementations assign ids on [`create`](ProfileRepository::create) and
/// report unknown ids as [`StoreError::NotFound`]. Callers validate drafts
/// (name, catalog membership) before handing them over.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// All profiles, ordered by id.
    async fn list(&self) -> Result<Vec<PermissionProfile>, StoreError>;

    async fn get(&self, id: ProfileId) -> Result<PermissionProfile, StoreError>;

    async fn create(&self, draft: ProfileDraft) -> Result<ProfileId, StoreError>;

    /// Replaces name, kind and selections of an existing profile.
    async fn update(
        &self,
        id: ProfileId,
        draft: ProfileDraft,
    ) -> Result<PermissionProfile, StoreError>;
}
