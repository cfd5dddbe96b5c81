use marketdesk_core::{AppError, PermissionCatalog, SelectionEvent};
use marketdesk_models::{
    PaginatedProfilesResponse, PermissionProfile, ProfileDraft, ProfileFilterParams, ProfileId,
};
use marketdesk_store::ProfileRepository;
use tracing::{info, instrument, warn};

use crate::metrics::{track_exclusivity_violation, track_profile_saved, track_selection_event};

pub struct ProfileService;

impl ProfileService {
    #[instrument(skip(repo))]
    pub async fn list_profiles(
        repo: &dyn ProfileRepository,
        filters: ProfileFilterParams,
    ) -> Result<PaginatedProfilesResponse, AppError> {
        let matching: Vec<PermissionProfile> = repo
            .list()
            .await?
            .into_iter()
            .filter(|profile| filters.matches(profile))
            .collect();

        let (data, meta) = filters.pagination.paginate(matching);
        Ok(PaginatedProfilesResponse { data, meta })
    }

    pub async fn get_profile(
        repo: &dyn ProfileRepository,
        id: ProfileId,
    ) -> Result<PermissionProfile, AppError> {
        Ok(repo.get(id).await?)
    }

    #[instrument(skip(repo, catalog, draft), fields(name = %draft.name))]
    pub async fn create_profile(
        repo: &dyn ProfileRepository,
        catalog: &PermissionCatalog,
        draft: ProfileDraft,
    ) -> Result<PermissionProfile, AppError> {
        let draft = Self::prepare(catalog, draft)?;
        let id = repo.create(draft).await?;
        let profile = repo.get(id).await?;

        track_profile_saved("create");
        info!(profile_id = %id, "Permission profile created");
        Ok(profile)
    }

    #[instrument(skip(repo, catalog, draft))]
    pub async fn update_profile(
        repo: &dyn ProfileRepository,
        catalog: &PermissionCatalog,
        id: ProfileId,
        draft: ProfileDraft,
    ) -> Result<PermissionProfile, AppError> {
        let draft = Self::prepare(catalog, draft)?;
        let profile = repo.update(id, draft).await?;

        track_profile_saved("update");
        info!(profile_id = %id, "Permission profile updated");
        Ok(profile)
    }

    /// Runs one selection event through the reducer and stores the result.
    #[instrument(skip(repo, catalog))]
    pub async fn apply_selection_event(
        repo: &dyn ProfileRepository,
        catalog: &PermissionCatalog,
        id: ProfileId,
        event: SelectionEvent,
    ) -> Result<PermissionProfile, AppError> {
        let profile = repo.get(id).await?;
        let selections = profile.selections.apply(catalog, &event)?;

        for category in selections.violates_exclusivity() {
            warn!(
                profile_id = %id,
                category,
                "Category holds \"All\" alongside other permission types"
            );
            track_exclusivity_violation(category);
        }

        let mut draft = profile.to_draft();
        draft.selections = selections;
        let updated = repo.update(id, draft).await?;

        track_selection_event(event_action(&event));
        Ok(updated)
    }

    fn prepare(catalog: &PermissionCatalog, mut draft: ProfileDraft) -> Result<ProfileDraft, AppError> {
        draft.name = draft.name.trim().to_string();
        draft.selections.validate(catalog)?;
        Ok(draft)
    }
}

fn event_action(event: &SelectionEvent) -> &'static str {
    match event {
        SelectionEvent::ToggleType { .. } => "toggle_type",
        SelectionEvent::ToggleCategory { .. } => "toggle_category",
    }
}
