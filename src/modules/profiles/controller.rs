use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::StatusCode,
};
use marketdesk_core::{AppError, SelectionEvent};
use marketdesk_models::{
    PaginatedProfilesResponse, PermissionProfile, ProfileDraft, ProfileFilterParams, ProfileId,
};
use tracing::instrument;

use crate::modules::ErrorResponse;
use crate::modules::profiles::service::ProfileService;
use crate::state::AppState;
use crate::validator::{ValidatedJson, json_rejection};

/// List permission profiles
#[utoipa::path(
    get,
    path = "/api/profiles",
    params(ProfileFilterParams),
    responses(
        (status = 200, description = "Matching profiles, paginated", body = PaginatedProfilesResponse),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn list_profiles(
    State(state): State<AppState>,
    Query(filters): Query<ProfileFilterParams>,
) -> Result<Json<PaginatedProfilesResponse>, AppError> {
    let profiles = ProfileService::list_profiles(state.profiles.as_ref(), filters).await?;
    Ok(Json(profiles))
}

/// Create a permission profile
#[utoipa::path(
    post,
    path = "/api/profiles",
    request_body = ProfileDraft,
    responses(
        (status = 201, description = "Profile created", body = PermissionProfile),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Blank name or unknown category/permission type", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
#[instrument(skip(state, draft))]
pub async fn create_profile(
    State(state): State<AppState>,
    ValidatedJson(draft): ValidatedJson<ProfileDraft>,
) -> Result<(StatusCode, Json<PermissionProfile>), AppError> {
    let profile =
        ProfileService::create_profile(state.profiles.as_ref(), &state.catalog, draft).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// Get a permission profile
#[utoipa::path(
    get,
    path = "/api/profiles/{id}",
    params(
        ("id" = u64, Path, description = "Profile ID")
    ),
    responses(
        (status = 200, description = "Profile details", body = PermissionProfile),
        (status = 404, description = "Profile not found", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<PermissionProfile>, AppError> {
    let profile = ProfileService::get_profile(state.profiles.as_ref(), ProfileId::new(id)).await?;
    Ok(Json(profile))
}

/// Replace a permission profile
#[utoipa::path(
    put,
    path = "/api/profiles/{id}",
    params(
        ("id" = u64, Path, description = "Profile ID")
    ),
    request_body = ProfileDraft,
    responses(
        (status = 200, description = "Profile updated", body = PermissionProfile),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse),
        (status = 422, description = "Blank name or unknown category/permission type", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
#[instrument(skip(state, draft))]
pub async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    ValidatedJson(draft): ValidatedJson<ProfileDraft>,
) -> Result<Json<PermissionProfile>, AppError> {
    let profile = ProfileService::update_profile(
        state.profiles.as_ref(),
        &state.catalog,
        ProfileId::new(id),
        draft,
    )
    .await?;
    Ok(Json(profile))
}

/// Apply one selection event to a profile
#[utoipa::path(
    post,
    path = "/api/profiles/{id}/selections",
    params(
        ("id" = u64, Path, description = "Profile ID")
    ),
    request_body = SelectionEvent,
    responses(
        (status = 200, description = "Profile with the updated selections", body = PermissionProfile),
        (status = 400, description = "Malformed event", body = ErrorResponse),
        (status = 404, description = "Profile not found", body = ErrorResponse),
        (status = 422, description = "Unknown category or permission type", body = ErrorResponse)
    ),
    tag = "Profiles"
)]
#[instrument(skip(state))]
pub async fn apply_selection_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    event: Result<Json<SelectionEvent>, JsonRejection>,
) -> Result<Json<PermissionProfile>, AppError> {
    let Json(event) = event.map_err(json_rejection)?;
    let profile = ProfileService::apply_selection_event(
        state.profiles.as_ref(),
        &state.catalog,
        ProfileId::new(id),
        event,
    )
    .await?;
    Ok(Json(profile))
}
