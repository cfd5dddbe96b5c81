use axum::{Json, extract::State};
use marketdesk_core::PermissionCatalog;
use tracing::instrument;

use crate::state::AppState;

/// The permission catalog in display order
#[utoipa::path(
    get,
    path = "/api/permissions/catalog",
    responses(
        (status = 200, description = "Every category with its permission types", body = PermissionCatalog)
    ),
    tag = "Permissions"
)]
#[instrument(skip(state))]
pub async fn get_catalog(State(state): State<AppState>) -> Json<PermissionCatalog> {
    Json(state.catalog.as_ref().clone())
}
