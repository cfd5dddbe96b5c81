use axum::{Json, extract::State};
use marketdesk_core::AppError;
use marketdesk_models::{AdminAccount, UpdateAdminAccountDto};
use tracing::{info, instrument};

use crate::middleware::auth::BearerToken;
use crate::modules::ErrorResponse;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Get the signed-in administrator's account
#[utoipa::path(
    get,
    path = "/api/admin/profile",
    responses(
        (status = 200, description = "Account profile", body = AdminAccount),
        (status = 401, description = "Missing bearer token", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _token))]
pub async fn get_admin_profile(
    State(state): State<AppState>,
    _token: BearerToken,
) -> Result<Json<AdminAccount>, AppError> {
    let account = state.admin_account.read().await.clone();
    Ok(Json(account))
}

/// Update the signed-in administrator's account
#[utoipa::path(
    put,
    path = "/api/admin/profile",
    request_body = UpdateAdminAccountDto,
    responses(
        (status = 200, description = "Updated account profile", body = AdminAccount),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 401, description = "Missing bearer token", body = ErrorResponse),
        (status = 422, description = "Invalid field value", body = ErrorResponse)
    ),
    tag = "Admin",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, _token, dto))]
pub async fn update_admin_profile(
    State(state): State<AppState>,
    _token: BearerToken,
    ValidatedJson(dto): ValidatedJson<UpdateAdminAccountDto>,
) -> Result<Json<AdminAccount>, AppError> {
    let mut account = state.admin_account.write().await;
    account.apply(dto);
    info!(email = %account.email, "Admin account updated");
    Ok(Json(account.clone()))
}
