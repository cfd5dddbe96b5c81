use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{get_admin_profile, update_admin_profile};

pub fn init_admin_router() -> Router<AppState> {
    Router::new().route("/profile", get(get_admin_profile).put(update_admin_profile))
}
