use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    apply_selection_event, create_profile, get_profile, list_profiles, update_profile,
};

pub fn init_profiles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_profiles).post(create_profile))
        .route("/{id}", get(get_profile).put(update_profile))
        .route("/{id}/selections", post(apply_selection_event))
}
