mod common;

use axum::http::StatusCode;
use common::{TEST_TOKEN, send, setup_test_app, test_state};
use marketdesk::router::init_router;
use serde_json::json;

#[tokio::test]
async fn test_admin_profile_requires_bearer_token() {
    let (status, body) = send(setup_test_app(), "GET", "/api/admin/profile", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Missing authorization header");

    let (status, _) = send(
        setup_test_app(),
        "PUT",
        "/api/admin/profile",
        None,
        Some(json!({ "name": "Nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_admin_profile() {
    let (status, body) = send(
        setup_test_app(),
        "GET",
        "/api/admin/profile",
        Some(TEST_TOKEN),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "admin@marketdesk.local");
    assert_eq!(body["role"], "Super Admin");
}

#[tokio::test]
async fn test_update_admin_profile_keeps_absent_fields() {
    let state = test_state();

    let (status, body) = send(
        init_router(state.clone()),
        "PUT",
        "/api/admin/profile",
        Some(TEST_TOKEN),
        Some(json!({ "name": " Ada Admin ", "phone": "+1 555 0100" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ada Admin");
    assert_eq!(body["phone"], "+1 555 0100");
    assert_eq!(body["email"], "admin@marketdesk.local");

    let (_, body) = send(
        init_router(state),
        "GET",
        "/api/admin/profile",
        Some(TEST_TOKEN),
        None,
    )
    .await;
    assert_eq!(body["name"], "Ada Admin");
}

#[tokio::test]
async fn test_update_admin_profile_validates_email() {
    let (status, body) = send(
        setup_test_app(),
        "PUT",
        "/api/admin/profile",
        Some(TEST_TOKEN),
        Some(json!({ "email": "not-an-email" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "Invalid email format");
}
