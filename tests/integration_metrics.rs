mod common;

use axum::http::StatusCode;
use common::{send, test_state};
use marketdesk::metrics::init_metrics;
use marketdesk::router::init_router;

#[tokio::test]
async fn test_request_metrics_use_route_template() {
    let handle = init_metrics().expect("recorder installed once per test binary");
    let state = test_state();

    for uri in ["/api/profiles/1", "/api/profiles/42"] {
        send(init_router(state.clone()), "GET", uri, None, None).await;
    }
    let (status, _) = send(init_router(state), "GET", "/api/profiles/1", None, None).await;
    assert_eq!(status, StatusCode::OK);

    let rendered = handle.render();
    assert!(rendered.contains(r#"path="/api/profiles/{id}""#));
    assert!(!rendered.contains(r#"path="/api/profiles/1""#));
    assert!(!rendered.contains(r#"path="/api/profiles/42""#));
}
