use anyhow::Context;
use dotenvy::dotenv;
use marketdesk::logging::init_tracing;
use marketdesk::marketdesk_config::ServerConfig;
use marketdesk::metrics::{init_metrics, metrics_router};
use marketdesk::router::init_router;
use marketdesk::state::init_app_state;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = ServerConfig::from_env();
    init_tracing(&config.log_dir)?;

    let state = init_app_state(&config)?;
    let mut app = init_router(state);
    if let Some(handle) = init_metrics() {
        app = app.merge(metrics_router(handle));
    }

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    info!(%address, "Server running");
    info!("Swagger UI available at http://{}/swagger-ui", address);
    info!("Scalar UI available at http://{}/scalar", address);

    axum::serve(listener, app).await?;
    Ok(())
}
