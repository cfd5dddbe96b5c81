use anyhow::Context;
use chrono::Utc;
use marketdesk_config::{CorsConfig, ServerConfig};
use marketdesk_core::PermissionCatalog;
use marketdesk_models::AdminAccount;
use marketdesk_store::{InMemoryProfileRepository, ProfileRepository};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<PermissionCatalog>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub admin_account: Arc<RwLock<AdminAccount>>,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// State backed by the seeded in-memory store.
    pub fn in_memory(catalog: PermissionCatalog, cors_config: CorsConfig) -> Self {
        Self {
            catalog: Arc::new(catalog),
            profiles: Arc::new(InMemoryProfileRepository::seeded()),
            admin_account: Arc::new(RwLock::new(default_admin_account())),
            cors_config,
        }
    }
}

/// The account shown before anyone edits it.
pub fn default_admin_account() -> AdminAccount {
    AdminAccount {
        name: "Marketplace Admin".to_string(),
        email: "admin@marketdesk.local".to_string(),
        phone: None,
        role: "Super Admin".to_string(),
        updated_at: Utc::now(),
    }
}

/// Loads the permission catalog, preferring the JSON override when configured.
pub fn load_catalog(config: &ServerConfig) -> anyhow::Result<PermissionCatalog> {
    let Some(path) = &config.catalog_path else {
        return Ok(PermissionCatalog::marketplace());
    };

    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read permission catalog {}", path.display()))?;
    let catalog = PermissionCatalog::from_json_str(&raw)
        .with_context(|| format!("Invalid permission catalog {}", path.display()))?;

    info!(
        path = %path.display(),
        categories = catalog.categories().len(),
        "Loaded permission catalog override"
    );
    Ok(catalog)
}

pub fn init_app_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let catalog = load_catalog(config)?;
    Ok(AppState::in_memory(catalog, CorsConfig::from_env()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_with_catalog(path: PathBuf) -> ServerConfig {
        ServerConfig {
            catalog_path: Some(path),
            ..ServerConfig::default()
        }
    }

    #[test]
    fn test_load_catalog_defaults_to_marketplace() {
        let catalog = load_catalog(&ServerConfig::default()).unwrap();
        assert_eq!(catalog, PermissionCatalog::marketplace());
    }

    #[test]
    fn test_load_catalog_rejects_empty_override() {
        let path = std::env::temp_dir().join(format!("marketdesk-empty-{}.json", std::process::id()));
        std::fs::write(&path, "[]").unwrap();

        let err = load_catalog(&config_with_catalog(path.clone())).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(format!("{:#}", err).contains("at least one category"));
    }
}
