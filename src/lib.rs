//! # Marketdesk
//!
//! Back-office service for a marketplace admin dashboard, built with Rust and
//! Axum. It owns the permission profiles administrators are assigned: named
//! roles expressed as a matrix of {category x permission type} selections.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── marketdesk-core/     # Catalog, selection reducer, AppError, pagination
//! ├── marketdesk-config/   # Environment-driven configuration
//! ├── marketdesk-models/   # Profiles, admin account, DTOs
//! ├── marketdesk-store/    # Profile stores, admin API client, profile editor
//! └── marketdesk-cli/      # Command line front end
//! src/
//! ├── middleware/          # Bearer token extractor
//! ├── modules/             # Feature modules
//! │   ├── catalog/         # Permission catalog endpoint
//! │   ├── profiles/        # Permission profile CRUD and selection events
//! │   └── admin/           # Signed-in administrator account
//! └── ...                  # Router, state, logging, metrics, docs
//! ```
//!
//! Each feature module follows the same layout:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic
//! - `router.rs`: Axum router configuration
//!
//! ## Selection Rules
//!
//! Every catalog category carries an `"All"` label. Toggling `"All"` makes it
//! the only selection of the category; toggling any other label drops `"All"`
//! first. Toggling a whole category selects every label (the `"All"` label
//! included) or, when all of them are already selected, clears it.
//!
//! ## Environment Variables
//!
//! ```bash
//! HOST=0.0.0.0
//! PORT=3000
//! PERMISSION_CATALOG_PATH=./catalog.json   # optional
//! LOG_LEVEL=info
//! LOG_DIR=storage/logs
//! OBSERVABILITY_ENABLED=true
//! ALLOWED_ORIGINS=http://localhost:5173
//! ```
//!
//! ## API Documentation
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use marketdesk_config;
pub use marketdesk_core;
pub use marketdesk_models;
pub use marketdesk_store;
