//! # Marketdesk Core
//!
//! Framework-independent building blocks of the Marketdesk admin back office.
//!
//! - [`catalog`]: the static permission catalog (category -> ordered labels)
//! - [`selection`]: the selection map held by a permission profile and the
//!   pure reducer that toggles labels and categories
//! - [`errors`]: application error type with HTTP response conversion
//! - [`pagination`]: in-memory pagination for list endpoints
//!
//! # Example
//!
//! ```
//! use marketdesk_core::catalog::PermissionCatalog;
//! use marketdesk_core::selection::{SelectionEvent, Selections};
//!
//! let catalog = PermissionCatalog::marketplace();
//! let selections = Selections::new()
//!     .apply(
//!         &catalog,
//!         &SelectionEvent::ToggleType {
//!             category: "Vendor Management".to_string(),
//!             label: "New Vendor".to_string(),
//!         },
//!     )
//!     .unwrap();
//!
//! assert!(selections.is_selected("Vendor Management", "New Vendor"));
//! ```

pub mod catalog;
pub mod errors;
pub mod pagination;
pub mod selection;

// Re-export commonly used types at crate root
pub use catalog::{ALL, CatalogError, PermissionCatalog, PermissionCategory};
pub use errors::AppError;
pub use pagination::{PaginationMeta, PaginationParams};
pub use selection::{SelectionEvent, Selections};
