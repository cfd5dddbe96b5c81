//! # Marketdesk Models
//!
//! Domain models and DTOs shared by the service, the stores and the CLI.
//!
//! # Modules
//!
//! - [`ids`]: strongly-typed identifiers
//! - [`profiles`]: permission profiles and their request/response shapes
//! - [`admin`]: the signed-in administrator's account profile

pub mod admin;
pub mod ids;
pub mod profiles;

pub use admin::{AdminAccount, UpdateAdminAccountDto};
pub use ids::ProfileId;
pub use profiles::{
    PaginatedProfilesResponse, PermissionProfile, ProfileDraft, ProfileFilterParams, ProfileKind,
};
