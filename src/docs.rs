use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use marketdesk_core::{
    PaginationMeta, PaginationParams, PermissionCatalog, PermissionCategory, SelectionEvent,
    Selections,
};
use marketdesk_models::{
    AdminAccount, PaginatedProfilesResponse, PermissionProfile, ProfileDraft, ProfileId,
    ProfileKind, UpdateAdminAccountDto,
};

use crate::modules::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::catalog::controller::get_catalog,
        crate::modules::profiles::controller::list_profiles,
        crate::modules::profiles::controller::create_profile,
        crate::modules::profiles::controller::get_profile,
        crate::modules::profiles::controller::update_profile,
        crate::modules::profiles::controller::apply_selection_event,
        crate::modules::admin::controller::get_admin_profile,
        crate::modules::admin::controller::update_admin_profile,
    ),
    components(
        schemas(
            PermissionCatalog,
            PermissionCategory,
            Selections,
            SelectionEvent,
            ProfileId,
            ProfileKind,
            PermissionProfile,
            ProfileDraft,
            PaginatedProfilesResponse,
            PaginationMeta,
            PaginationParams,
            AdminAccount,
            UpdateAdminAccountDto,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Permissions", description = "Permission catalog"),
        (name = "Profiles", description = "Permission profile management"),
        (name = "Admin", description = "Signed-in administrator account")
    ),
    info(
        title = "Marketdesk API",
        version = "0.1.0",
        description = "Back-office API for marketplace administrators: permission catalog, permission profiles and the admin account profile.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            )
        }
    }
}
