//! The signed-in administrator's account, served at `/api/admin/profile`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::profiles::not_blank;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AdminAccount {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    /// Name of the permission profile assigned to this administrator
    pub role: String,
    pub updated_at: DateTime<Utc>,
}

impl AdminAccount {
    /// Applies the fields present in `dto`; absent fields stay unchanged.
    pub fn apply(&mut self, dto: UpdateAdminAccountDto) {
        if let Some(name) = dto.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = dto.email {
            self.email = email.trim().to_string();
        }
        if let Some(phone) = dto.phone {
            let phone = phone.trim();
            self.phone = (!phone.is_empty()).then(|| phone.to_string());
        }
        self.updated_at = Utc::now();
    }
}

/// Body of `PUT /api/admin/profile`.
///
/// Role changes go through permission profiles, not through this endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAdminAccountDto {
    #[validate(
        length(max = 100, message = "Name must not exceed 100 characters"),
        custom(function = "not_blank", message = "Name must not be blank")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Empty string clears the phone number
    #[validate(length(max = 32, message = "Phone must not exceed 32 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
