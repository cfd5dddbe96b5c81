//! Permission profile models and DTOs.
//!
//! A profile is a named bundle of category -> label selections. Its `kind`
//! decides whether holders may change the governed resources or only view
//! them.

use crate::ids::ProfileId;
use chrono::{DateTime, Utc};
use marketdesk_core::{PaginationMeta, PaginationParams, Selections};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    Edit,
    View,
}

impl ProfileKind {
    pub fn can_mutate(self) -> bool {
        matches!(self, ProfileKind::Edit)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileKind::Edit => "edit",
            ProfileKind::View => "view",
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "edit" => Ok(ProfileKind::Edit),
            "view" => Ok(ProfileKind::View),
            other => Err(format!("Invalid profile kind: {} (expected edit or view)", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PermissionProfile {
    pub id: ProfileId,
    pub name: String,
    pub kind: ProfileKind,
    pub selections: Selections,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PermissionProfile {
    /// The editable part of the profile.
    pub fn to_draft(&self) -> ProfileDraft {
        ProfileDraft {
            name: self.name.clone(),
            kind: self.kind,
            selections: self.selections.clone(),
        }
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Body of `POST /api/profiles` and `PUT /api/profiles/{id}`.
///
/// PUT replaces the whole profile, so both use the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProfileDraft {
    #[validate(
        length(max = 100, message = "Name must not exceed 100 characters"),
        custom(function = "not_blank", message = "Name must not be blank")
    )]
    pub name: String,
    pub kind: ProfileKind,
    #[serde(default)]
    pub selections: Selections,
}

impl ProfileDraft {
    pub fn new(name: impl Into<String>, kind: ProfileKind) -> Self {
        Self {
            name: name.into(),
            kind,
            selections: Selections::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProfileFilterParams {
    /// Only profiles of this kind
    pub kind: Option<ProfileKind>,
    /// Case-insensitive substring match on the name
    pub name: Option<String>,
    #[serde(flatten)]
    pub pagination: PaginationParams,
}

impl ProfileFilterParams {
    pub fn matches(&self, profile: &PermissionProfile) -> bool {
        let kind_ok = self.kind.is_none_or(|kind| profile.kind == kind);
        let name_ok = self.name.as_deref().map(str::trim).is_none_or(|needle| {
            needle.is_empty()
                || profile
                    .name
                    .to_lowercase()
                    .contains(&needle.to_lowercase())
        });
        kind_ok && name_ok
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedProfilesResponse {
    pub data: Vec<PermissionProfile>,
    pub meta: PaginationMeta,
}
