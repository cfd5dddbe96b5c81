use anyhow::anyhow;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::headers::{Authorization, authorization::Bearer};
use marketdesk_core::AppError;

/// Bearer token from the `Authorization` header.
///
/// The token is trusted as-is: its presence is the only check.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| AppError::unauthorized(anyhow!("Missing authorization header")))?;

        let token = bearer.token().trim();
        if token.is_empty() {
            return Err(AppError::unauthorized(anyhow!("Empty bearer token")));
        }

        Ok(BearerToken(token.to_string()))
    }
}
