use marketdesk_core::AppError;
use marketdesk_models::ProfileId;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Profile {0} not found")]
    NotFound(ProfileId),

    #[error("Not signed in: no auth token stored under '{0}'")]
    MissingToken(String),

    #[error("Admin API responded with {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Could not reach the admin API: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response from the admin API: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let status = match &err {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::MissingToken(_) => StatusCode::UNAUTHORIZED,
            StoreError::Status { status, .. } if status.is_client_error() => *status,
            _ => StatusCode::BAD_GATEWAY,
        };
        AppError::new(status, err)
    }
}
