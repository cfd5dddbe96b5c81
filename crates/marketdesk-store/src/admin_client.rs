//! Client for the signed-in administrator's account profile.
//!
//! `GET {base}/api/admin/profile` and `PUT {base}/api/admin/profile`, both
//! authenticated with the bearer token stored under the configured key. A
//! missing token fails before any request is sent; a non-success response
//! becomes [`StoreError::Status`]. There is no retry.

use marketdesk_config::ApiConfig;
use marketdesk_models::{AdminAccount, UpdateAdminAccountDto};
use reqwest::Client;
use tracing::{instrument, warn};

use crate::error::StoreError;
use crate::http::{build_client, read_json};
use crate::token::TokenStore;

const ADMIN_PROFILE_PATH: &str = "/api/admin/profile";

pub struct AdminProfileClient {
    config: ApiConfig,
    client: Client,
    tokens: TokenStore,
}

impl AdminProfileClient {
    pub fn new(config: ApiConfig, tokens: TokenStore) -> Result<Self, StoreError> {
        let client = build_client(&config)?;
        Ok(Self {
            config,
            client,
            tokens,
        })
    }

    pub fn tokens_mut(&mut self) -> &mut TokenStore {
        &mut self.tokens
    }

    fn token(&self) -> Result<&str, StoreError> {
        self.tokens.get(&self.config.token_key).ok_or_else(|| {
            warn!(key = %self.config.token_key, "No admin token stored");
            StoreError::MissingToken(self.config.token_key.clone())
        })
    }

    #[instrument(skip(self))]
    pub async fn fetch(&self) -> Result<AdminAccount, StoreError> {
        let token = self.token()?;
        let response = self
            .client
            .get(self.config.endpoint(ADMIN_PROFILE_PATH))
            .bearer_auth(token)
            .send()
            .await?;

        read_json(response).await
    }

    #[instrument(skip(self, update))]
    pub async fn update(&self, update: &UpdateAdminAccountDto) -> Result<AdminAccount, StoreError> {
        let token = self.token()?;
        let response = self
            .client
            .put(self.config.endpoint(ADMIN_PROFILE_PATH))
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;

        read_json(response).await
    }
}
