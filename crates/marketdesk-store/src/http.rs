//! HTTP-backed profile store.
//!
//! Talks to the `/api/profiles` endpoints of a Marketdesk service. The wire
//! format is the service's JSON: profiles as [`PermissionProfile`], errors as
//! `{"error": "..."}`.

use async_trait::async_trait;
use marketdesk_config::ApiConfig;
use marketdesk_core::{CatalogError, PermissionCatalog, PermissionCategory, SelectionEvent};
use marketdesk_models::{PaginatedProfilesResponse, PermissionProfile, ProfileDraft, ProfileId};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::StoreError;
use crate::repository::ProfileRepository;
use crate::token::TokenStore;

/// Page size used when walking `GET /api/profiles`.
const LIST_PAGE_SIZE: usize = 100;

pub(crate) fn build_client(config: &ApiConfig) -> Result<Client, StoreError> {
    Ok(Client::builder().timeout(config.timeout).build()?)
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Decodes a success body, or turns the response into [`StoreError::Status`].
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, StoreError> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or_else(|_| body.trim().to_string());
        return Err(StoreError::Status { status, message });
    }

    serde_json::from_str(&body).map_err(|e| StoreError::Decode(e.to_string()))
}

#[derive(Deserialize)]
struct CatalogBody {
    categories: Vec<PermissionCategory>,
}

pub struct HttpProfileRepository {
    config: ApiConfig,
    client: Client,
    tokens: TokenStore,
}

impl HttpProfileRepository {
    pub fn new(config: ApiConfig, tokens: TokenStore) -> Result<Self, StoreError> {
        let client = build_client(&config)?;
        Ok(Self {
            config,
            client,
            tokens,
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get(&self.config.token_key) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn profile_url(&self, id: ProfileId) -> String {
        self.config.endpoint(&format!("/api/profiles/{}", id))
    }

    /// Maps a 404 on a single-profile endpoint to [`StoreError::NotFound`].
    fn not_found_as(id: ProfileId, err: StoreError) -> StoreError {
        match err {
            StoreError::Status { status, .. } if status == StatusCode::NOT_FOUND => {
                StoreError::NotFound(id)
            }
            other => other,
        }
    }

    /// `GET /api/permissions/catalog`
    pub async fn catalog(&self) -> Result<PermissionCatalog, StoreError> {
        let response = self
            .authorize(
                self.client
                    .get(self.config.endpoint("/api/permissions/catalog")),
            )
            .send()
            .await?;
        let body: CatalogBody = read_json(response).await?;

        PermissionCatalog::new(body.categories)
            .map_err(|e: CatalogError| StoreError::Decode(e.to_string()))
    }

    /// `POST /api/profiles/{id}/selections`: lets the service run the reducer.
    #[instrument(skip(self))]
    pub async fn apply_event(
        &self,
        id: ProfileId,
        event: &SelectionEvent,
    ) -> Result<PermissionProfile, StoreError> {
        let url = format!("{}/selections", self.profile_url(id));
        let response = self
            .authorize(self.client.post(url).json(event))
            .send()
            .await?;

        read_json(response)
            .await
            .map_err(|e| Self::not_found_as(id, e))
    }
}

#[async_trait]
impl ProfileRepository for HttpProfileRepository {
    async fn list(&self) -> Result<Vec<PermissionProfile>, StoreError> {
        let mut profiles = Vec::new();
        let mut page = 1;

        loop {
            let url = format!(
                "{}?limit={}&page={}",
                self.config.endpoint("/api/profiles"),
                LIST_PAGE_SIZE,
                page
            );
            let response = self.authorize(self.client.get(url)).send().await?;
            let body: PaginatedProfilesResponse = read_json(response).await?;

            let fetched = body.data.len();
            profiles.extend(body.data);
            if !body.meta.has_more || fetched == 0 {
                break;
            }
            page += 1;
        }

        debug!(count = profiles.len(), "Fetched profiles");
        Ok(profiles)
    }

    async fn get(&self, id: ProfileId) -> Result<PermissionProfile, StoreError> {
        let response = self
            .authorize(self.client.get(self.profile_url(id)))
            .send()
            .await?;

        read_json(response)
            .await
            .map_err(|e| Self::not_found_as(id, e))
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    async fn create(&self, draft: ProfileDraft) -> Result<ProfileId, StoreError> {
        let response = self
            .authorize(
                self.client
                    .post(self.config.endpoint("/api/profiles"))
                    .json(&draft),
            )
            .send()
            .await?;
        let created: PermissionProfile = read_json(response).await?;

        Ok(created.id)
    }

    #[instrument(skip(self, draft))]
    async fn update(
        &self,
        id: ProfileId,
        draft: ProfileDraft,
    ) -> Result<PermissionProfile, StoreError> {
        let response = self
            .authorize(self.client.put(self.profile_url(id)).json(&draft))
            .send()
            .await?;

        read_json(response)
            .await
            .map_err(|e| Self::not_found_as(id, e))
    }
}
