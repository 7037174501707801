//! HTTP client helpers (REST).

use crate::services::error::ApiError;
use artgrid_api_models::{ArtworkPage, ArtworkQuery};
use gloo_net::http::Request;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn get_listing(&self, query: ArtworkQuery) -> Result<ArtworkPage, ApiError> {
        let response = Request::get(&query.url(&self.base_url))
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        if !response.ok() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(response.status(), &body));
        }
        response
            .json::<ArtworkPage>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    /// One page (1-based) at the catalog's default page size.
    pub(crate) async fn fetch_page(&self, page: u32) -> Result<ArtworkPage, ApiError> {
        self.get_listing(ArtworkQuery::Page(page)).await
    }

    /// The first `limit` records of the collection.
    pub(crate) async fn fetch_first(&self, limit: u32) -> Result<ArtworkPage, ApiError> {
        self.get_listing(ArtworkQuery::Limit(limit)).await
    }
}
