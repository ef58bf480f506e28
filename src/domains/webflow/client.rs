//! Webflow Data API v2 client.
//!
//! One method per endpoint. Every request carries the bearer token and a JSON
//! content type, installed once as default headers on the underlying
//! `reqwest::Client`. Success bodies are returned as raw JSON; the client does
//! not interpret the shape of Webflow's responses.

use reqwest::{
    Client, RequestBuilder, Url,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use serde_json::Value;
use tracing::{debug, error};

use super::error::{WebflowError, WebflowResult};
use super::payload::{CollectionItemPatch, CollectionItemPayload, Pagination, PublishItemsRequest};
use crate::core::config::WebflowConfig;

/// Async client for the Webflow API.
#[derive(Debug, Clone)]
pub struct WebflowClient {
    http: Client,
    base_url: Url,
}

impl WebflowClient {
    /// Build a client from the Webflow section of the configuration.
    ///
    /// Identifiers are appended to the base URL as percent-encoded path
    /// segments, so the base must be an absolute `http(s)` URL.
    pub fn new(config: &WebflowConfig) -> WebflowResult<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| WebflowError::InvalidBaseUrl(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(WebflowError::InvalidBaseUrl(config.base_url.clone()));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|_| WebflowError::InvalidToken)?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self { http, base_url })
    }

    // ========================================================================
    // Sites
    // ========================================================================

    /// `GET /sites`
    pub async fn list_sites(&self) -> WebflowResult<Value> {
        self.send(self.http.get(self.url(&["sites"]))).await
    }

    /// `GET /sites/{site_id}`
    pub async fn get_site(&self, site_id: &str) -> WebflowResult<Value> {
        self.send(self.http.get(self.url(&["sites", site_id]))).await
    }

    /// `GET /sites/{site_id}/collections`
    pub async fn list_collections(&self, site_id: &str) -> WebflowResult<Value> {
        self.send(self.http.get(self.url(&["sites", site_id, "collections"])))
            .await
    }

    // ========================================================================
    // Collection items
    // ========================================================================

    /// `GET /collections/{collection_id}/items?limit=..&offset=..`
    pub async fn list_collection_items(
        &self,
        collection_id: &str,
        page: Pagination,
    ) -> WebflowResult<Value> {
        let query = serde_urlencoded::to_string(page)?;
        let mut url = self.url(&["collections", collection_id, "items"]);
        url.set_query(Some(&query));
        self.send(self.http.get(url)).await
    }

    /// `POST /collections/{collection_id}/items`
    pub async fn create_collection_item(
        &self,
        collection_id: &str,
        payload: &CollectionItemPayload,
    ) -> WebflowResult<Value> {
        let url = self.url(&["collections", collection_id, "items"]);
        self.send(self.http.post(url).json(payload)).await
    }

    /// `PATCH /collections/{collection_id}/items/{item_id}`
    pub async fn update_collection_item(
        &self,
        collection_id: &str,
        item_id: &str,
        patch: &CollectionItemPatch,
    ) -> WebflowResult<Value> {
        let url = self.url(&["collections", collection_id, "items", item_id]);
        self.send(self.http.patch(url).json(patch)).await
    }

    /// `DELETE /collections/{collection_id}/items/{item_id}`
    ///
    /// Webflow usually answers with an empty body, which comes back as `null`.
    pub async fn delete_collection_item(
        &self,
        collection_id: &str,
        item_id: &str,
    ) -> WebflowResult<Value> {
        let url = self.url(&["collections", collection_id, "items", item_id]);
        self.send(self.http.delete(url)).await
    }

    /// `POST /collections/{collection_id}/items/publish`
    pub async fn publish_collection_items(
        &self,
        collection_id: &str,
        item_ids: &[String],
    ) -> WebflowResult<Value> {
        let url = self.url(&["collections", collection_id, "items", "publish"]);
        self.send(self.http.post(url).json(&PublishItemsRequest { item_ids }))
            .await
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Append path segments to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: RequestBuilder) -> WebflowResult<Value> {
        let response = request.send().await?;
        let status = response.status();
        debug!("{} {}", status.as_u16(), response.url());

        if !status.is_success() {
            let body = response.text().await?;
            error!("Webflow API returned {}: {}", status.as_u16(), body);
            return Err(WebflowError::api(status.as_u16(), body));
        }

        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}
