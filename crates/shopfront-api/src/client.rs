//! HTTP client for the product REST API.
//!
//! Wraps `reqwest` with typed response decoding and maps every failure onto
//! the shared error taxonomy: no response ([`Error::Transport`]), an
//! unexpected status ([`Error::Status`]), or a body of the wrong shape
//! ([`Error::Decode`]).

use std::time::Duration;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use shopfront_core::prelude::*;
use shopfront_core::{Product, ProductPage, ProductUpdate};

use crate::api::ProductApi;
use crate::query::ListQuery;

/// Base location used when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Connection settings handed to [`ApiClient::new`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Scheme, host and optional path prefix of the API
    pub base_url: String,
    /// Whole-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Client for the product REST API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a client for the configured base location.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidUrl`] if the base location does not parse as an
    ///   absolute URL.
    /// - [`Error::Transport`] if the `reqwest::Client` cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| Error::invalid_url(&base_url, e.to_string()))?;

        let mut builder =
            Client::builder().user_agent(concat!("shopfront/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/products/{id}` with the id percent-encoded as one path segment
    fn product_url(&self, id: &str) -> Result<Url> {
        let mut url =
            Url::parse(&self.base_url).map_err(|e| Error::invalid_url(&self.base_url, e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| Error::invalid_url(&self.base_url, "cannot be a base"))?
            .pop_if_empty()
            .push("products")
            .push(id);
        Ok(url)
    }

    /// Send a request and decode a JSON body from a 2xx response
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        context: &str,
    ) -> Result<T> {
        let response = request.send().await.map_err(map_send_error)?;
        let status = response.status();
        if !status.is_success() {
            debug!("{context} returned {status}");
            return Err(Error::status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| Error::decode(context, e.to_string()))
    }
}

impl ProductApi for ApiClient {
    async fn list_products(&self, query: &ListQuery) -> Result<ProductPage> {
        let url = format!("{}/products", self.base_url);
        debug!("GET {url} {:?}", query.params());
        self.send_json(self.client.get(&url).query(query.params()), "GET /products")
            .await
    }

    async fn fetch_uri(&self, uri: &str) -> Result<ProductPage> {
        let url = format!("{}{}", self.base_url, uri);
        debug!("GET {url}");
        self.send_json(self.client.get(&url), uri).await
    }

    async fn get_product(&self, id: &str) -> Result<Product> {
        let url = self.product_url(id)?;
        debug!("GET {url}");
        self.send_json(self.client.get(url), &format!("GET /products/{id}"))
            .await
    }

    async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<()> {
        let url = self.product_url(id)?;
        debug!("PATCH {url}");
        let response = self
            .client
            .patch(url)
            .json(update)
            .send()
            .await
            .map_err(map_send_error)?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            other => {
                warn!("PATCH /products/{id} returned {other}");
                Err(Error::status(other.as_u16()))
            }
        }
    }
}

/// Classify a `send()` failure: a malformed URL is not a network problem
fn map_send_error(err: reqwest::Error) -> Error {
    if err.is_builder() {
        let url = err.url().map(|u| u.to_string()).unwrap_or_default();
        return Error::invalid_url(url, err.to_string());
    }
    if let Some(status) = err.status() {
        return Error::status(status.as_u16());
    }
    Error::transport(err.to_string())
}
