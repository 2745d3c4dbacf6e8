//! HTTP gateway for the club platform backend.
//!
//! Every request leaves through [`ApiClient`], which attaches the current
//! credential at dispatch time and turns every kind of failure into an
//! [`ApiError`]. The gateway never notifies anyone itself; that happens at
//! the boundary in [`crate::notify::Reporter`].

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::auth::TokenStore;
use crate::config::Config;

use super::ApiError;

/// API client for the club platform.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    store: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &Config, store: Arc<dyn TokenStore>) -> anyhow::Result<Self> {
        Self::with_base_url(
            &config.base_url,
            Duration::from_secs(config.request_timeout_secs),
            store,
        )
    }

    pub fn with_base_url(
        base_url: &str,
        timeout: Duration,
        store: Arc<dyn TokenStore>,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        let mut base_url = base_url.trim().to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        Ok(Self {
            client,
            base_url,
            store,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve a path relative to the base endpoint
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Build the authorization header from whatever the store holds right now.
    fn auth_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        if let Some(token) = self.store.load() {
            match header::HeaderValue::from_str(&format!("Bearer {}", token)) {
                Ok(value) => {
                    headers.insert(header::AUTHORIZATION, value);
                }
                Err(_) => warn!("Stored token is not a valid header value, sending without it"),
            }
        }
        headers
    }

    /// Send a request and return the raw body of a successful response.
    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<String, ApiError> {
        let url = self.url(path);
        debug!(%method, path, "Dispatching request");

        let request = self
            .client
            .request(method.clone(), &url)
            .headers(self.auth_headers());

        let response = match build(request).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!(%method, path, error = %e, "Request failed without a response");
                return Err(ApiError::Network(e));
            }
        };

        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            Ok(body)
        } else {
            warn!(%method, path, status = status.as_u16(), "Request returned an error status");
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<T, ApiError> {
        let body = self.dispatch(method, path, build).await?;

        // Bodiless success (e.g. 204 on delete) decodes as JSON null
        let text = if body.trim().is_empty() { "null" } else { body.as_str() };

        serde_json::from_str(text).map_err(|source| {
            warn!(path, error = %source, "Failed to decode response body");
            ApiError::Decode {
                path: path.to_string(),
                source,
            }
        })
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::GET, path, |r| r).await
    }

    pub async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError> {
        self.send(Method::GET, path, |r| r.query(query)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(Method::POST, path, |r| r.json(body)).await
    }

    /// POST and hand back the undecoded body of a 2xx response
    pub(crate) async fn post_text<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<String, ApiError> {
        self.dispatch(Method::POST, path, |r| r.json(body)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send(Method::PUT, path, |r| r.json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(Method::DELETE, path, |r| r).await
    }
}
