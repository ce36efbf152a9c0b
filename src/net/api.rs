//! REST transport for the authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the transport reports a network failure since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as an [`ApiError`]; session operations reduce it
//! to a toast reason instead of panicking or propagating.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::ApiError;

/// HTTP verb used by an endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Post,
    Patch,
}

/// Backend endpoints reachable from the session layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Login,
    UpdateUser,
}

impl Endpoint {
    /// Path relative to the API base URL.
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            Self::Register => "/auth/register",
            Self::Login => "/auth/login",
            Self::UpdateUser => "/auth/updateUser",
        }
    }

    #[must_use]
    pub fn method(self) -> Method {
        match self {
            Self::UpdateUser => Method::Patch,
            Self::Register | Self::Login => Method::Post,
        }
    }
}

/// Async seam between session operations and the backend. Enables mocking in tests.
///
/// Futures are `!Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Transport {
    /// Send `payload` to `endpoint`, optionally authenticated with `bearer`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] for network failures, non-2xx statuses, or
    /// undecodable bodies.
    async fn call(
        &self,
        endpoint: Endpoint,
        payload: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<serde_json::Value, ApiError>;
}

/// Browser transport backed by `gloo-net`.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    base_url: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[cfg(any(test, feature = "hydrate"))]
    fn url(&self, endpoint: Endpoint) -> String {
        endpoint_url(&self.base_url, endpoint)
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint_url(base_url: &str, endpoint: Endpoint) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), endpoint.path())
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Parse a raw response body, treating an empty body as `null`.
#[cfg(any(test, feature = "hydrate"))]
fn parse_body(raw: &str) -> Result<serde_json::Value, ApiError> {
    if raw.trim().is_empty() {
        return Ok(serde_json::Value::Null);
    }
    serde_json::from_str(raw).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map a non-2xx response into an [`ApiError::Status`].
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, raw: &str) -> ApiError {
    let message = parse_body(raw)
        .ok()
        .and_then(|body| super::types::error_message_from_body(&body));
    ApiError::Status { status, message }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn call(
        &self,
        endpoint: Endpoint,
        payload: &serde_json::Value,
        bearer: Option<&str>,
    ) -> Result<serde_json::Value, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = self.url(endpoint);
            let mut builder = match endpoint.method() {
                Method::Post => Request::post(&url),
                Method::Patch => Request::patch(&url),
            };
            if let Some(token) = bearer {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let resp = builder
                .json(payload)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let raw = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                return Err(status_error(status, &raw));
            }
            parse_body(&raw)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (endpoint, payload, bearer);
            Err(ApiError::Network("not available on server".to_owned()))
        }
    }
}
