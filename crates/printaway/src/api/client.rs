//! The configured HTTP client for the print-shop backend.

use std::time::Duration;

use reqwest::header::COOKIE;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;

use super::error::{ApiError, ApiResult};

/// Name of the session cookie issued by the backend on login.
pub const AUTH_COOKIE_NAME: &str = "AdminAuthToken";

/// One configured client for all backend calls.
///
/// Browser-side usage relies on the built-in cookie store; server-rendered
/// callers build a [`ApiClient::with_cookie_header`] variant that forwards
/// the incoming request's `Cookie` header explicitly on every call.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    cookie_header: Option<String>,
}

impl ApiClient {
    /// Creates a client from the loaded configuration.
    pub fn new(config: &ClientConfig) -> ApiResult<Self> {
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            cookie_header: None,
        })
    }

    /// A variant of this client that forwards the given `Cookie` header on
    /// every request. There is no automatic cookie jar server-side.
    pub fn with_cookie_header(&self, cookie_header: impl Into<String>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            cookie_header: Some(cookie_header.into()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds a request with the forwarded credential attached, if any.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(cookie) = &self.cookie_header {
            builder = builder.header(COOKIE, cookie.clone());
        }
        builder
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Sends a request and normalizes transport failures and non-success
    /// statuses into [`ApiError`].
    pub async fn send(builder: RequestBuilder) -> ApiResult<Response> {
        let response = builder.send().await?;
        Self::expect_success(response).await
    }

    /// Maps a non-success response to an error, reading the body for detail.
    pub async fn expect_success(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(ApiError::from_status(status.as_u16(), &body))
    }

    /// GET a JSON payload.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = Self::send(self.get(path)).await?;
        response.json::<T>().await.map_err(ApiError::from)
    }
}

/// Extracts the session token value from a raw `Cookie` header.
pub fn extract_auth_token(cookie_header: &str) -> Option<String> {
    for pair in cookie_header.split(';') {
        let pair = pair.trim();
        if let Some(value) = pair.strip_prefix(AUTH_COOKIE_NAME) {
            if let Some(value) = value.strip_prefix('=') {
                if !value.is_empty() {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}
