//! Shared HTTP adapter for the marketplace API.
//!
//! Every request goes through one [`ApiClient`], which:
//! - resolves relative paths against the configured API root
//! - attaches the `x-tenant-id` header
//! - keeps a cookie store so session credentials ride along
//!
//! There is no retry, no circuit breaking, and no timeout beyond reqwest's
//! defaults. Failures propagate to the caller as [`ApiError`].

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, multipart::Form};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, error, instrument};

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Header carrying the tenant scope on every request.
pub const TENANT_HEADER: &str = "x-tenant-id";

/// Body of an outgoing request.
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(Form),
}

impl std::fmt::Debug for RequestBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(value) => f.debug_tuple("Json").field(value).finish(),
            Self::Multipart(_) => f.write_str("Multipart(..)"),
        }
    }
}

/// A request relative to the API root.
#[derive(Debug)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<RequestBody>,
    headers: HeaderMap,
}

impl ApiRequest {
    /// Create a request for `path` (which should start with `/`).
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            headers: HeaderMap::new(),
        }
    }

    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    #[must_use]
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::PATCH, path)
    }

    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Append a query parameter only when `value` is set.
    #[must_use]
    pub fn query_opt(self, key: &str, value: Option<impl ToString>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    /// Attach a JSON body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Parse` if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(RequestBody::Json(serde_json::to_value(body)?));
        Ok(self)
    }

    /// Attach a multipart form body.
    #[must_use]
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = Some(RequestBody::Multipart(form));
        self
    }

    /// Add an extra header for this request only.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidHeader` if the name or value is not valid.
    pub fn header(mut self, name: &str, value: &str) -> Result<Self, ApiError> {
        let header_name =
            HeaderName::from_bytes(name.as_bytes()).map_err(|e| ApiError::InvalidHeader {
                name: name.to_string(),
                reason: e.to_string(),
            })?;
        let header_value = HeaderValue::from_str(value).map_err(|e| ApiError::InvalidHeader {
            name: name.to_string(),
            reason: e.to_string(),
        })?;
        self.headers.insert(header_name, header_value);
        Ok(self)
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }
}

/// HTTP client bound to one API root and one tenant.
///
/// Cheap to clone; clones share the connection pool and cookie store.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    api_url: String,
    tenant_id: String,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("api_url", &self.inner.api_url)
            .field("tenant_id", &self.inner.tenant_id)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns error if the tenant header is invalid or the HTTP client fails
    /// to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            TENANT_HEADER,
            HeaderValue::from_str(&config.tenant_id).map_err(|e| ApiError::InvalidHeader {
                name: TENANT_HEADER.to_string(),
                reason: e.to_string(),
            })?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                api_url: config.api_url.clone(),
                tenant_id: config.tenant_id.clone(),
            }),
        })
    }

    /// Tenant scope attached to every request.
    #[must_use]
    pub fn tenant_id(&self) -> &str {
        &self.inner.tenant_id
    }

    /// Absolute URL for a path relative to the API root.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.inner.api_url)
        } else {
            format!("{}/{path}", self.inner.api_url)
        }
    }

    /// Send a request and parse the JSON response body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on transport failure, `ApiError::Api` on a
    /// non-success status, and `ApiError::Parse` if the body does not match `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let text = self.execute(request).await?;
        // Empty bodies (204, bare DELETE) decode as JSON null
        let text = if text.trim().is_empty() { "null" } else { &text };

        serde_json::from_str(text).map_err(|e| {
            error!(
                error = %e,
                body = %text.chars().take(500).collect::<String>(),
                "Failed to parse API response"
            );
            ApiError::Parse(e)
        })
    }

    /// Send a request and discard the response body.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` on transport failure and `ApiError::Api` on a
    /// non-success status.
    pub async fn send_empty(&self, request: ApiRequest) -> Result<(), ApiError> {
        self.execute(request).await.map(|_| ())
    }

    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: ApiRequest) -> Result<String, ApiError> {
        let ApiRequest {
            method,
            path,
            query,
            body,
            headers,
        } = request;

        let mut builder = self
            .inner
            .client
            .request(method, self.url(&path))
            .headers(headers);

        if !query.is_empty() {
            builder = builder.query(&query);
        }

        builder = match body {
            Some(RequestBody::Json(value)) => builder.json(&value),
            Some(RequestBody::Multipart(form)) => builder.multipart(form),
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            error!(
                status = %status,
                body = %text.chars().take(500).collect::<String>(),
                "API returned non-success status"
            );
            return Err(ApiError::from_response_body(status, &text));
        }

        debug!(status = %status, bytes = text.len(), "API request succeeded");
        Ok(text)
    }
}
