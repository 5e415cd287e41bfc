//! Strapi HTTP transport

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use super::CmsTransport;
use crate::config::CmsConfig;
use crate::error::{ApiError, ConfigError, Result};

/// Error name Strapi uses for rejected query parameters
const VALIDATION_ERROR: &str = "ValidationError";

/// Strapi error body: `{ "data": null, "error": { "status", "name", "message" } }`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    name: String,
    #[serde(default)]
    message: String,
}

/// reqwest-backed CMS transport
pub struct StrapiClient {
    http: HttpClient,
    base_url: String,
}

impl StrapiClient {
    /// Create a client from resolved configuration
    pub fn new(config: &CmsConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(auth) = config.auth_header() {
            let mut value = HeaderValue::from_str(&auth)
                .map_err(|e| ConfigError::Invalid(format!("API token is not a valid header: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = HttpClient::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| ConfigError::Invalid(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, resource: &str, query: &str) -> String {
        if query.is_empty() {
            format!("{}/{}", self.base_url, resource)
        } else {
            format!("{}/{}?{}", self.base_url, resource, query)
        }
    }
}

#[async_trait]
impl CmsTransport for StrapiClient {
    async fn get(&self, resource: &str, query: &str) -> std::result::Result<Value, ApiError> {
        let url = self.url(resource, query);
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await.map_err(ApiError::from)?;
        let status = response.status();

        if status.is_success() {
            return response.json::<Value>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
            });
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| status.to_string());
        Err(classify_error(status, &body))
    }
}

/// Map a non-2xx response to an [`ApiError`].
///
/// A `ValidationError` body wins over the status code: Strapi reports bad
/// populate expressions this way and the fetcher retries on it.
fn classify_error(status: StatusCode, body: &str) -> ApiError {
    let detail = serde_json::from_str::<ErrorBody>(body).ok().map(|b| b.error);

    if let Some(ref detail) = detail
        && detail.name == VALIDATION_ERROR
    {
        return ApiError::Validation(detail.message.clone());
    }

    let message = detail
        .map(|d| d.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(message),
        status if status.is_server_error() => ApiError::ServerError(message),
        status => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
    }
}
