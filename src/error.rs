//! Error types for sitecms

use thiserror::Error;

/// Result type alias for sitecms operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A CMS request failed after the retry path was exhausted
    #[error("Failed to fetch content from CMS ({resource}): {source}")]
    Fetch {
        resource: &'static str,
        #[source]
        source: ApiError,
    },

    /// One or more sections of a whole-site load failed
    #[error("{failed} of {total} site sections failed to load")]
    SiteIncomplete { failed: usize, total: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a transport failure for the given CMS resource.
    pub fn fetch(resource: &'static str, source: ApiError) -> Self {
        Error::Fetch { resource, source }
    }
}

/// Transport-level errors from the CMS
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the query itself (`error.name == "ValidationError"`)
    #[error("Invalid query: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Authentication failed. Check STRAPI_API_TOKEN.")]
    Unauthorized,

    #[error("Access denied. The API token lacks permission for this content.")]
    Forbidden,

    #[error("Content not found: {0}")]
    NotFound(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to CMS".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("CMS is disabled. Please enable CMS integration (ENABLE_CMS).")]
    CmsDisabled,

    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
