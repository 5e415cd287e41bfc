//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

use crate::client::ContentKey;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Content key the data was loaded for, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<ContentKey>,

    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    pub fn new(data: T, key: Option<ContentKey>) -> Self {
        Self {
            data,
            meta: Metadata {
                key,
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Format data as pretty-printed JSON wrapped in `{data, meta}`
pub fn format_json<T: Serialize + ?Sized>(
    data: &T,
    key: Option<ContentKey>,
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonOutput::new(data, key))
}
