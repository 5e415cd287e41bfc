//! Strapi CMS client

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ApiError;

pub mod envelope;
pub mod fetcher;
pub mod image;
pub mod key;
#[cfg(test)]
pub mod mock;
pub mod strapi;

pub use envelope::Envelope;
pub use fetcher::ContentFetcher;
pub use image::ImageResolver;
pub use key::ContentKey;
#[cfg(test)]
pub use mock::MockTransport;
pub use strapi::StrapiClient;

/// Raw HTTP access to the CMS.
///
/// Implementations perform exactly one GET per call and return the decoded
/// response body. Retry and caching policy live in [`ContentFetcher`].
#[async_trait]
pub trait CmsTransport: Send + Sync {
    /// GET `{base_url}/{resource}?{query}`
    async fn get(&self, resource: &str, query: &str) -> Result<Value, ApiError>;
}
