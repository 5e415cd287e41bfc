//! Cached content fetching with populate downgrade
//!
//! The fetcher is the only component that talks to the transport. It checks
//! the cache, builds the populate query for the key, retries once with the
//! generic populate expression when Strapi rejects the specific one, unwraps
//! the envelope, and stores the payload.

use serde_json::Value;
use std::sync::Arc;

use super::key::POPULATE_ALL;
use super::{CmsTransport, ContentKey, Envelope};
use crate::cache::{Clock, ContentCache, SystemClock};
use crate::config::CmsConfig;
use crate::error::{ApiError, ConfigError, Error, Result};

/// Fetches raw CMS payloads for content keys.
pub struct ContentFetcher<T: CmsTransport> {
    transport: T,
    cache: Arc<ContentCache>,
    clock: Arc<dyn Clock>,
    enabled: bool,
}

impl<T: CmsTransport> ContentFetcher<T> {
    /// Create a fetcher sharing `cache`.
    pub fn new(transport: T, cache: Arc<ContentCache>, config: &CmsConfig) -> Self {
        Self {
            transport,
            cache,
            clock: Arc::new(SystemClock),
            enabled: config.enabled,
        }
    }

    /// Fetch the unwrapped payload for `key`, from cache when fresh.
    pub async fn fetch_content(&self, key: ContentKey) -> Result<Value> {
        if !self.enabled {
            return Err(ConfigError::CmsDisabled.into());
        }

        if let Some(cached) = self.cache.get(key) {
            log::debug!("Cache hit: {}", key);
            return Ok(cached);
        }

        let body = self
            .get_with_downgrade(key)
            .await
            .map_err(|e| Error::fetch(key.resource(), e))?;

        let payload = Envelope::decode(body).into_payload();
        self.cache.set(key, payload.clone());
        Ok(payload)
    }

    /// GET with the key's populate expression, falling back once to
    /// `populate=*` if the backend reports a validation error.
    async fn get_with_downgrade(&self, key: ContentKey) -> std::result::Result<Value, ApiError> {
        let buster = format!("_t={}", self.clock.now().timestamp_millis());
        let populate = key.populate();

        match self
            .transport
            .get(key.resource(), &format!("{}&{}", populate, buster))
            .await
        {
            Err(ApiError::Validation(reason)) => {
                log::warn!(
                    "CMS rejected populate for {} ({}), retrying with {}",
                    key,
                    reason,
                    POPULATE_ALL
                );
                self.transport
                    .get(key.resource(), &format!("{}&{}", POPULATE_ALL, buster))
                    .await
            }
            result => result,
        }
    }

    pub async fn get_home_content(&self) -> Result<Value> {
        self.fetch_content(ContentKey::Home).await
    }

    pub async fn get_about_content(&self) -> Result<Value> {
        self.fetch_content(ContentKey::About).await
    }

    pub async fn get_services_content(&self) -> Result<Value> {
        self.fetch_content(ContentKey::Services).await
    }

    pub async fn get_info_content(&self) -> Result<Value> {
        self.fetch_content(ContentKey::Info).await
    }

    pub async fn get_contact_content(&self) -> Result<Value> {
        self.fetch_content(ContentKey::Contact).await
    }

    /// Header and footer content
    pub async fn get_global_content(&self) -> Result<Value> {
        self.fetch_content(ContentKey::Global).await
    }
}

#[cfg(test)]
impl<T: CmsTransport> ContentFetcher<T> {
    fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }
}
