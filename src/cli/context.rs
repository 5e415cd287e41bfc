//! Command execution context
//!
//! Loads configuration once and wires the shared cache, HTTP client and
//! fetcher that content commands use.

use std::sync::Arc;

use crate::cache::ContentCache;
use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::{ContentFetcher, ImageResolver, StrapiClient};
use crate::config::CmsConfig;
use crate::error::Result;

/// Context for command execution containing the fetcher and runtime options.
pub struct CommandContext {
    /// Cached fetcher over the Strapi HTTP client
    pub fetcher: ContentFetcher<StrapiClient>,
    /// Media URL resolver for the configured host
    pub images: ImageResolver,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config file cannot be loaded or the HTTP client
    /// cannot be built from it.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = CmsConfig::load(opts.config_ref(), opts.base_url_ref())?;
        log::debug!(
            "CMS base URL {} (enabled: {}, timeout: {:?})",
            config.base_url,
            config.enabled,
            config.timeout
        );

        let client = StrapiClient::new(&config)?;
        let cache = Arc::new(ContentCache::new(config.cache_ttl));
        let fetcher = ContentFetcher::new(client, cache, &config);
        let images = ImageResolver::new(&config);

        Ok(Self {
            fetcher,
            images,
            format: opts.format,
        })
    }
}
