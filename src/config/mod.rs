//! Configuration resolution for the CMS client
//!
//! Settings come from (highest precedence first) CLI flags, environment
//! variables, an optional YAML config file, and built-in defaults. The result
//! is resolved once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Environment variable holding the Strapi base URL
pub const ENV_BASE_URL: &str = "STRAPI_URL";
/// Environment variable holding the Strapi API token
pub const ENV_API_TOKEN: &str = "STRAPI_API_TOKEN";
/// Environment variable overriding the request timeout (milliseconds)
pub const ENV_TIMEOUT: &str = "CMS_API_TIMEOUT";
/// Environment variable toggling CMS integration
pub const ENV_ENABLED: &str = "ENABLE_CMS";

const DEFAULT_BASE_URL: &str = "http://localhost:1337";
const API_PATH: &str = "/api";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// How long a fetched payload stays fresh. Not configurable.
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Resolved CMS configuration
#[derive(Debug, Clone, PartialEq)]
pub struct CmsConfig {
    /// Base URL, always ending in `/api`
    pub base_url: String,

    /// Optional bearer token for the Strapi API
    pub auth_token: Option<String>,

    /// Per-request timeout
    pub timeout: Duration,

    /// Cache expiry window
    pub cache_ttl: Duration,

    /// When false, every fetch fails fast without network I/O
    pub enabled: bool,
}

/// Optional on-disk settings (`~/.sitecms/config.yaml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".sitecms").join("config.yaml"))
    }

    /// Load the config file.
    ///
    /// An explicit path must exist. Without one, the default location is tried
    /// and a missing file yields empty settings.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(Path::new(path)),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(path)?;
        let file: ConfigFile = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        log::debug!("Loaded config file {}", path.display());
        Ok(file)
    }
}

impl CmsConfig {
    /// Resolve configuration from the process environment and config file.
    pub fn load(config_path: Option<&str>, base_url_override: Option<&str>) -> Result<Self> {
        let file = ConfigFile::load_at(config_path)?;
        let mut config = Self::resolve(&file, |key| std::env::var(key).ok());

        if let Some(url) = base_url_override {
            config.base_url = normalize_base_url(Some(url));
        }

        Ok(config)
    }

    /// Resolve configuration from a variable lookup layered over file settings.
    pub fn resolve(file: &ConfigFile, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup(ENV_BASE_URL).or_else(|| file.base_url.clone());

        let auth_token = lookup(ENV_API_TOKEN)
            .or_else(|| file.api_token.clone())
            .filter(|token| !token.is_empty());

        let timeout_ms = lookup(ENV_TIMEOUT)
            .and_then(|raw| parse_timeout_ms(&raw))
            .or(file.timeout_ms.filter(|ms| *ms > 0))
            .unwrap_or(DEFAULT_TIMEOUT_MS);

        let enabled = match lookup(ENV_ENABLED) {
            Some(raw) => raw != "false",
            None => file.enabled.unwrap_or(true),
        };

        Self {
            base_url: normalize_base_url(base_url.as_deref()),
            auth_token,
            timeout: Duration::from_millis(timeout_ms),
            cache_ttl: CACHE_TTL,
            enabled,
        }
    }

    /// `Authorization` header value, if a token is configured
    pub fn auth_header(&self) -> Option<String> {
        self.auth_token
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }

    /// Host portion used to absolutize media URLs (the API path stripped)
    pub fn asset_host(&self) -> &str {
        self.base_url
            .strip_suffix(API_PATH)
            .unwrap_or(&self.base_url)
    }
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self::resolve(&ConfigFile::default(), |_| None)
    }
}

/// Normalize a raw base URL so it always ends in `/api`.
pub fn normalize_base_url(raw: Option<&str>) -> String {
    let base = raw
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/');

    if base.ends_with(API_PATH) {
        base.to_string()
    } else {
        format!("{}{}", base, API_PATH)
    }
}

/// Leading digits of `raw` (`"2500ms"` reads as 2500). Non-numeric or zero
/// input yields `None` so the next layer applies.
fn parse_timeout_ms(raw: &str) -> Option<u64> {
    let raw = raw.trim_start();
    let digits = raw
        .find(|c: char| !c.is_ascii_digit())
        .map_or(raw, |end| &raw[..end]);
    digits.parse::<u64>().ok().filter(|ms| *ms > 0)
}
