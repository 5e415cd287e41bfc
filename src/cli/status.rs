//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::{GlobalOptions, OutputFormat};
use crate::client::ContentKey;
use crate::config::{CmsConfig, ConfigFile};
use crate::error::Result;
use crate::output::json;

/// Resolved configuration as reported by `status`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StatusReport {
    base_url: String,
    asset_host: String,
    token_configured: bool,
    timeout_ms: u64,
    cache_ttl_secs: u64,
    enabled: bool,
    resources: Vec<&'static str>,
}

impl From<&CmsConfig> for StatusReport {
    fn from(config: &CmsConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            asset_host: config.asset_host().to_string(),
            token_configured: config.auth_token.is_some(),
            timeout_ms: config.timeout.as_millis() as u64,
            cache_ttl_secs: config.cache_ttl.as_secs(),
            enabled: config.enabled,
            resources: ContentKey::ALL.iter().map(|key| key.resource()).collect(),
        }
    }
}

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let config = CmsConfig::load(opts.config_ref(), opts.base_url_ref())?;
    let report = StatusReport::from(&config);

    if opts.format == OutputFormat::Json {
        println!("{}", json::format_json(&report, None)?);
        return Ok(());
    }

    println!("{}\n", "sitecms Configuration Status".bold());

    match opts.config_ref().map(std::path::PathBuf::from).or_else(ConfigFile::default_path) {
        Some(path) if path.exists() => println!("Config file: {}", path.display().to_string().cyan()),
        _ => println!("Config file: {}", "none (environment and defaults)".dimmed()),
    }
    println!();

    if report.enabled {
        println!("{} CMS integration enabled", "✓".green());
    } else {
        println!("{} CMS integration disabled", "✗".red());
        println!("  → Unset ENABLE_CMS or set it to anything other than 'false'");
    }

    println!("{} Base URL: {}", "○".dimmed(), report.base_url.cyan());
    println!("{} Asset host: {}", "○".dimmed(), report.asset_host);

    if report.token_configured {
        println!("{} API token configured", "✓".green());
    } else {
        println!("{} API token not configured (public access)", "○".dimmed());
    }

    println!("{} Request timeout: {}ms", "○".dimmed(), report.timeout_ms);
    println!("{} Cache TTL: {}s", "○".dimmed(), report.cache_ttl_secs);
    println!("{} Resources: {}", "○".dimmed(), report.resources.join(", "));
    println!();

    Ok(())
}
