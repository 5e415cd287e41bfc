//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

use crate::client::ContentKey;

pub mod args;
pub mod context;
pub mod fetch;
pub mod site;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// sitecms - load and inspect marketing-site content from a Strapi CMS
#[derive(Parser, Debug)]
#[command(name = "sitecms")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "SITECMS_FORMAT",
        default_value = "pretty",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "SITECMS_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the CMS base URL (STRAPI_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "SITECMS_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load one content key and print it
    Fetch {
        /// Content key to load
        #[arg(value_enum)]
        key: ContentKey,

        /// Print the unwrapped CMS payload instead of normalized content
        #[arg(long)]
        raw: bool,
    },

    /// Load header, footer and every page the way the site does
    Site,

    /// Show the resolved CMS configuration
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::parse_from(["sitecms", "fetch", "services", "--raw"]);
        match cli.command {
            Commands::Fetch { key, raw } => {
                assert_eq!(key, ContentKey::Services);
                assert!(raw);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(Cli::try_parse_from(["sitecms", "fetch", "blog"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["sitecms", "site", "--format", "table", "--debug"]);
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.debug);
    }
}
