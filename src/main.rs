//! sitecms - content loader for a Strapi-backed marketing site

use clap::Parser;

mod cache;
mod cli;
mod client;
mod config;
mod content;
mod error;
mod output;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Fetch { key, raw } => cli::fetch::run(&opts, key, raw).await,
        Commands::Site => cli::site::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
    }
}

/// `RUST_LOG` wins; otherwise `--debug` raises the filter from warn to debug.
fn init_logging(debug: bool) {
    let default_filter = if debug { "sitecms=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
