//! Fetch command implementation

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use serde_json::Value;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::client::ContentKey;
use crate::content::{
    self, AboutContent, ContactContent, GlobalContent, HomeContent, InfoContent, PageContent,
    ServicesContent,
};
use crate::error::Result;
use crate::output::{Formattable, json, table};

/// Run the fetch command for a single content key
pub async fn run(opts: &GlobalOptions, key: ContentKey, raw: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let spinner = loading_spinner(ctx.format, key);
    let result = if raw {
        render_raw(&ctx, key).await
    } else {
        render(&ctx, key).await
    };
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    println!("{}", result?);
    Ok(())
}

/// Spinner on stderr while content loads; suppressed for JSON output.
fn loading_spinner(format: OutputFormat, key: ContentKey) -> Option<ProgressBar> {
    if format == OutputFormat::Json {
        return None;
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Loading {} content...", key));
    spinner.enable_steady_tick(Duration::from_millis(100));
    Some(spinner)
}

async fn render(ctx: &CommandContext, key: ContentKey) -> Result<String> {
    match key {
        ContentKey::Home => render_page::<HomeContent>(ctx).await,
        ContentKey::About => render_page::<AboutContent>(ctx).await,
        ContentKey::Services => render_page::<ServicesContent>(ctx).await,
        ContentKey::Info => render_page::<InfoContent>(ctx).await,
        ContentKey::Contact => render_page::<ContactContent>(ctx).await,
        ContentKey::Global => render_page::<GlobalContent>(ctx).await,
    }
}

async fn render_page<P: PageContent>(ctx: &CommandContext) -> Result<String> {
    let page: P = content::load(&ctx.fetcher, &ctx.images).await?;
    page.format(ctx.format, Some(P::KEY))
}

async fn render_raw(ctx: &CommandContext, key: ContentKey) -> Result<String> {
    let payload = content::fetch_raw(&ctx.fetcher, key).await?;
    format_raw(&payload, ctx.format, key)
}

fn format_raw(payload: &Value, format: OutputFormat, key: ContentKey) -> Result<String> {
    let output = match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(payload)?,
        OutputFormat::Table => table::format_fields(payload)?,
        OutputFormat::Json => json::format_json(payload, Some(key))?,
    };
    Ok(output)
}
