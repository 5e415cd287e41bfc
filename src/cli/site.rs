//! Whole-site load command
//!
//! Mirrors what a full page render does: the header and the footer each ask
//! for the global content (the second request is served from the cache), then
//! every page loads its own key concurrently.

use colored::Colorize;
use serde::Serialize;
use tabled::Tabled;

use crate::cli::{CommandContext, GlobalOptions, OutputFormat};
use crate::content::{
    self, AboutContent, ContactContent, GlobalContent, HomeContent, InfoContent, ServicesContent,
};
use crate::error::{Error, Result};
use crate::output::{json, table};

const STATUS_OK: &str = "ok";
const STATUS_ERROR: &str = "error loading content";

/// Load outcome for one rendered section
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct SectionStatus {
    #[tabled(rename = "SECTION")]
    pub section: String,
    #[tabled(rename = "STATUS")]
    pub status: String,
    #[tabled(rename = "DETAIL")]
    pub detail: String,
}

impl SectionStatus {
    fn from_result<P>(section: &str, result: &Result<P>, describe: impl Fn(&P) -> String) -> Self {
        let (status, detail) = match result {
            Ok(content) => (STATUS_OK, describe(content)),
            Err(e) => (STATUS_ERROR, e.to_string()),
        };
        Self {
            section: section.to_string(),
            status: status.to_string(),
            detail,
        }
    }

    fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Run the site command
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let sections = load_site(&ctx).await;

    println!("{}", render(&sections, ctx.format)?);

    let failed = sections.iter().filter(|s| !s.is_ok()).count();
    if failed > 0 {
        return Err(Error::SiteIncomplete {
            failed,
            total: sections.len(),
        });
    }
    Ok(())
}

async fn load_site(ctx: &CommandContext) -> Vec<SectionStatus> {
    let header = content::load::<GlobalContent, _>(&ctx.fetcher, &ctx.images).await;
    let footer = content::load::<GlobalContent, _>(&ctx.fetcher, &ctx.images).await;

    let (home, about, services, info, contact) = futures::join!(
        content::load::<HomeContent, _>(&ctx.fetcher, &ctx.images),
        content::load::<AboutContent, _>(&ctx.fetcher, &ctx.images),
        content::load::<ServicesContent, _>(&ctx.fetcher, &ctx.images),
        content::load::<InfoContent, _>(&ctx.fetcher, &ctx.images),
        content::load::<ContactContent, _>(&ctx.fetcher, &ctx.images),
    );

    vec![
        SectionStatus::from_result("header", &header, |g| {
            format!(
                "{} ({} links)",
                g.header.brand.logo_text,
                g.header.visible_links().count()
            )
        }),
        SectionStatus::from_result("footer", &footer, |g| g.footer.company_name.clone()),
        SectionStatus::from_result("home", &home, |h| {
            format!("{} / {}", h.hero.title1, h.hero.title2)
        }),
        SectionStatus::from_result("about", &about, |a| a.heading.clone()),
        SectionStatus::from_result("services", &services, |s| {
            format!("{} cards", s.cards.len())
        }),
        SectionStatus::from_result("info", &info, |i| format!("{} faqs", i.faqs.len())),
        SectionStatus::from_result("contact", &contact, |c| c.heading.clone()),
    ]
}

fn render(sections: &[SectionStatus], format: OutputFormat) -> Result<String> {
    let output = match format {
        OutputFormat::Pretty => sections
            .iter()
            .map(|s| {
                let mark = if s.is_ok() { "✓".green() } else { "✗".red() };
                format!("{} {:<10} {}", mark, s.section.bold(), s.detail.dimmed())
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Table => table::format_table(sections),
        OutputFormat::Json => json::format_json(sections, None)?,
    };
    Ok(output)
}
