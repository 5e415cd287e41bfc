//! Page content types and loading
//!
//! Each page defines a typed content struct whose `Default` is the local
//! fallback content, plus a [`Schema`] describing how a CMS payload maps onto
//! it. Loading fetches the raw payload, merges it over the defaults and
//! resolves image URLs.

use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{CmsTransport, ContentFetcher, ContentKey, ImageResolver};
use crate::error::Result;
use crate::output::Formattable;

pub mod about;
pub mod contact;
pub mod global;
pub mod home;
pub mod info;
pub mod schema;
pub mod services;

pub use about::AboutContent;
pub use contact::ContactContent;
pub use global::GlobalContent;
pub use home::HomeContent;
pub use info::InfoContent;
pub use schema::{Rule, Schema};
pub use services::ServicesContent;

/// Typed, fully-populated content for one [`ContentKey`].
pub trait PageContent: Serialize + DeserializeOwned + Default + Formattable {
    /// Content key this page is loaded from
    const KEY: ContentKey;

    /// How CMS fields map onto this type
    fn schema() -> Schema;

    /// Make relative media URLs absolute
    fn resolve_images(&mut self, _images: &ImageResolver) {}

    /// Merge a (possibly missing or partial) payload over the defaults.
    fn normalize(payload: Option<&Value>) -> Self {
        let defaults = match serde_json::to_value(Self::default()) {
            Ok(defaults) => defaults,
            Err(e) => {
                log::warn!("Failed to encode {} defaults: {}", Self::KEY, e);
                return Self::default();
            }
        };

        let merged = Self::schema().normalize(payload, &defaults);
        serde_json::from_value(merged).unwrap_or_else(|e| {
            log::warn!("{} content has an unexpected shape ({}), using defaults", Self::KEY, e);
            Self::default()
        })
    }
}

/// Fetch the raw payload for `key` through its per-key accessor.
pub async fn fetch_raw<T: CmsTransport>(fetcher: &ContentFetcher<T>, key: ContentKey) -> Result<Value> {
    match key {
        ContentKey::Home => fetcher.get_home_content().await,
        ContentKey::About => fetcher.get_about_content().await,
        ContentKey::Services => fetcher.get_services_content().await,
        ContentKey::Info => fetcher.get_info_content().await,
        ContentKey::Contact => fetcher.get_contact_content().await,
        ContentKey::Global => fetcher.get_global_content().await,
    }
}

/// Fetch, normalize and resolve images for one page.
pub async fn load<P: PageContent, T: CmsTransport>(
    fetcher: &ContentFetcher<T>,
    images: &ImageResolver,
) -> Result<P> {
    let payload = fetch_raw(fetcher, P::KEY).await?;
    let mut content = P::normalize(Some(&payload));
    content.resolve_images(images);
    Ok(content)
}

/// Page metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Seo {
    pub title: String,
    pub description: String,
}

impl Seo {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    /// CMS SEO components use `metaTitle`/`metaDescription`; plain names are
    /// accepted as a fallback.
    pub fn rule() -> Rule {
        Rule::Nested(
            Schema::new()
                .field_from("title", &["metaTitle", "title"], Rule::Text)
                .field_from("description", &["metaDescription", "description"], Rule::Text),
        )
    }
}

/// A navigation link
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub path: String,
    pub label: String,
}

impl Link {
    pub fn new(path: &str, label: &str) -> Self {
        Self {
            path: path.to_string(),
            label: label.to_string(),
        }
    }

    /// Links to the home page are not shown in navigation.
    pub fn is_visible(&self) -> bool {
        self.path != "/"
    }

    /// List rule for link arrays; items missing a path point home (hidden).
    pub fn list_rule() -> Rule {
        Rule::Items {
            item: Schema::new()
                .field("path", Rule::Text)
                .field("label", Rule::Text),
            defaults: |_| serde_json::json!({"path": "/", "label": ""}),
        }
    }
}

/// Pretty-print helpers shared by the page renderers
pub(crate) fn heading(text: &str) -> String {
    text.bold().to_string()
}

pub(crate) fn seo_lines(seo: &Seo) -> String {
    format!(
        "{} {}\n{} {}",
        "Title:".dimmed(),
        seo.title,
        "Description:".dimmed(),
        seo.description
    )
}
