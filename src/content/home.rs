//! Home page content

use serde::{Deserialize, Serialize};

use super::{PageContent, Rule, Schema, Seo, heading, seo_lines};
use crate::client::{ContentKey, ImageResolver};
use crate::output::Formattable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeContent {
    pub seo: Seo,
    pub hero: Hero,
}

/// Landing banner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Hero {
    pub title1: String,
    pub title2: String,
    pub background_image: Option<String>,
}

impl Default for HomeContent {
    fn default() -> Self {
        Self {
            seo: Seo::new(
                "Qoyy Global - Marketing Made Simple",
                "Marketing made simple, all under one roof. Qoyy Global provides innovative solutions for your business.",
            ),
            hero: Hero::default(),
        }
    }
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title1: "MARKETING".to_string(),
            title2: "ALL UNDER ONE ROOF".to_string(),
            background_image: None,
        }
    }
}

impl PageContent for HomeContent {
    const KEY: ContentKey = ContentKey::Home;

    fn schema() -> Schema {
        Schema::new().field("seo", Seo::rule()).field(
            "hero",
            Rule::Nested(
                Schema::new()
                    .field("title1", Rule::Text)
                    .field("title2", Rule::Text)
                    .field("backgroundImage", Rule::Image),
            ),
        )
    }

    fn resolve_images(&mut self, images: &ImageResolver) {
        images.resolve_field(&mut self.hero.background_image);
    }
}

impl Formattable for HomeContent {
    fn pretty(&self) -> String {
        let mut out = format!(
            "{}\n{}\n\n{}\n{}",
            heading("Home"),
            seo_lines(&self.seo),
            self.hero.title1,
            self.hero.title2
        );
        if let Some(ref image) = self.hero.background_image {
            out.push_str(&format!("\nBackground: {}", image));
        }
        out
    }
}
