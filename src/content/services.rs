//! Services page content

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::schema::non_empty_str;
use super::{PageContent, Rule, Schema, Seo, heading, seo_lines};
use crate::client::{ContentKey, ImageResolver};
use crate::output::Formattable;

const CARD_DESCRIPTION_PLACEHOLDER: &str = "Service description will appear here.";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServicesContent {
    pub seo: Seo,
    pub heading: String,
    pub cards: Vec<ServiceCard>,
}

/// One slide of the services carousel
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceCard {
    pub title: String,
    pub description: String,
    pub features: Vec<String>,
    pub background_image: Option<String>,
}

impl ServiceCard {
    fn new(title: &str, description: &str, features: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            features: features.iter().map(|f| f.to_string()).collect(),
            background_image: None,
        }
    }
}

impl Default for ServicesContent {
    fn default() -> Self {
        Self {
            seo: Seo::new(
                "Our Service - Qoyy Global",
                "Solutions that drive brands forward. Media monitoring and public relations services that keep your brand informed, relevant, and strategically visible.",
            ),
            heading: "SOLUTIONS THAT DRIVE BRANDS FORWARD".to_string(),
            cards: vec![
                ServiceCard::new(
                    "Media Monitoring",
                    "Real-time tracking of brand mentions, sentiment analysis, and competitive intelligence across all media channels.",
                    &["24/7 brand monitoring", "Sentiment analysis", "Crisis detection", "Competitive insights"],
                ),
                ServiceCard::new(
                    "Public Relations",
                    "Strategic PR campaigns that build brand reputation, manage crises, and create positive media coverage.",
                    &["Press release distribution", "Media relations", "Crisis management", "Event PR"],
                ),
                ServiceCard::new(
                    "Strategic Communication",
                    "Comprehensive communication strategies that align with your business objectives and target audience.",
                    &["Message development", "Stakeholder engagement", "Content strategy", "Brand positioning"],
                ),
                ServiceCard::new(
                    "Digital PR",
                    "Online reputation management and digital media strategies for the modern digital landscape.",
                    &["Online reputation management", "Social media PR", "Influencer partnerships", "Digital crisis management"],
                ),
                ServiceCard::new(
                    "Reporting & Analytics",
                    "Comprehensive reporting and analytics to measure the impact and ROI of your PR campaigns.",
                    &["Monthly reports", "ROI measurement", "Performance tracking", "Strategic insights"],
                ),
            ],
        }
    }
}

/// Defaults for a CMS card at `index` that omits fields
fn card_defaults(index: usize) -> Value {
    json!({
        "title": format!("Service {}", index + 1),
        "description": CARD_DESCRIPTION_PLACEHOLDER,
        "features": [],
        "backgroundImage": null
    })
}

/// Any list is accepted; non-string entries are dropped.
fn feature_list(value: &Value) -> Option<Value> {
    let items = value.as_array()?;
    Some(Value::Array(
        items
            .iter()
            .filter_map(non_empty_str)
            .map(|s| Value::String(s.to_string()))
            .collect(),
    ))
}

impl PageContent for ServicesContent {
    const KEY: ContentKey = ContentKey::Services;

    fn schema() -> Schema {
        Schema::new()
            .field("seo", Seo::rule())
            .field("heading", Rule::Text)
            .field(
                "cards",
                Rule::Items {
                    item: Schema::new()
                        .field("title", Rule::Text)
                        .field("description", Rule::Text)
                        .field("features", Rule::Custom(feature_list))
                        .field("backgroundImage", Rule::Image),
                    defaults: card_defaults,
                },
            )
    }

    fn resolve_images(&mut self, images: &ImageResolver) {
        for card in &mut self.cards {
            images.resolve_field(&mut card.background_image);
        }
    }
}

impl Formattable for ServicesContent {
    fn pretty(&self) -> String {
        let mut out = format!(
            "{}\n{}\n\n{}\n",
            heading("Services"),
            seo_lines(&self.seo),
            self.heading
        );
        for (index, card) in self.cards.iter().enumerate() {
            out.push_str(&format!(
                "\n{}. {}\n   {}\n",
                index + 1,
                card.title,
                card.description
            ));
            for feature in &card.features {
                out.push_str(&format!("   • {}\n", feature));
            }
        }
        out.trim_end().to_string()
    }
}
