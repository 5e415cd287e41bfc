//! About page content

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::schema::{non_empty_str, scalar_text};
use super::{PageContent, Rule, Schema, Seo, heading, seo_lines};
use crate::client::ContentKey;
use crate::output::Formattable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutContent {
    pub seo: Seo,
    pub heading: String,
    pub paragraph: String,
    pub quote: String,
}

impl Default for AboutContent {
    fn default() -> Self {
        Self {
            seo: Seo::new(
                "About Us - Qoyy Global",
                "Creative impact, measurable results. Learn about Qoyy Global's journey of growth built on shared successes.",
            ),
            heading: "CREATIVE IMPACT, MEASURABLE RESULTS.".to_string(),
            paragraph: "Established in 2018 and based in Kuala Lumpur, we are an integrated marketing agency delivering end-to-end solutions across digital, creative, media, events, and print. With a growing team of 15 passionate professionals, we proudly serve over 20 retained government clients and 10 corporate brands.".to_string(),
            quote: "\"OUR JOURNEY OF GROWTH IS BUILT ON SHARED SUCCESSES WITH THOSE WE SERVE.\"".to_string(),
        }
    }
}

impl PageContent for AboutContent {
    const KEY: ContentKey = ContentKey::About;

    fn schema() -> Schema {
        Schema::new()
            .field("seo", Seo::rule())
            .field("heading", Rule::Text)
            .field_from("paragraph", &["paragraphs"], Rule::Custom(paragraph_text))
            .field("quote", Rule::Text)
    }
}

/// Body text from `paragraphs`: the first entry of a list, or the company
/// sentence composed from a structured profile.
fn paragraph_text(value: &Value) -> Option<Value> {
    let text = match value {
        Value::Array(items) => items.first().and_then(non_empty_str).map(str::to_string),
        Value::Object(_) => compose_profile(value),
        _ => None,
    };
    text.map(Value::String)
}

fn compose_profile(profile: &Value) -> Option<String> {
    let year = scalar_text(profile.get("establishment_year")?)?;
    let location = scalar_text(profile.get("location")?)?;
    let agency_type = scalar_text(profile.get("agency_type")?)?;
    let team_size = scalar_text(profile.get("team_size")?)?;

    let solutions: Vec<&str> = profile
        .get("solutions")?
        .as_array()?
        .iter()
        .filter_map(non_empty_str)
        .collect();
    if solutions.is_empty() {
        return None;
    }

    let portfolio = profile.get("client_portfolio")?;
    let government = scalar_text(portfolio.get("retained_government_clients")?)?;
    let corporate = scalar_text(portfolio.get("corporate_brands")?)?;

    Some(format!(
        "Established in {} and based in {}, we are an {} delivering end-to-end solutions across {}. \
With a growing team of {} passionate professionals, we proudly serve over {} retained government clients and {} corporate brands.",
        year,
        location,
        agency_type.to_lowercase(),
        solutions.join(", ").to_lowercase(),
        team_size,
        government,
        corporate
    ))
}

impl Formattable for AboutContent {
    fn pretty(&self) -> String {
        format!(
            "{}\n{}\n\n{}\n\n{}\n\n{}",
            heading("About"),
            seo_lines(&self.seo),
            self.heading,
            self.paragraph,
            self.quote
        )
    }
}
