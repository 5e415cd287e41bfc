//! Contact page content

use serde::{Deserialize, Serialize};

use super::{PageContent, Rule, Schema, Seo, heading, seo_lines};
use crate::client::ContentKey;
use crate::output::Formattable;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactContent {
    pub seo: Seo,
    pub heading: String,
    pub subheading: String,
    pub lead: String,
    pub buttons: Buttons,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Buttons {
    pub whatsapp: Button,
    pub email: Button,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Button {
    pub label: String,
    pub href: String,
}

impl Button {
    fn new(label: &str, href: &str) -> Self {
        Self {
            label: label.to_string(),
            href: href.to_string(),
        }
    }

    fn rule() -> Rule {
        Rule::Nested(
            Schema::new()
                .field("label", Rule::Text)
                .field("href", Rule::Text),
        )
    }
}

impl Default for Buttons {
    fn default() -> Self {
        Self {
            whatsapp: Button::new("CONTACT US VIA WHATSAPP", "https://wa.me/60166704742"),
            email: Button::new("CONTACT US VIA EMAIL", "mailto:commercial@qoyyglobal.com"),
        }
    }
}

impl Default for ContactContent {
    fn default() -> Self {
        Self {
            seo: Seo::new(
                "Contact Us - Qoyy Global",
                "Get in touch with Qoyy Global. Reach us via WhatsApp or email to start your next marketing project.",
            ),
            heading: "LET'S WORK TOGETHER".to_string(),
            subheading: "READY TO GROW YOUR BRAND?".to_string(),
            lead: "Tell us about your goals and our team will get back to you with a plan that fits.".to_string(),
            buttons: Buttons::default(),
        }
    }
}

impl PageContent for ContactContent {
    const KEY: ContentKey = ContentKey::Contact;

    fn schema() -> Schema {
        Schema::new()
            .field("seo", Seo::rule())
            .field("heading", Rule::Text)
            .field("subheading", Rule::Text)
            .field("lead", Rule::Text)
            .field(
                "buttons",
                Rule::Nested(
                    Schema::new()
                        .field("whatsapp", Button::rule())
                        .field("email", Button::rule()),
                ),
            )
    }
}

impl Formattable for ContactContent {
    fn pretty(&self) -> String {
        format!(
            "{}\n{}\n\n{}\n{}\n{}\n\n{} {}\n{} {}",
            heading("Contact"),
            seo_lines(&self.seo),
            self.heading,
            self.subheading,
            self.lead,
            self.buttons.whatsapp.label,
            self.buttons.whatsapp.href,
            self.buttons.email.label,
            self.buttons.email.href
        )
    }
}
