//! Site-wide header and footer content

use serde::{Deserialize, Serialize};

use super::{Link, PageContent, Rule, Schema, heading};
use crate::client::ContentKey;
use crate::output::Formattable;

const DEFAULT_ADDRESS: &str = "B3-3A-13A Solaris Dutamas, No. 1 Jalan Dutamas 1, 50480 Kuala Lumpur, Wilayah Persekutuan Kuala Lumpur.";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalContent {
    pub header: Header,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Header {
    pub brand: Brand,
    pub nav_links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Brand {
    pub logo_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Footer {
    pub company_name: String,
    pub copyright: String,
    pub quick_links: Vec<Link>,
    pub contact_info: ContactInfo,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub address: String,
    pub email: String,
    pub phone: String,
}

fn default_links() -> Vec<Link> {
    vec![
        Link::new("/about", "About Us"),
        Link::new("/services", "Our Service"),
        Link::new("/info", "Quick Info"),
        Link::new("/contact", "Contact Us"),
    ]
}

impl Default for Header {
    fn default() -> Self {
        Self {
            brand: Brand {
                logo_text: "Qoyy Global".to_string(),
            },
            nav_links: default_links(),
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            company_name: "Qoyy Global".to_string(),
            copyright: "COPYRIGHT Ⓒ 2025 QOYY GLOBAL (002857086-D)\nAll rights reserved.".to_string(),
            quick_links: default_links(),
            contact_info: ContactInfo {
                address: DEFAULT_ADDRESS.to_string(),
                email: "commercial@qoyyglobal.com".to_string(),
                phone: "+6016-670 4742".to_string(),
            },
        }
    }
}

impl Header {
    /// Navigation entries shown in the header
    pub fn visible_links(&self) -> impl Iterator<Item = &Link> {
        self.nav_links.iter().filter(|link| link.is_visible())
    }
}

impl Footer {
    pub fn visible_links(&self) -> impl Iterator<Item = &Link> {
        self.quick_links.iter().filter(|link| link.is_visible())
    }
}

impl PageContent for GlobalContent {
    const KEY: ContentKey = ContentKey::Global;

    fn schema() -> Schema {
        let header = Schema::new()
            .field(
                "brand",
                Rule::Complete(Schema::new().field("logoText", Rule::Text)),
            )
            .field("navLinks", Link::list_rule());

        let contact_info = Schema::new()
            .field_from("address", &["addressLines", "address"], Rule::JoinedText(", "))
            .field("email", Rule::Text)
            .field("phone", Rule::Text);

        let footer = Schema::new()
            .field("companyName", Rule::Text)
            .field("copyright", Rule::Text)
            .field("quickLinks", Link::list_rule())
            .field("contactInfo", Rule::Complete(contact_info));

        Schema::new()
            .field("header", Rule::Complete(header))
            .field("footer", Rule::Nested(footer))
    }
}

fn link_lines<'a>(links: impl Iterator<Item = &'a Link>) -> String {
    links
        .map(|link| format!("  {} ({})", link.label, link.path))
        .collect::<Vec<_>>()
        .join("\n")
}

impl Formattable for GlobalContent {
    fn pretty(&self) -> String {
        let info = &self.footer.contact_info;
        format!(
            "{}\n{}\n{}\n\n{}\n{}\n{}\n{}\nAddress: {}\nEmail:   {}\nPhone:   {}",
            heading("Header"),
            self.header.brand.logo_text,
            link_lines(self.header.visible_links()),
            heading("Footer"),
            self.footer.company_name,
            self.footer.copyright,
            link_lines(self.footer.visible_links()),
            info.address,
            info.email,
            info.phone
        )
    }
}
