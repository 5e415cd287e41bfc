//! Content keys and their fixed backend endpoints

use serde::Serialize;

/// Generic populate expression: expand every first-level relation.
pub const POPULATE_ALL: &str = "populate=*";

const POPULATE_CONTACT: &str = "populate[seo][populate]=*\
&populate[buttons][populate][whatsapp][populate]=*\
&populate[buttons][populate][email][populate]=*\
&populate[info][populate]=*\
&populate[offers][populate]=*\
&populate[bottomCta][populate][buttons][populate]=*";

const POPULATE_GLOBAL: &str = "populate[defaultSeo][populate]=*\
&populate[footer][populate][quickLinks][populate]=*\
&populate[footer][populate][contactInfo][populate]=*\
&populate[header][populate][brand][populate]=*\
&populate[header][populate][navLinks][populate]=*";

const POPULATE_SERVICES: &str = "populate[seo][populate]=*&populate[cards][populate]=*";

/// Logical content identifier.
///
/// Each key maps to exactly one CMS resource and one cache slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContentKey {
    Home,
    About,
    Services,
    Info,
    Contact,
    Global,
}

impl ContentKey {
    /// Every key, in site order
    pub const ALL: [ContentKey; 6] = [
        ContentKey::Global,
        ContentKey::Home,
        ContentKey::About,
        ContentKey::Services,
        ContentKey::Info,
        ContentKey::Contact,
    ];

    /// Cache slot / logical name
    pub fn name(self) -> &'static str {
        match self {
            ContentKey::Home => "home",
            ContentKey::About => "about",
            ContentKey::Services => "services",
            ContentKey::Info => "info",
            ContentKey::Contact => "contact",
            ContentKey::Global => "global",
        }
    }

    /// CMS resource path segment (relative to the API base URL)
    pub fn resource(self) -> &'static str {
        match self {
            ContentKey::Services => "service-page-content",
            other => other.name(),
        }
    }

    /// Deep populate expression for this resource
    pub fn populate(self) -> &'static str {
        match self {
            ContentKey::Contact => POPULATE_CONTACT,
            ContentKey::Global => POPULATE_GLOBAL,
            ContentKey::Services => POPULATE_SERVICES,
            _ => POPULATE_ALL,
        }
    }
}

impl std::fmt::Display for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
