//! Media URL resolution for Strapi image fields

use serde_json::Value;

use crate::config::CmsConfig;

/// Extract the URL from an image reference.
///
/// Accepts a plain string, `{ "url": ... }`, or the relation form
/// `{ "data": { "attributes": { "url": ... } } }`.
pub fn image_reference(value: &Value) -> Option<&str> {
    let url = match value {
        Value::String(url) => Some(url.as_str()),
        Value::Object(_) => value
            .get("url")
            .and_then(Value::as_str)
            .or_else(|| value.pointer("/data/attributes/url").and_then(Value::as_str)),
        _ => None,
    };

    url.filter(|url| !url.is_empty())
}

/// Turns relative media paths into absolute URLs on the CMS host.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    host: String,
}

impl ImageResolver {
    pub fn new(config: &CmsConfig) -> Self {
        Self {
            host: config.asset_host().to_string(),
        }
    }

    /// Resolve any image reference to an absolute URL.
    pub fn resolve(&self, value: &Value) -> Option<String> {
        image_reference(value).map(|url| self.absolute(url))
    }

    /// Resolve an already-extracted URL in place; empty slots stay empty.
    pub fn resolve_field(&self, slot: &mut Option<String>) {
        *slot = slot.take().and_then(|url| self.resolve(&Value::String(url)));
    }

    /// Prefix the CMS host unless `url` is already absolute.
    fn absolute(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.host, url)
        } else {
            format!("{}/{}", self.host, url)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFile, ENV_BASE_URL};
    use serde_json::json;

    fn resolver() -> ImageResolver {
        let config = CmsConfig::resolve(&ConfigFile::default(), |key| {
            (key == ENV_BASE_URL).then(|| "https://cms.example.com/".to_string())
        });
        ImageResolver::new(&config)
    }

    #[test]
    fn test_null_and_unusable_values() {
        let resolver = resolver();
        assert_eq!(resolver.resolve(&Value::Null), None);
        assert_eq!(resolver.resolve(&json!("")), None);
        assert_eq!(resolver.resolve(&json!({"name": "hero.png"})), None);
        assert_eq!(resolver.resolve(&json!(42)), None);
    }

    #[test]
    fn test_relative_string_gets_host() {
        assert_eq!(
            resolver().resolve(&json!("/uploads/hero.png")).as_deref(),
            Some("https://cms.example.com/uploads/hero.png")
        );
    }

    #[test]
    fn test_object_with_url() {
        assert_eq!(
            resolver()
                .resolve(&json!({"url": "/uploads/a.jpg", "alternativeText": null}))
                .as_deref(),
            Some("https://cms.example.com/uploads/a.jpg")
        );
    }

    #[test]
    fn test_relation_wrapped_url() {
        let value = json!({"data": {"id": 1, "attributes": {"url": "/uploads/b.jpg"}}});
        assert_eq!(
            resolver().resolve(&value).as_deref(),
            Some("https://cms.example.com/uploads/b.jpg")
        );
    }

    #[test]
    fn test_resolve_field() {
        let resolver = resolver();

        let mut slot = Some("uploads/d.jpg".to_string());
        resolver.resolve_field(&mut slot);
        assert_eq!(slot.as_deref(), Some("https://cms.example.com/uploads/d.jpg"));

        let mut empty = None;
        resolver.resolve_field(&mut empty);
        assert_eq!(empty, None);
    }

    #[test]
    fn test_absolute_url_untouched() {
        let value = json!({"url": "https://cdn.example.com/c.jpg"});
        assert_eq!(
            resolver().resolve(&value).as_deref(),
            Some("https://cdn.example.com/c.jpg")
        );
    }
}
