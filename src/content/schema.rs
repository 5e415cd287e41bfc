//! Declarative merge-with-defaults for CMS payloads
//!
//! A [`Schema`] lists the fields a page expects, where to read each one from
//! in the CMS payload, and the rule a value must pass to be used. Anything
//! missing or malformed is taken from the page's default object instead.
//! Normalization never fails and never mutates the defaults.

use serde_json::{Map, Value};

use crate::client::image::image_reference;

/// Validation rule for a single field
pub enum Rule {
    /// Non-empty string
    Text,
    /// Non-empty string, or a non-empty list of strings joined by the separator
    JoinedText(&'static str),
    /// Non-empty list of objects; each element is normalized against `item`
    /// using the defaults produced for its index
    Items {
        item: Schema,
        defaults: fn(usize) -> Value,
    },
    /// Object normalized field by field (leaf-level defaults)
    Nested(Schema),
    /// Object used only when every field passes; otherwise the whole default
    Complete(Schema),
    /// Image reference reduced to its URL string
    Image,
    /// Arbitrary conversion; `None` means the value is rejected
    Custom(fn(&Value) -> Option<Value>),
}

struct Field {
    name: &'static str,
    sources: Vec<&'static str>,
    rule: Rule,
}

/// Ordered set of field rules for one content shape
#[derive(Default)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Field read from the payload key of the same name.
    pub fn field(self, name: &'static str, rule: Rule) -> Self {
        self.field_from(name, &[name], rule)
    }

    /// Field read from the first of `sources` whose value passes `rule`.
    pub fn field_from(mut self, name: &'static str, sources: &[&'static str], rule: Rule) -> Self {
        self.fields.push(Field {
            name,
            sources: sources.to_vec(),
            rule,
        });
        self
    }

    /// Merge `payload` over `defaults`.
    ///
    /// Every schema field is present in the output. With no payload the
    /// output equals `defaults`.
    pub fn normalize(&self, payload: Option<&Value>, defaults: &Value) -> Value {
        let mut out = match defaults {
            Value::Object(map) => map.clone(),
            _ => Map::new(),
        };

        for field in &self.fields {
            let default = defaults.get(field.name).unwrap_or(&Value::Null);
            let value = match self.candidate(field, payload) {
                Some(candidate) => field.rule.apply(candidate, default),
                None => default.clone(),
            };
            out.insert(field.name.to_string(), value);
        }

        Value::Object(out)
    }

    fn candidate<'a>(&self, field: &Field, payload: Option<&'a Value>) -> Option<&'a Value> {
        let payload = payload?;
        field
            .sources
            .iter()
            .filter_map(|source| payload.get(source))
            .find(|value| field.rule.accepts(value))
    }

    /// True when every field has an acceptable value in `payload`.
    fn complete(&self, payload: &Value) -> bool {
        self.fields
            .iter()
            .all(|field| self.candidate(field, Some(payload)).is_some())
    }
}

impl Rule {
    fn accepts(&self, value: &Value) -> bool {
        match self {
            Rule::Text => non_empty_str(value).is_some(),
            Rule::JoinedText(sep) => joined_text(value, sep).is_some(),
            Rule::Items { .. } => non_empty_list(value).is_some(),
            Rule::Nested(_) => value.is_object(),
            Rule::Complete(schema) => value.is_object() && schema.complete(value),
            Rule::Image => image_reference(value).is_some(),
            Rule::Custom(convert) => convert(value).is_some(),
        }
    }

    /// Convert an accepted value. Callers check [`Rule::accepts`] first.
    fn apply(&self, value: &Value, default: &Value) -> Value {
        let converted = match self {
            Rule::Text => Some(value.clone()),
            Rule::JoinedText(sep) => joined_text(value, sep).map(Value::String),
            Rule::Items { item, defaults } => non_empty_list(value).map(|items| {
                Value::Array(
                    items
                        .iter()
                        .enumerate()
                        .map(|(index, element)| item.normalize(Some(element), &defaults(index)))
                        .collect(),
                )
            }),
            Rule::Nested(schema) | Rule::Complete(schema) => Some(schema.normalize(Some(value), default)),
            Rule::Image => image_reference(value).map(|url| Value::String(url.to_string())),
            Rule::Custom(convert) => convert(value),
        };

        converted.unwrap_or_else(|| default.clone())
    }
}

/// A non-empty string value
pub fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

/// A string or number rendered as text
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn non_empty_list(value: &Value) -> Option<&Vec<Value>> {
    value.as_array().filter(|items| !items.is_empty())
}

fn joined_text(value: &Value, sep: &str) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let parts: Vec<&str> = items.iter().filter_map(non_empty_str).collect();
            (!parts.is_empty()).then(|| parts.join(sep))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn link_default(_: usize) -> Value {
        json!({"path": "/", "label": ""})
    }

    fn schema() -> Schema {
        Schema::new()
            .field("heading", Rule::Text)
            .field_from("title", &["metaTitle", "title"], Rule::Text)
            .field(
                "links",
                Rule::Items {
                    item: Schema::new()
                        .field("path", Rule::Text)
                        .field("label", Rule::Text),
                    defaults: link_default,
                },
            )
            .field(
                "button",
                Rule::Nested(
                    Schema::new()
                        .field("label", Rule::Text)
                        .field("href", Rule::Text),
                ),
            )
            .field(
                "contact",
                Rule::Complete(
                    Schema::new()
                        .field("email", Rule::Text)
                        .field("phone", Rule::Text),
                ),
            )
    }

    fn defaults() -> Value {
        json!({
            "heading": "Default heading",
            "title": "Default title",
            "links": [{"path": "/about", "label": "About"}],
            "button": {"label": "Go", "href": "/go"},
            "contact": {"email": "a@example.com", "phone": "123"}
        })
    }

    #[test]
    fn test_null_payload_equals_defaults() {
        let defaults = defaults();
        assert_eq!(schema().normalize(None, &defaults), defaults);
        assert_eq!(schema().normalize(Some(&Value::Null), &defaults), defaults);
    }

    #[test]
    fn test_partial_payload_keeps_given_field() {
        let out = schema().normalize(Some(&json!({"heading": "Hello"})), &defaults());

        let mut expected = defaults();
        expected["heading"] = json!("Hello");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_normalize_is_idempotent_and_pure() {
        let defaults = defaults();
        let payload = json!({"heading": "Hello", "links": []});

        let first = schema().normalize(Some(&payload), &defaults);
        let second = schema().normalize(Some(&payload), &defaults);

        assert_eq!(first, second);
        assert_eq!(defaults, self::defaults());
    }

    #[test]
    fn test_wrong_types_fall_back() {
        let payload = json!({"heading": 42, "title": "", "links": "not a list"});
        assert_eq!(schema().normalize(Some(&payload), &defaults()), defaults());
    }

    #[test]
    fn test_empty_list_falls_back_whole() {
        let out = schema().normalize(Some(&json!({"links": []})), &defaults());
        assert_eq!(out["links"], defaults()["links"]);
    }

    #[test]
    fn test_list_replaced_not_merged() {
        let payload = json!({"links": [{"path": "/x", "label": "X"}]});
        let out = schema().normalize(Some(&payload), &defaults());
        assert_eq!(out["links"], json!([{"path": "/x", "label": "X"}]));
    }

    #[test]
    fn test_first_acceptable_source_wins() {
        let out = schema().normalize(
            Some(&json!({"metaTitle": "Meta", "title": "Plain"})),
            &defaults(),
        );
        assert_eq!(out["title"], "Meta");

        let out = schema().normalize(Some(&json!({"metaTitle": "", "title": "Plain"})), &defaults());
        assert_eq!(out["title"], "Plain");
    }

    #[test]
    fn test_nested_leaf_defaults() {
        let out = schema().normalize(Some(&json!({"button": {"label": "Chat"}})), &defaults());
        assert_eq!(out["button"], json!({"label": "Chat", "href": "/go"}));
    }

    #[test]
    fn test_complete_object_all_or_nothing() {
        let partial = json!({"contact": {"email": "b@example.com"}});
        let out = schema().normalize(Some(&partial), &defaults());
        assert_eq!(out["contact"], defaults()["contact"]);

        let full = json!({"contact": {"email": "b@example.com", "phone": "456"}});
        let out = schema().normalize(Some(&full), &defaults());
        assert_eq!(out["contact"], json!({"email": "b@example.com", "phone": "456"}));
    }

    #[test]
    fn test_items_use_indexed_defaults() {
        let payload = json!({"links": [{"path": "/a"}, {"label": "B", "extra": true}]});
        let out = schema().normalize(Some(&payload), &defaults());

        assert_eq!(
            out["links"],
            json!([
                {"path": "/a", "label": ""},
                {"path": "/", "label": "B"}
            ])
        );
    }

    #[test]
    fn test_joined_text() {
        let schema = Schema::new().field_from("address", &["addressLines", "address"], Rule::JoinedText(", "));
        let defaults = json!({"address": "Default"});

        let out = schema.normalize(Some(&json!({"addressLines": ["Line 1", "Line 2"]})), &defaults);
        assert_eq!(out["address"], "Line 1, Line 2");

        let out = schema.normalize(Some(&json!({"addressLines": "Single"})), &defaults);
        assert_eq!(out["address"], "Single");

        let out = schema.normalize(Some(&json!({"addressLines": [], "address": "Alt"})), &defaults);
        assert_eq!(out["address"], "Alt");
    }

    #[test]
    fn test_image_reduced_to_url() {
        let schema = Schema::new().field("image", Rule::Image);
        let defaults = json!({"image": null});

        let out = schema.normalize(Some(&json!({"image": {"url": "/uploads/x.png"}})), &defaults);
        assert_eq!(out["image"], "/uploads/x.png");

        let out = schema.normalize(Some(&json!({"image": {"data": null}})), &defaults);
        assert_eq!(out["image"], Value::Null);
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(scalar_text(&json!("x")).as_deref(), Some("x"));
        assert_eq!(scalar_text(&json!(15)).as_deref(), Some("15"));
        assert_eq!(scalar_text(&json!("")), None);
        assert_eq!(scalar_text(&json!(null)), None);
    }
}
