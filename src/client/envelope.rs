//! Strapi response envelope decoding

use serde_json::Value;

/// The three accepted response shapes, tried in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    /// `{ "data": { "attributes": { ... } } }` (Strapi v4)
    Attributes(Value),
    /// `{ "data": { ... } }` (Strapi v5, flattened)
    Data(Value),
    /// Anything else: the body is the payload
    Raw(Value),
}

impl Envelope {
    /// Classify a response body.
    pub fn decode(body: Value) -> Self {
        let shape = match body.get("data") {
            Some(data) if is_present(data.get("attributes")) => Shape::Attributes,
            Some(data) if is_present(Some(data)) => Shape::Data,
            _ => Shape::Raw,
        };

        match (shape, body) {
            (Shape::Attributes, Value::Object(mut map)) => match map.remove("data") {
                Some(Value::Object(mut data)) => {
                    Envelope::Attributes(data.remove("attributes").unwrap_or(Value::Null))
                }
                _ => Envelope::Raw(Value::Object(map)),
            },
            (Shape::Data, Value::Object(mut map)) => {
                Envelope::Data(map.remove("data").unwrap_or(Value::Null))
            }
            (_, body) => Envelope::Raw(body),
        }
    }

    /// The content payload inside the envelope.
    pub fn into_payload(self) -> Value {
        match self {
            Envelope::Attributes(payload) | Envelope::Data(payload) | Envelope::Raw(payload) => {
                payload
            }
        }
    }
}

enum Shape {
    Attributes,
    Data,
    Raw,
}

/// Present means not missing and not `null`, `false`, `0` or an empty string.
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() != Some(0.0),
        Some(_) => true,
    }
}
