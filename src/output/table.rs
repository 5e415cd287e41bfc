//! Table output formatting

use serde::Serialize;
use serde_json::Value;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Format data as a table
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    if data.is_empty() {
        return "No results found.".to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

/// One leaf of a content object, addressed by its dotted path
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct FieldRow {
    #[tabled(rename = "FIELD")]
    pub field: String,
    #[tabled(rename = "VALUE")]
    pub value: String,
}

/// Format any serializable content as FIELD/VALUE rows
pub fn format_fields<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(data)?;
    Ok(format_table(&field_rows(&value)))
}

/// Flatten a JSON value into leaf rows (`hero.title1`, `cards[0].title`, ...)
pub fn field_rows(value: &Value) -> Vec<FieldRow> {
    let mut rows = Vec::new();
    collect_rows(value, String::new(), &mut rows);
    rows
}

fn collect_rows(value: &Value, path: String, rows: &mut Vec<FieldRow>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let child_path = if path.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", path, key)
                };
                collect_rows(child, child_path, rows);
            }
        }
        Value::Array(items) if !items.is_empty() => {
            for (index, child) in items.iter().enumerate() {
                collect_rows(child, format!("{}[{}]", path, index), rows);
            }
        }
        Value::Array(_) => rows.push(FieldRow {
            field: path,
            value: "-".to_string(),
        }),
        Value::Null => rows.push(FieldRow {
            field: path,
            value: "-".to_string(),
        }),
        Value::String(s) => rows.push(FieldRow {
            field: path,
            value: s.clone(),
        }),
        other => rows.push(FieldRow {
            field: path,
            value: other.to_string(),
        }),
    }
}
