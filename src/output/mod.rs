//! Output formatting for CLI results

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::client::ContentKey;
use crate::error::Result;

pub mod json;
pub mod table;

/// Types that can be printed in every output format
pub trait Formattable: Serialize {
    /// Human-oriented rendering
    fn pretty(&self) -> String;

    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat, key: Option<ContentKey>) -> Result<String> {
        let output = match format {
            OutputFormat::Pretty => self.pretty(),
            OutputFormat::Table => table::format_fields(self)?,
            OutputFormat::Json => json::format_json(self, key)?,
        };
        Ok(output)
    }
}
