//! Output formatting for CLI results

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::models::{DisplayObject, DisplayRow};

pub mod json;
pub mod pretty;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        let output = self.format(format)?;
        println!("{}", output);
        Ok(())
    }
}

impl Formattable for DisplayObject {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => Ok(pretty::format_display_object(self)),
            OutputFormat::Table => Ok(table::format_table(&[DisplayRow::from(self)])),
            OutputFormat::Json => Ok(json::format_json(self)?),
        }
    }
}

/// Template content returned by `include`
#[derive(Debug, Clone, Serialize)]
pub struct IncludedTemplate {
    pub filename: String,
    pub content: String,
}

impl Formattable for IncludedTemplate {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json(self)?),
            // Raw content, so the output can be redirected straight into a page
            OutputFormat::Pretty | OutputFormat::Table => Ok(self.content.clone()),
        }
    }
}
