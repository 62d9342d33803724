//! Product export formats
//!
//! Text renderings of a product for display and hand-off to other tools.
//! All formats use the trimmed field values and round cost to 2 decimals.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StoreError};

use super::Product;

/// Output format for exported products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Human-readable `Record #n` blocks
    #[default]
    Text,
    Csv,
    Json,
    Xml,
}

impl FromStr for ExportFormat {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xml" => Ok(ExportFormat::Xml),
            other => Err(StoreError::validation(format!(
                "Unknown export format '{}' (expected text, csv, json or xml)",
                other
            ))),
        }
    }
}

impl Product {
    /// `id,name,description,cost`
    pub fn to_csv(&self) -> String {
        format!(
            "{},{},{},{:.2}",
            self.id(),
            self.name(),
            self.description(),
            self.cost()
        )
    }

    /// `{"ID":..,"name":..,"description":..,"cost":..}`
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Indented `<product>` element
    pub fn to_xml(&self) -> String {
        format!(
            "  <product>\n    <ID>{}</ID>\n    <name>{}</name>\n    <description>{}</description>\n    <cost>{:.2}</cost>\n  </product>",
            xml_escape(self.id()),
            xml_escape(self.name()),
            xml_escape(self.description()),
            self.cost()
        )
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product{{ID='{}', name='{}', description='{}', cost={:.2}}}",
            self.id(),
            self.name(),
            self.description(),
            self.cost()
        )
    }
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
