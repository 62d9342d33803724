//! Result rendering

use std::fmt::Write;

use crate::error::{Result, StoreError};
use crate::product::{ExportFormat, Product};
use crate::store::SearchHit;

/// Shown when a search finds nothing
pub const NO_MATCHES: &str = "No matching products found.";

/// Human-readable block per hit, numbered from 1
pub fn render_hits(hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return NO_MATCHES.to_string();
    }

    let mut out = String::new();
    for hit in hits {
        let p = &hit.product;
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "Record #{}\nID: {}\nName: {}\nDescription: {}\nCost: ${:.2}\n\n",
            hit.index + 1,
            p.id(),
            p.name(),
            p.description(),
            p.cost()
        );
    }
    out
}

/// Render hits in the requested export format
pub fn render(hits: &[SearchHit], format: ExportFormat) -> Result<String> {
    let products = hits.iter().map(|h| &h.product);

    match format {
        ExportFormat::Text => Ok(render_hits(hits)),
        ExportFormat::Csv => Ok(products.map(Product::to_csv).collect::<Vec<_>>().join("\n")),
        ExportFormat::Json => {
            let products: Vec<&Product> = products.collect();
            serde_json::to_string_pretty(&products)
                .map_err(|e| StoreError::Serialization(e.to_string()))
        }
        ExportFormat::Xml => {
            let mut out = String::from("<products>\n");
            for p in products {
                out.push_str(&p.to_xml());
                out.push('\n');
            }
            out.push_str("</products>");
            Ok(out)
        }
    }
}
