//! Name search
//!
//! Linear, case-insensitive substring filter over scanned records. No index
//! backs this; every search reads the whole file.

use serde::Serialize;

use crate::error::Result;
use crate::product::Product;

/// A product that matched a search, with its position in the file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    /// 0-based record index
    pub index: u64,
    pub product: Product,
}

/// True if the product's name contains `query`, ignoring case
pub fn matches_name(product: &Product, query: &str) -> bool {
    name_contains(product, &query.to_lowercase())
}

/// Keep the records whose name contains `query`, preserving order
///
/// The first error aborts the search; no partial hit list is returned.
pub fn filter_by_name<I>(records: I, query: &str) -> Result<Vec<SearchHit>>
where
    I: IntoIterator<Item = Result<Product>>,
{
    let needle = query.to_lowercase();
    let mut hits = Vec::new();

    for (index, record) in records.into_iter().enumerate() {
        let product = record?;
        if name_contains(&product, &needle) {
            hits.push(SearchHit {
                index: index as u64,
                product,
            });
        }
    }

    Ok(hits)
}

/// `needle` must already be lowercase
fn name_contains(product: &Product, needle: &str) -> bool {
    product.name().to_lowercase().contains(needle)
}
