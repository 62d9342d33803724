//! Input validation for the maker and search front ends

use crate::error::{Result, StoreError};
use crate::product::Product;

/// Raw field values as typed by the user
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Unparsed; validated as a number here, not in the store
    pub cost: String,
}

impl ProductForm {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            cost: cost.into(),
        }
    }

    /// Validate the form and build a product ready to append
    ///
    /// Checks, in order: all fields present, id width, name width,
    /// description width, cost is a number, cost is non-negative.
    pub fn validate(&self) -> Result<Product> {
        let fields = [&self.id, &self.name, &self.description, &self.cost];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(StoreError::validation("All fields are required"));
        }

        Product::check_field_widths(&self.id, &self.name, &self.description)?;

        let cost: f64 = self
            .cost
            .trim()
            .parse()
            .map_err(|_| StoreError::validation("Invalid cost format"))?;

        Product::new(&self.id, &self.name, &self.description, cost)
    }
}

/// Normalise a search query; an empty query is rejected
pub fn parse_query(raw: &str) -> Result<String> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(StoreError::validation("Please enter a search term"));
    }
    Ok(query.to_string())
}
