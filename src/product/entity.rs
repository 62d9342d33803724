//! Product entity definition

use serde::{Serialize, Serializer};

use crate::codec::{trim_field, width_of, DESCRIPTION_WIDTH, ID_WIDTH, NAME_WIDTH};
use crate::error::{Result, StoreError};

/// A catalogue product
///
/// Name and description hold their trimmed logical value; they may exceed
/// the on-disk widths (the codec truncates), but [`RecordStore::append`]
/// refuses such products via [`Product::validate_widths`].
///
/// [`RecordStore::append`]: crate::RecordStore::append
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    /// Fixed 6-character identifier (never changes)
    #[serde(rename = "ID")]
    id: String,
    name: String,
    description: String,
    #[serde(serialize_with = "serialize_cents")]
    cost: f64,
}

/// Serialize cost rounded to 2 decimals, matching the text exports
fn serialize_cents<S>(cost: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rounded = format!("{:.2}", cost).parse::<f64>().unwrap_or(*cost);
    serializer.serialize_f64(rounded)
}

impl Product {
    /// Create a product
    ///
    /// Fails if the id is not exactly 6 characters or the cost is negative.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        cost: f64,
    ) -> Result<Self> {
        let id = id.into();
        Self::check_id(&id)?;
        Self::check_cost(cost)?;

        let name = name.into();
        let description = description.into();

        Ok(Self {
            id,
            name: trim_field(&name).to_string(),
            description: trim_field(&description).to_string(),
            cost,
        })
    }

    /// Build from decoded record fields (no validation; the bytes are what they are)
    pub(crate) fn from_record(id: String, name: String, description: String, cost: f64) -> Self {
        Self {
            id,
            name,
            description,
            cost,
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    // -------------------------------------------------------------------------
    // Mutators (no id setter)
    // -------------------------------------------------------------------------

    pub fn set_name(&mut self, name: &str) {
        self.name = trim_field(name).to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = trim_field(description).to_string();
    }

    /// Set the cost; a negative or NaN cost is rejected and leaves the product unchanged
    pub fn set_cost(&mut self, cost: f64) -> Result<()> {
        Self::check_cost(cost)?;
        self.cost = cost;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Check every field fits its on-disk width without truncation
    pub fn validate_widths(&self) -> Result<()> {
        Self::check_field_widths(&self.id, &self.name, &self.description)?;
        Self::check_cost(self.cost)
    }

    /// Check raw text fields against the on-disk widths
    ///
    /// Reports the first failure in field order: id, name, description.
    pub fn check_field_widths(id: &str, name: &str, description: &str) -> Result<()> {
        Self::check_id(id)?;

        if width_of(name) > NAME_WIDTH {
            return Err(StoreError::validation(format!(
                "Name cannot exceed {} characters",
                NAME_WIDTH
            )));
        }

        if width_of(description) > DESCRIPTION_WIDTH {
            return Err(StoreError::validation(format!(
                "Description cannot exceed {} characters",
                DESCRIPTION_WIDTH
            )));
        }

        Ok(())
    }

    fn check_id(id: &str) -> Result<()> {
        if width_of(id) != ID_WIDTH {
            return Err(StoreError::validation(format!(
                "ID must be exactly {} characters",
                ID_WIDTH
            )));
        }

        // Decoding trims the field, so edge whitespace would not survive a round trip
        if trim_field(id).len() != id.len() {
            return Err(StoreError::validation(
                "ID cannot begin or end with whitespace",
            ));
        }

        Ok(())
    }

    fn check_cost(cost: f64) -> Result<()> {
        if cost.is_nan() || cost < 0.0 {
            return Err(StoreError::validation("Cost cannot be negative"));
        }
        Ok(())
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.name == other.name
            && self.description == other.description
            && self.cost.total_cmp(&other.cost).is_eq()
    }
}

impl Eq for Product {}
