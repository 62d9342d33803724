//! Product Module
//!
//! The logical record held in the store.
//!
//! ## Responsibilities
//! - Construction-time validation (6-char id, non-negative cost)
//! - Append-time width checks (name ≤ 35, description ≤ 75)
//! - Export to CSV / JSON / XML and a display form

mod entity;
mod export;

pub use entity::Product;
pub use export::ExportFormat;
