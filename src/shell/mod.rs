//! Shell Module
//!
//! The front-end side of the data-access contract: turns raw user input into
//! validated products and queries, and store output into text.
//!
//! ## Responsibilities
//! - Required-field and numeric-cost validation before `append`
//! - Search query normalisation
//! - Rendering hits as text, CSV, JSON or XML

mod form;
mod render;

pub use form::{parse_query, ProductForm};
pub use render::{render, render_hits, NO_MATCHES};
