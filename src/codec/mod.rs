//! Record Codec Module
//!
//! Deterministic, fixed-width binary encoding of a [`Product`](crate::Product).
//!
//! ## Responsibilities
//! - Pad or truncate text fields to their exact widths
//! - Encode every record to exactly [`RECORD_SIZE`] bytes
//! - Decode without relying on null termination
//!
//! ## Record Format
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Record (240 bytes)                                           │
//! │ ┌───────────┬────────────┬──────────────────┬──────────────┐ │
//! │ │ ID (12)   │ Name (70)  │ Description (150)│ Cost (8)     │ │
//! │ │ 6 × u16   │ 35 × u16   │ 75 × u16         │ f64 BE       │ │
//! │ └───────────┴────────────┴──────────────────┴──────────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Text is stored as big-endian UTF-16 code units, right-padded with
//! U+0020. The file is a plain concatenation of records, so record `i`
//! always starts at byte `i * RECORD_SIZE`.

mod fixed;
mod record;

pub use fixed::{pad_or_truncate, trim_field, width_of};
pub use record::{decode, encode, record_offset};

// =============================================================================
// Field Widths (in UTF-16 code units)
// =============================================================================

/// Width of the id field
pub const ID_WIDTH: usize = 6;

/// Width of the name field
pub const NAME_WIDTH: usize = 35;

/// Width of the description field
pub const DESCRIPTION_WIDTH: usize = 75;

/// Bytes per encoded character
pub(crate) const CHAR_BYTES: usize = 2;

/// Bytes used by the cost field
pub(crate) const COST_BYTES: usize = 8;

/// Record size: (6 + 35 + 75) * 2 + 8 = 240 bytes
pub const RECORD_SIZE: usize =
    (ID_WIDTH + NAME_WIDTH + DESCRIPTION_WIDTH) * CHAR_BYTES + COST_BYTES;

/// Padding character for short fields
pub(crate) const PAD_UNIT: u16 = 0x0020;
