//! # productstore
//!
//! A fixed-length binary record store for product catalogues:
//! - Fixed-width 240-byte records (UTF-16BE text + big-endian f64 cost)
//! - Random access: record `i` lives at byte `i * 240`
//! - Record count derived from file length, never stored
//! - Linear, case-insensitive name search
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │              product-maker / product-search                 │
//! │                     (bin front ends)                        │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Shell                                │
//! │        (form validation, query parsing, rendering)          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  open / append / scan / close
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                    Record Store                             │
//! │          (single owned File, seek-per-record)               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │ Record Codec  │
//!               │ (pure, fixed) │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod product;
pub mod store;
pub mod shell;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, StoreError};
pub use config::{Config, OpenMode, SyncStrategy, TrailingDataPolicy};
pub use codec::RECORD_SIZE;
pub use product::{ExportFormat, Product};
pub use store::{RecordStore, SearchHit};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of productstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
