//! Error types for productstore
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Unified error type for productstore operations
#[derive(Debug, Error)]
pub enum StoreError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Validation Errors (never touch the file)
    // -------------------------------------------------------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    // -------------------------------------------------------------------------
    // Data File Errors
    // -------------------------------------------------------------------------
    #[error("Data file corruption detected: {0}")]
    Corruption(String),

    #[error("Record {index} out of range (store holds {count} records)")]
    RecordOutOfRange { index: u64, count: u64 },

    // -------------------------------------------------------------------------
    // Lifecycle Errors
    // -------------------------------------------------------------------------
    #[error("Store is opened read-only")]
    ReadOnly,

    #[error("Store is closed")]
    Closed,

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl StoreError {
    /// Shorthand for building a validation error
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        StoreError::Validation(msg.into())
    }

    /// True for errors raised before any I/O was attempted
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}
