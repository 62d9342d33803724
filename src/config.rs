//! Configuration for productstore
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a record store instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the flat record file (no header, no footer)
    pub data_file: PathBuf,

    /// Whether the store may append
    pub mode: OpenMode,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// Sync strategy: when appended records are fsynced
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Integrity Configuration
    // -------------------------------------------------------------------------
    /// What to do when the file length is not a multiple of the record size
    pub trailing_data: TrailingDataPolicy,
}

/// Access mode for the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Open for reading and appending; creates the file if absent
    ReadWrite,

    /// Open for reading only; the file must exist
    ReadOnly,
}

/// Record sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync after every append (append is durable once it returns)
    EveryWrite,

    /// fsync once, when the store is closed
    OnClose,
}

/// Handling of a trailing partial record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailingDataPolicy {
    /// Fail with a corruption error
    Reject,

    /// Ignore the partial tail (integer-division record count).
    /// Only honoured for read-only stores.
    Ignore,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("products.dat"),
            mode: OpenMode::ReadWrite,
            sync_strategy: SyncStrategy::EveryWrite,
            trailing_data: TrailingDataPolicy::Reject,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data file path
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_file = path.into();
        self
    }

    /// Set the access mode
    pub fn mode(mut self, mode: OpenMode) -> Self {
        self.config.mode = mode;
        self
    }

    /// Shorthand for `mode(OpenMode::ReadOnly)`
    pub fn read_only(self) -> Self {
        self.mode(OpenMode::ReadOnly)
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the trailing partial record policy
    pub fn trailing_data(mut self, policy: TrailingDataPolicy) -> Self {
        self.config.trailing_data = policy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
