//! Record Store
//!
//! Single-file, append-only store of fixed-size product records.

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::codec::{self, record_offset, RECORD_SIZE};
use crate::config::{Config, OpenMode, SyncStrategy, TrailingDataPolicy};
use crate::error::{Result, StoreError};
use crate::product::Product;

use super::iterator::RecordIter;
use super::search::{filter_by_name, SearchHit};

/// Store of fixed-length product records backed by one file
///
/// ## Ownership Model
///
/// - The store exclusively owns its `File`; every I/O call takes `&mut self`
/// - `close()` releases the handle and is idempotent; `Drop` releases it on
///   every other path
/// - Not designed for shared access: two stores on one file are unsynchronised
#[derive(Debug)]
pub struct RecordStore {
    /// Path of the data file
    path: PathBuf,

    /// Open handle; `None` once closed
    file: Option<File>,

    mode: OpenMode,
    sync_strategy: SyncStrategy,
    trailing_data: TrailingDataPolicy,

    /// Cached `file_length / RECORD_SIZE`, re-derived on open and each scan
    record_count: u64,

    /// Appends written but not yet fsynced (`SyncStrategy::OnClose`)
    unsynced: u64,
}

impl RecordStore {
    /// Open a store at `path` with default sync and integrity settings
    pub fn open(path: impl AsRef<Path>, mode: OpenMode) -> Result<Self> {
        let config = Config::builder()
            .data_file(path.as_ref())
            .mode(mode)
            .build();
        Self::open_with(config)
    }

    /// Open a store from a full config
    ///
    /// On open:
    /// 1. Open the file (read-write creates it if absent)
    /// 2. Derive the record count from the file length
    /// 3. Reject a trailing partial record unless the policy allows it
    pub fn open_with(config: Config) -> Result<Self> {
        let file = match config.mode {
            OpenMode::ReadWrite => OpenOptions::new()
                .read(true)
                .write(true)
                .create(true)
                .truncate(false)
                .open(&config.data_file)?,
            OpenMode::ReadOnly => File::open(&config.data_file)?,
        };

        let mut store = Self {
            path: config.data_file,
            file: Some(file),
            mode: config.mode,
            sync_strategy: config.sync_strategy,
            trailing_data: config.trailing_data,
            record_count: 0,
            unsynced: 0,
        };

        store.refresh()?;

        info!(
            path = %store.path.display(),
            mode = ?store.mode,
            records = store.record_count,
            "Opened record store"
        );

        Ok(store)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Access mode the store was opened with
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// True until `close()` is called
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Number of complete records as of the last open/append/refresh/scan
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Re-derive the record count from the current file length
    pub fn refresh(&mut self) -> Result<u64> {
        let len = self.file_mut()?.metadata()?.len();
        self.record_count = self.count_for_length(len)?;
        Ok(self.record_count)
    }

    /// Append a product; returns its record index
    ///
    /// Steps:
    /// 1. Validate widths (nothing touches the file on failure)
    /// 2. Seek to end-of-file and check it sits on a record boundary
    /// 3. Write the 240-byte record
    /// 4. Sync per strategy, bump the count
    pub fn append(&mut self, product: &Product) -> Result<u64> {
        product.validate_widths()?;

        if self.mode == OpenMode::ReadOnly {
            return Err(StoreError::ReadOnly);
        }

        let record = codec::encode(product);
        let sync_every_write = self.sync_strategy == SyncStrategy::EveryWrite;

        let file = self.file_mut()?;
        let end = file.seek(SeekFrom::End(0))?;
        if end % RECORD_SIZE as u64 != 0 {
            return Err(StoreError::Corruption(format!(
                "end of file at byte {} is not on a record boundary",
                end
            )));
        }

        file.write_all(&record)?;
        if sync_every_write {
            file.sync_data()?;
        } else {
            self.unsynced += 1;
        }

        let index = end / RECORD_SIZE as u64;
        self.record_count = index + 1;

        debug!(index, id = product.id(), "Appended record");

        Ok(index)
    }

    /// Read the record at `index`
    pub fn read_at(&mut self, index: u64) -> Result<Product> {
        let count = self.record_count;
        if index >= count {
            return Err(StoreError::RecordOutOfRange { index, count });
        }

        let file = self.file_mut()?;
        file.seek(SeekFrom::Start(record_offset(index)))?;

        let mut buf = [0u8; RECORD_SIZE];
        file.read_exact(&mut buf)?;

        codec::decode(&buf).map_err(|e| with_record_index(e, index))
    }

    /// Lazily iterate every record in append order
    ///
    /// The count is re-derived first, so records appended through another
    /// handle since open are included. Calling `scan()` again restarts.
    pub fn scan(&mut self) -> Result<RecordIter<'_>> {
        let count = self.refresh()?;
        debug!(records = count, "Starting scan");

        let file = self.file_mut()?;
        Ok(RecordIter::new(file, count))
    }

    /// Read every record, or fail without returning partial results
    pub fn scan_all(&mut self) -> Result<Vec<Product>> {
        self.scan()?.collect()
    }

    /// Case-insensitive substring search on product names, in append order
    ///
    /// An empty query is rejected; use [`scan_all`](Self::scan_all) to list
    /// every record.
    pub fn search(&mut self, query: &str) -> Result<Vec<SearchHit>> {
        if query.is_empty() {
            return Err(StoreError::validation("Please enter a search term"));
        }

        let hits = filter_by_name(self.scan()?, query)?;
        debug!(query, hits = hits.len(), "Search complete");
        Ok(hits)
    }

    /// Force buffered appends to disk
    pub fn sync(&mut self) -> Result<()> {
        self.file_mut()?.sync_all()?;
        self.unsynced = 0;
        Ok(())
    }

    /// Release the file handle
    ///
    /// Idempotent. Unsynced appends are flushed first; the handle is released
    /// even if that flush fails.
    pub fn close(&mut self) -> Result<()> {
        let Some(file) = self.file.take() else {
            return Ok(());
        };

        if self.unsynced > 0 {
            self.unsynced = 0;
            file.sync_all()?;
        }

        info!(
            path = %self.path.display(),
            records = self.record_count,
            "Closed record store"
        );

        Ok(())
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn file_mut(&mut self) -> Result<&mut File> {
        self.file.as_mut().ok_or(StoreError::Closed)
    }

    /// Apply the trailing-data policy to a file length
    fn count_for_length(&self, len: u64) -> Result<u64> {
        let record_size = RECORD_SIZE as u64;
        let count = len / record_size;
        let trailing = len % record_size;

        if trailing == 0 {
            return Ok(count);
        }

        // A partial tail can only be skipped when nothing will be appended after it
        let may_ignore = self.mode == OpenMode::ReadOnly
            && self.trailing_data == TrailingDataPolicy::Ignore;

        if may_ignore {
            warn!(
                path = %self.path.display(),
                trailing_bytes = trailing,
                "Ignoring trailing partial record"
            );
            Ok(count)
        } else {
            Err(StoreError::Corruption(format!(
                "file length {} is not a multiple of {} ({} trailing bytes)",
                len, RECORD_SIZE, trailing
            )))
        }
    }
}

impl Drop for RecordStore {
    fn drop(&mut self) {
        if let Some(file) = self.file.take() {
            if self.unsynced > 0 {
                if let Err(e) = file.sync_all() {
                    warn!(path = %self.path.display(), "Sync on drop failed: {}", e);
                }
            }
        }
    }
}

/// Attach the record index to a decode failure
pub(super) fn with_record_index(err: StoreError, index: u64) -> StoreError {
    match err {
        StoreError::Corruption(msg) => StoreError::Corruption(format!("record {}: {}", index, msg)),
        other => other,
    }
}
