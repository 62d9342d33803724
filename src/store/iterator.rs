//! Record Iterator
//!
//! Sequential, seek-per-record iteration over a record file.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

use crate::codec::{self, record_offset, RECORD_SIZE};
use crate::error::{Result, StoreError};
use crate::product::Product;

use super::record_store::with_record_index;

/// Iterator over records `0..count` in append order
///
/// Fused after the first error: once an item is `Err`, iteration ends.
#[derive(Debug)]
pub struct RecordIter<'a> {
    file: &'a mut File,
    /// Index of the next record to read
    next_index: u64,
    /// Stop before this index (count captured when the scan started)
    end_index: u64,
    failed: bool,
}

impl<'a> RecordIter<'a> {
    pub(super) fn new(file: &'a mut File, count: u64) -> Self {
        Self {
            file,
            next_index: 0,
            end_index: count,
            failed: false,
        }
    }

    fn read_record(&mut self, index: u64) -> Result<Product> {
        self.file.seek(SeekFrom::Start(record_offset(index)))?;

        let mut buf = [0u8; RECORD_SIZE];
        self.file.read_exact(&mut buf).map_err(StoreError::Io)?;

        codec::decode(&buf).map_err(|e| with_record_index(e, index))
    }
}

impl<'a> Iterator for RecordIter<'a> {
    type Item = Result<Product>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next_index >= self.end_index {
            return None;
        }

        let index = self.next_index;
        self.next_index += 1;

        let result = self.read_record(index);
        if result.is_err() {
            self.failed = true;
        }

        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            return (0, Some(0));
        }
        let remaining = (self.end_index - self.next_index) as usize;
        (0, Some(remaining))
    }
}
