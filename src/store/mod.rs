//! Record Store Module
//!
//! Owns the data file and the random-access discipline over it.
//!
//! ## Responsibilities
//! - Open (creating if needed) and close the single data file
//! - Append encoded records at end-of-file
//! - Derive the record count from file length (never persisted)
//! - Lazy, ordered full scans and name search on top of them
//!
//! ## File Layout
//! ```text
//! offset 0          240         480                 n*240
//! ┌─────────────┬─────────────┬─────────┬─────────────┐
//! │ Record 0    │ Record 1    │   ...   │ Record n-1  │
//! └─────────────┴─────────────┴─────────┴─────────────┘
//! ```
//! No header, footer, magic or version tag. A length that is not a multiple
//! of the record size means a torn or foreign write.

mod iterator;
mod record_store;
mod search;

pub use iterator::RecordIter;
pub use record_store::RecordStore;
pub use search::{filter_by_name, matches_name, SearchHit};
