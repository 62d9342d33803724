//! Record encoding/decoding
//!
//! Pure functions; no file handle involved.

use bytes::{Buf, BufMut};

use crate::error::{Result, StoreError};
use crate::product::Product;

use super::fixed::{get_fixed, put_fixed};
use super::{DESCRIPTION_WIDTH, ID_WIDTH, NAME_WIDTH, RECORD_SIZE};

/// Encode a product to exactly `RECORD_SIZE` bytes
///
/// Format: id (12) + name (70) + description (150) + cost (8, f64 BE).
/// Over-width text is truncated without error.
pub fn encode(product: &Product) -> [u8; RECORD_SIZE] {
    let mut record = [0u8; RECORD_SIZE];

    {
        let mut cursor = &mut record[..];
        put_fixed(&mut cursor, product.id(), ID_WIDTH);
        put_fixed(&mut cursor, product.name(), NAME_WIDTH);
        put_fixed(&mut cursor, product.description(), DESCRIPTION_WIDTH);
        cursor.put_f64(product.cost());
        debug_assert!(cursor.is_empty());
    }

    record
}

/// Decode a product from exactly `RECORD_SIZE` bytes
///
/// Text fields come back trimmed; the cost is returned exactly as stored.
pub fn decode(bytes: &[u8]) -> Result<Product> {
    if bytes.len() != RECORD_SIZE {
        return Err(StoreError::Corruption(format!(
            "record must be {} bytes, got {}",
            RECORD_SIZE,
            bytes.len()
        )));
    }

    let mut cursor = bytes;
    let id = get_fixed(&mut cursor, ID_WIDTH, "id")?;
    let name = get_fixed(&mut cursor, NAME_WIDTH, "name")?;
    let description = get_fixed(&mut cursor, DESCRIPTION_WIDTH, "description")?;
    let cost = cursor.get_f64();

    Ok(Product::from_record(id, name, description, cost))
}

/// Byte offset of record `index`
pub fn record_offset(index: u64) -> u64 {
    index * RECORD_SIZE as u64
}
