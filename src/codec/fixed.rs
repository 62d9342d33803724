//! Fixed-width text fields
//!
//! Helpers shared by the encoder and decoder for turning strings into
//! exactly-sized runs of UTF-16 code units and back.

use bytes::{Buf, BufMut};

use crate::error::{Result, StoreError};

use super::PAD_UNIT;

/// Width of a string in UTF-16 code units (the unit the file is measured in)
pub fn width_of(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Pad or truncate `s` to exactly `width` UTF-16 code units
///
/// - Shorter input is right-padded with spaces
/// - Longer input is silently truncated (legacy behaviour; may lose data)
/// - A surrogate pair that would straddle the boundary is dropped whole
pub fn pad_or_truncate(s: &str, width: usize) -> Vec<u16> {
    let mut units = Vec::with_capacity(width);
    let mut scratch = [0u16; 2];

    for c in s.chars() {
        let encoded = c.encode_utf16(&mut scratch);
        if units.len() + encoded.len() > width {
            break;
        }
        units.extend_from_slice(encoded);
    }

    units.resize(width, PAD_UNIT);
    units
}

/// Trim a decoded field to its logical value
///
/// Strips leading/trailing characters at or below U+0020, which covers both
/// space padding and the NUL padding written by older producers.
pub fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c <= ' ')
}

/// Write `s` as exactly `width` big-endian code units
pub(crate) fn put_fixed<B: BufMut>(buf: &mut B, s: &str, width: usize) {
    for unit in pad_or_truncate(s, width) {
        buf.put_u16(unit);
    }
}

/// Read `width` big-endian code units and return the trimmed string
///
/// Caller guarantees `buf` holds at least `width * 2` bytes.
pub(crate) fn get_fixed<B: Buf>(buf: &mut B, width: usize, field: &str) -> Result<String> {
    let units: Vec<u16> = (0..width).map(|_| buf.get_u16()).collect();

    let text = String::from_utf16(&units).map_err(|_| {
        StoreError::Corruption(format!("{} field is not valid UTF-16", field))
    })?;

    Ok(trim_field(&text).to_string())
}
