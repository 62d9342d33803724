//! Tests for fixed-width field helpers
//!
//! These tests verify:
//! - Padding short strings with spaces
//! - Truncating long strings (silent data loss)
//! - Surrogate pairs are never split
//! - Trimming of space and NUL padding

use productstore::codec::{pad_or_truncate, trim_field, width_of};

fn units(s: &str) -> Vec<u16> {
    s.encode_utf16().collect()
}

// =============================================================================
// pad_or_truncate
// =============================================================================

#[test]
fn test_pad_short_string() {
    let padded = pad_or_truncate("abc", 6);

    assert_eq!(padded.len(), 6);
    assert_eq!(padded, units("abc   "));
}

#[test]
fn test_exact_width_unchanged() {
    assert_eq!(pad_or_truncate("ABC123", 6), units("ABC123"));
}

#[test]
fn test_empty_string_is_all_spaces() {
    let padded = pad_or_truncate("", 35);

    assert_eq!(padded.len(), 35);
    assert!(padded.iter().all(|&u| u == 0x0020));
}

#[test]
fn test_truncate_long_string_loses_data() {
    let long = "x".repeat(40);
    let truncated = pad_or_truncate(&long, 35);

    // Data-loss hazard: the last 5 characters are gone without any error
    assert_eq!(truncated.len(), 35);
    assert_eq!(truncated, units(&"x".repeat(35)));
}

#[test]
fn test_zero_width() {
    assert!(pad_or_truncate("anything", 0).is_empty());
}

#[test]
fn test_non_ascii_bmp_characters() {
    let padded = pad_or_truncate("café", 6);

    assert_eq!(padded, units("café  "));
}

#[test]
fn test_surrogate_pair_not_split() {
    // "ab" + U+1F600 needs 4 code units; width 3 cannot hold the pair
    let s = "ab\u{1F600}";
    assert_eq!(width_of(s), 4);

    let padded = pad_or_truncate(s, 3);
    assert_eq!(padded, units("ab "));
    assert!(String::from_utf16(&padded).is_ok());
}

#[test]
fn test_surrogate_pair_that_fits() {
    let s = "ab\u{1F600}";
    let padded = pad_or_truncate(s, 5);

    assert_eq!(String::from_utf16(&padded).unwrap(), "ab\u{1F600} ");
}

// =============================================================================
// width_of / trim_field
// =============================================================================

#[test]
fn test_width_counts_utf16_units() {
    assert_eq!(width_of("ABC123"), 6);
    assert_eq!(width_of("é"), 1);
    assert_eq!(width_of("\u{1F600}"), 2);
}

#[test]
fn test_trim_spaces() {
    assert_eq!(trim_field("  Widget   "), "Widget");
}

#[test]
fn test_trim_nul_padding() {
    assert_eq!(trim_field("Widget\0\0\0\0"), "Widget");
}

#[test]
fn test_trim_keeps_inner_whitespace() {
    assert_eq!(trim_field("Gadget Pro   "), "Gadget Pro");
}
