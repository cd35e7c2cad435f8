#![allow(clippy::unwrap_used)]

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_short_string() {
    assert_eq!(truncate("Food", 10), "Food");
}

#[test]
fn test_truncate_exact_length() {
    assert_eq!(truncate("Other", 5), "Other");
}

#[test]
fn test_truncate_long_string() {
    assert_eq!(truncate("Transportation", 8), "Transpo…");
}

#[test]
fn test_truncate_empty() {
    assert_eq!(truncate("", 5), "");
}

#[test]
fn test_truncate_zero_max() {
    assert_eq!(truncate("Housing", 0), "");
}

#[test]
fn test_truncate_one_char() {
    assert_eq!(truncate("Housing", 1), "…");
}

#[test]
fn test_truncate_unicode() {
    assert_eq!(truncate("épargne été", 7), "épargn…");
}

// ── format_pct ────────────────────────────────────────────────

#[test]
fn test_format_pct_one_decimal() {
    assert_eq!(format_pct(38.125), "38.1%");
}

#[test]
fn test_format_pct_rounds() {
    assert_eq!(format_pct(9.96), "10.0%");
}

#[test]
fn test_format_pct_zero() {
    assert_eq!(format_pct(0.0), "0.0%");
}

#[test]
fn test_format_pct_hundred() {
    assert_eq!(format_pct(100.0), "100.0%");
}
