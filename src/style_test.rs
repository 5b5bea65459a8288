#![allow(clippy::float_cmp)]

use super::*;

// --- format ---

#[test]
fn percent_whole_number_has_no_fraction() {
    assert_eq!(format_percent(50.0), "50%");
    assert_eq!(format_percent(100.0), "100%");
}

#[test]
fn percent_keeps_fraction() {
    assert_eq!(format_percent(12.5), "12.5%");
}

#[test]
fn negative_zero_formats_as_zero() {
    assert_eq!(format_percent(-0.0), "0%");
    assert_eq!(format_px(-0.0), "0px");
}

#[test]
fn px_formats_size() {
    assert_eq!(format_px(18.0), "18px");
    assert_eq!(format_px(15.5), "15.5px");
}

// --- parse ---

#[test]
fn parse_px_reads_leading_number() {
    assert_eq!(parse_px("16px"), Some(16.0));
    assert_eq!(parse_px("14.5px"), Some(14.5));
}

#[test]
fn parse_px_skips_leading_whitespace() {
    assert_eq!(parse_px("  20px"), Some(20.0));
}

#[test]
fn parse_px_without_unit() {
    assert_eq!(parse_px("18"), Some(18.0));
}

#[test]
fn parse_px_stops_at_trailing_garbage() {
    assert_eq!(parse_px("1.5.2px"), Some(1.5));
    assert_eq!(parse_px("12e"), Some(12.0));
}

#[test]
fn parse_px_rejects_non_numeric() {
    assert_eq!(parse_px(""), None);
    assert_eq!(parse_px("px"), None);
    assert_eq!(parse_px("medium"), None);
}
