// File: crates/ratings-core/tests/formatter.rs
// Purpose: Comma grouping of numbers and raw field text.

use ratings_core::{format_number, group_thousands};

#[test]
fn groups_millions() {
    assert_eq!(format_number(1234567.0), "1,234,567");
}

#[test]
fn short_numbers_untouched() {
    assert_eq!(format_number(12.0), "12");
    assert_eq!(format_number(999.0), "999");
    assert_eq!(format_number(0.0), "0");
}

#[test]
fn negative_and_fractional() {
    assert_eq!(format_number(-1000.0), "-1,000");
    assert_eq!(format_number(1234.5), "1,234.5");
}

#[test]
fn raw_fields_pass_through_when_not_numeric() {
    assert_eq!(group_thousands("\"Pilot\""), "\"Pilot\"");
    assert_eq!(group_thousands(""), "");
    assert_eq!(group_thousands("2010"), "2,010");
    assert_eq!(group_thousands("12.53"), "12.53");
}

#[test]
fn digits_inside_text_are_grouped() {
    assert_eq!(group_thousands("Episode 1000"), "Episode 1,000");
    assert_eq!(group_thousands("\"Finale\" (2015)"), "\"Finale\" (2,015)");
    assert_eq!(group_thousands("1234.5678"), "1,234.5678");
}
