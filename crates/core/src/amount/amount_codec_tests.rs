//! Tests for the Korean-unit amount codec.

use super::amount_codec::*;
use proptest::prelude::*;

#[test]
fn parse_compound_eok_cheonman() {
    assert_eq!(parse_amount("5억 8천만"), 580_000_000);
    assert_eq!(parse_amount("5억8천만"), 580_000_000);
}

#[test]
fn parse_bare_cheon_after_eok_means_cheonman() {
    assert_eq!(parse_amount("5억 8천"), 580_000_000);
}

#[test]
fn parse_single_units() {
    assert_eq!(parse_amount("1만"), 10_000);
    assert_eq!(parse_amount("3억"), 300_000_000);
    assert_eq!(parse_amount("2천만"), 20_000_000);
    assert_eq!(parse_amount("1조"), 1_000_000_000_000);
}

#[test]
fn parse_jo_with_eok() {
    assert_eq!(parse_amount("1조 5000억"), 1_500_000_000_000);
}

#[test]
fn parse_fractional_unit_coefficients() {
    assert_eq!(parse_amount("1.5억"), 150_000_000);
    assert_eq!(parse_amount("2.5만"), 25_000);
}

#[test]
fn parse_man_with_bare_remainder() {
    assert_eq!(parse_amount("1만 2000"), 12_000);
    assert_eq!(parse_amount("3만5000"), 35_000);
}

#[test]
fn parse_compound_eok_man() {
    assert_eq!(parse_amount("1억 2345만 6789"), 123_456_789);
}

#[test]
fn parse_strips_thousands_separators() {
    assert_eq!(parse_amount("100,000"), 100_000);
    assert_eq!(parse_amount("1,234,567"), 1_234_567);
}

#[test]
fn parse_empty_and_garbage_yield_zero() {
    assert_eq!(parse_amount(""), 0);
    assert_eq!(parse_amount("   "), 0);
    assert_eq!(parse_amount("abc"), 0);
    assert_eq!(parse_amount("억"), 0);
}

#[test]
fn parse_billion_shorthand_below_threshold() {
    assert_eq!(parse_amount("5.8"), 580_000_000);
    assert_eq!(parse_amount("454.2"), 45_420_000_000);
    assert_eq!(parse_amount("5"), 500_000_000);
    assert_eq!(parse_amount("0.5"), 50_000_000);
}

#[test]
fn parse_literal_at_or_above_threshold() {
    assert_eq!(parse_amount("10000"), 10_000);
    assert_eq!(parse_amount("12345"), 12_345);
    assert_eq!(parse_amount("12345.9"), 12_345);
}

#[test]
fn format_eok_one_decimal() {
    assert_eq!(format_amount(580_000_000), "5.8억");
    assert_eq!(format_amount(123_456_789), "1.2억");
}

#[test]
fn format_eok_whole_quotient_drops_decimal() {
    assert_eq!(format_amount(100_000_000), "1억");
    assert_eq!(format_amount(700_000_000), "7억");
}

#[test]
fn format_man_floors_remainder() {
    assert_eq!(format_amount(70_000_000), "7000만");
    assert_eq!(format_amount(10_000), "1만");
    assert_eq!(format_amount(12_345), "1만");
}

#[test]
fn format_small_values_comma_grouped() {
    assert_eq!(format_amount(0), "0");
    assert_eq!(format_amount(999), "999");
    assert_eq!(format_amount(9_999), "9,999");
}

#[test]
fn group_thousands_handles_signs_and_lengths() {
    assert_eq!(group_thousands(1_234_567), "1,234,567");
    assert_eq!(group_thousands(-12_345), "-12,345");
    assert_eq!(group_thousands(7), "7");
}

#[test]
fn round_trip_canonical_forms() {
    assert_eq!(parse_amount(&format_amount(580_000_000)), 580_000_000);
    assert_eq!(parse_amount(&format_amount(70_000_000)), 70_000_000);
    assert_eq!(parse_amount(&format_amount(300_000_000)), 300_000_000);
}

proptest! {
    // Multiples of 천만 survive the compact 억 form exactly.
    #[test]
    fn round_trip_cheonman_multiples(n in 10i64..=99_999) {
        let value = n * 10_000_000;
        prop_assert_eq!(parse_amount(&format_amount(value)), value);
    }

    // Multiples of 만 below 1억 survive the 만 form exactly.
    #[test]
    fn round_trip_man_multiples(n in 1i64..10_000) {
        let value = n * 10_000;
        prop_assert_eq!(parse_amount(&format_amount(value)), value);
    }

    // The compact form never panics and always parses back non-negative.
    #[test]
    fn format_parse_total(value in 0i64..=10_000_000_000_000) {
        let formatted = format_amount(value);
        prop_assert!(parse_amount(&formatted) >= 0);
    }
}
