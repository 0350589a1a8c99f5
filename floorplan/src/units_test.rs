#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================
// Conversions
// =============================================================

#[test]
fn feet_round_trip_through_inches() {
    assert_eq!(to_internal(8.5, Unit::Foot), 102.0);
    assert_eq!(to_display(102.0, Unit::Foot), 8.5);
}

#[test]
fn meters_and_centimeters_agree() {
    let inches = to_internal(2.0, Unit::Meter);
    assert!(approx_eq(to_display(inches, Unit::Centimeter), 200.0));
}

#[test]
fn inch_is_identity() {
    assert_eq!(to_display(37.0, Unit::Inch), 37.0);
    assert_eq!(to_internal(37.0, Unit::Inch), 37.0);
}

#[test]
fn pixel_conversion_uses_fixed_density() {
    assert_eq!(inches_to_px(12.0), 12.0 * PIXELS_PER_INCH);
    assert_eq!(px_to_inches(inches_to_px(55.0)), 55.0);
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn feet_format_uses_feet_and_inches() {
    assert_eq!(format_length(102.0, Unit::Foot), "8' 6\"");
}

#[test]
fn feet_format_rounds_to_whole_inches() {
    assert_eq!(format_length(101.6, Unit::Foot), "8' 6\"");
}

#[test]
fn feet_format_carries_twelve_inches() {
    assert_eq!(format_length(143.7, Unit::Foot), "12' 0\"");
}

#[test]
fn feet_format_zero() {
    assert_eq!(format_length(0.0, Unit::Foot), "0' 0\"");
    assert_eq!(format_length(-0.2, Unit::Foot), "0' 0\"");
}

#[test]
fn feet_format_negative() {
    assert_eq!(format_length(-18.0, Unit::Foot), "-1' 6\"");
}

#[test]
fn inch_format_drops_trailing_zero() {
    assert_eq!(format_length(102.0, Unit::Inch), "102\"");
    assert_eq!(format_length(102.25, Unit::Inch), "102.3\"");
}

#[test]
fn metric_formats() {
    assert_eq!(format_length(102.0, Unit::Meter), "2.59 m");
    assert_eq!(format_length(102.0, Unit::Centimeter), "259.1 cm");
}

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_short_and_long_names() {
    assert_eq!("ft".parse::<Unit>(), Ok(Unit::Foot));
    assert_eq!("Feet".parse::<Unit>(), Ok(Unit::Foot));
    assert_eq!("in".parse::<Unit>(), Ok(Unit::Inch));
    assert_eq!("metre".parse::<Unit>(), Ok(Unit::Meter));
    assert_eq!(" CM ".parse::<Unit>(), Ok(Unit::Centimeter));
}

#[test]
fn parse_unknown_errors() {
    let err = "furlong".parse::<Unit>().unwrap_err();
    assert_eq!(err.to_string(), "unknown unit: furlong");
}

#[test]
fn unit_serde_names() {
    assert_eq!(serde_json::to_string(&Unit::Foot).unwrap(), "\"ft\"");
    assert_eq!(serde_json::from_str::<Unit>("\"cm\"").unwrap(), Unit::Centimeter);
}

#[test]
fn display_matches_label() {
    assert_eq!(Unit::Meter.to_string(), "m");
}
