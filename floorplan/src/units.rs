//! Real-world unit conversion.
//!
//! Lengths are carried internally in inches; the canvas works in pixels at a
//! fixed [`PIXELS_PER_INCH`]. Everything here is a pure function.

#[cfg(test)]
#[path = "units_test.rs"]
mod units_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{CM_PER_INCH, INCHES_PER_FOOT, PIXELS_PER_INCH};
use crate::error::UnitError;

/// Display unit for lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Unit {
    #[serde(rename = "in")]
    Inch,
    #[default]
    #[serde(rename = "ft")]
    Foot,
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "cm")]
    Centimeter,
}

impl Unit {
    /// Inches in one of this unit.
    #[must_use]
    pub fn inches_per_unit(self) -> f64 {
        match self {
            Self::Inch => 1.0,
            Self::Foot => INCHES_PER_FOOT,
            Self::Meter => 100.0 / CM_PER_INCH,
            Self::Centimeter => 1.0 / CM_PER_INCH,
        }
    }

    /// Short label as used on the wire.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Inch => "in",
            Self::Foot => "ft",
            Self::Meter => "m",
            Self::Centimeter => "cm",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Unit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in" | "inch" | "inches" => Ok(Self::Inch),
            "ft" | "foot" | "feet" => Ok(Self::Foot),
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(Self::Meter),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Ok(Self::Centimeter),
            other => Err(UnitError(other.to_string())),
        }
    }
}

/// Convert a length in inches to the given display unit.
#[must_use]
pub fn to_display(value_inches: f64, unit: Unit) -> f64 {
    value_inches / unit.inches_per_unit()
}

/// Convert a length in the given display unit back to inches.
#[must_use]
pub fn to_internal(display_value: f64, unit: Unit) -> f64 {
    display_value * unit.inches_per_unit()
}

/// Inches to canvas pixels.
#[must_use]
pub fn inches_to_px(inches: f64) -> f64 {
    inches * PIXELS_PER_INCH
}

/// Canvas pixels to inches.
#[must_use]
pub fn px_to_inches(px: f64) -> f64 {
    px / PIXELS_PER_INCH
}

/// Render a length for the properties readout.
///
/// Feet use the `8' 6"` form with whole inches, carrying into the next foot
/// when rounding reaches 12. Other units render as decimals with their suffix.
#[must_use]
pub fn format_length(value_inches: f64, unit: Unit) -> String {
    match unit {
        Unit::Foot => {
            let sign = if value_inches < 0.0 && value_inches.abs().round() > 0.0 { "-" } else { "" };
            let total = value_inches.abs().round();
            let feet = (total / INCHES_PER_FOOT).floor();
            let inches = total - feet * INCHES_PER_FOOT;
            format!("{sign}{feet:.0}' {inches:.0}\"")
        }
        Unit::Inch => {
            let rounded = (value_inches * 10.0).round() / 10.0;
            if rounded.fract() == 0.0 {
                format!("{rounded:.0}\"")
            } else {
                format!("{rounded:.1}\"")
            }
        }
        Unit::Meter => format!("{:.2} m", to_display(value_inches, unit)),
        Unit::Centimeter => format!("{:.1} cm", to_display(value_inches, unit)),
    }
}
