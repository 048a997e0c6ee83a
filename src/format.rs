//! Numeric formatting and input guards shared by the core modules

use crate::constants::format::DECIMALS;
use serde::Serializer;

/// Render a value as fixed-point with two fractional digits, no grouping
pub fn fixed(value: f64) -> String {
    format!("{:.*}", DECIMALS, value)
}

/// Render a value for human display
///
/// Infinities show as `∞` / `-∞`; everything else goes through [`fixed`].
/// Only reports use this, generated code always uses [`fixed`].
pub fn display_value(value: f64) -> String {
    if value == f64::INFINITY {
        "∞".to_string()
    } else if value == f64::NEG_INFINITY {
        "-∞".to_string()
    } else if value.is_nan() {
        "NaN".to_string()
    } else {
        fixed(value)
    }
}

/// Serialize finite values as numbers and everything else as a string.
///
/// serde_json writes non-finite floats as `null`, and `null` means "no
/// coefficients yet" to readers of the JSON output.
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_str(&value.to_string())
    }
}

/// A duration the spring transform can divide by
pub fn is_valid_duration(duration_ms: f64) -> bool {
    duration_ms.is_finite() && duration_ms > 0.0
}
