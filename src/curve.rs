//! Cubic-bezier fallback for renderers without spring physics

use crate::constants::curve::CONTROL_POINTS;
use crate::constants::spring::MS_PER_SECOND;
use crate::format::{fixed, is_valid_duration};
use serde::Serialize;
use std::fmt;

/// A fixed easing curve played over a duration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EasingCurveSpec {
    pub duration_seconds: f64,
    /// (x1, y1, x2, y2)
    pub control_points: [f64; 4],
}

impl fmt::Display for EasingCurveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x1, y1, x2, y2] = self.control_points;
        write!(
            f,
            "{}s cubic-bezier({}, {}, {}, {})",
            fixed(self.duration_seconds),
            fixed(x1),
            fixed(y1),
            fixed(x2),
            fixed(y2)
        )
    }
}

/// Fallback curve for `duration_ms`.
///
/// The curve shape is the same for every spring; bounce is not taken into
/// account. Durations that are zero, negative or not finite give an instant
/// (zero-length) curve instead of an error.
pub fn fallback(duration_ms: f64) -> EasingCurveSpec {
    let duration_seconds = if is_valid_duration(duration_ms) {
        duration_ms / MS_PER_SECOND
    } else {
        0.0
    };

    EasingCurveSpec {
        duration_seconds,
        control_points: CONTROL_POINTS,
    }
}
