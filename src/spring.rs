//! Duration and bounce to spring stiffness and damping

use crate::constants::spring::{FOUR_PI, MS_PER_SECOND, TWO_PI};
use crate::constants::defaults;
use crate::error::SpringError;
use crate::format::{self, is_valid_duration, serialize_number};
use serde::Serialize;

/// Perceptual timing parameters as an author enters them
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimingInput {
    /// Animation duration in milliseconds
    pub duration_ms: f64,
    /// Bounce factor, conventionally in `[-1, 1]`
    pub bounce: f64,
}

impl TimingInput {
    pub fn new(duration_ms: f64, bounce: f64) -> Self {
        Self { duration_ms, bounce }
    }

    /// Convert this input into spring coefficients
    pub fn convert(&self) -> Result<SpringCoefficients, SpringError> {
        convert(self.duration_ms, self.bounce)
    }
}

impl Default for TimingInput {
    fn default() -> Self {
        Self::new(defaults::DURATION_MS, defaults::BOUNCE)
    }
}

/// Coefficients of a unit-mass damped harmonic spring
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpringCoefficients {
    #[serde(serialize_with = "serialize_number")]
    pub stiffness: f64,
    #[serde(serialize_with = "serialize_number")]
    pub damping: f64,
}

impl SpringCoefficients {
    /// Damping relative to critical damping, `damping / (2 * sqrt(stiffness))`
    ///
    /// Values below 1 oscillate, above 1 are overdamped.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * self.stiffness.sqrt())
    }

    /// Short `stiffness: S, damping: D` text for pasting elsewhere
    pub fn copy_text(&self) -> String {
        format!(
            "stiffness: {}, damping: {}",
            format::fixed(self.stiffness),
            format::fixed(self.damping)
        )
    }
}

/// Convert a duration in milliseconds and a bounce factor into spring coefficients.
///
/// Stiffness depends only on the duration. Damping branches on the sign of
/// `bounce` and is never clamped: as `bounce` approaches -1 it grows without
/// bound, which callers must be prepared to display.
///
/// Durations so small that the stiffness overflows (around `1e-150` ms and
/// below) are rejected as [`SpringError::InvalidDuration`] like zero is.
pub fn convert(duration_ms: f64, bounce: f64) -> Result<SpringCoefficients, SpringError> {
    if !is_valid_duration(duration_ms) {
        log::debug!("Rejected duration {}", duration_ms);
        return Err(SpringError::InvalidDuration(duration_ms));
    }
    if !bounce.is_finite() {
        log::debug!("Rejected bounce {}", bounce);
        return Err(SpringError::InvalidBounce(bounce));
    }

    let seconds = duration_ms / MS_PER_SECOND;
    let stiffness = (TWO_PI / seconds).powi(2);
    if !stiffness.is_finite() {
        log::debug!("Duration {} ms overflows stiffness", duration_ms);
        return Err(SpringError::InvalidDuration(duration_ms));
    }
    let damping = if bounce >= 0.0 {
        ((1.0 - bounce) * FOUR_PI) / seconds
    } else {
        FOUR_PI / (seconds * (1.0 + bounce))
    };

    log::trace!(
        "convert({} ms, bounce {}) -> stiffness {}, damping {}",
        duration_ms,
        bounce,
        stiffness,
        damping
    );

    Ok(SpringCoefficients { stiffness, damping })
}
