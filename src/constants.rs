//! Application constants and configuration values

/// Default timing values the tool starts from
pub mod defaults {
    /// Default animation duration in milliseconds
    pub const DURATION_MS: f64 = 300.0;
    /// Default bounce factor
    pub const BOUNCE: f64 = 0.1;
}

/// Spring model constants
pub mod spring {
    use std::f64::consts::PI;

    /// One full oscillation, in radians
    pub const TWO_PI: f64 = 2.0 * PI;
    /// Numerator of the damping formulas
    pub const FOUR_PI: f64 = 4.0 * PI;
    /// Milliseconds per second
    pub const MS_PER_SECOND: f64 = 1000.0;
    /// Mass emitted for platforms that take one explicitly
    pub const MASS: u32 = 1;
}

/// Fallback easing curve constants
pub mod curve {
    /// Cubic-bezier control points (x1, y1, x2, y2) of the "snappy" fallback
    pub const CONTROL_POINTS: [f64; 4] = [0.33, 0.86, 0.2, 1.0];
}

/// Output formatting constants
pub mod format {
    /// Fractional digits for every rendered number
    pub const DECIMALS: usize = 2;
}
