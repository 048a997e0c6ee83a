//! Platform code snippets from spring coefficients
//!
//! Each [`Platform`] maps to one formatting function. Numbers are always
//! written with two fractional digits so that snippets agree with what the
//! report shows.

use crate::constants::spring::MASS;
use crate::format::fixed;
use crate::spring::SpringCoefficients;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Animation runtime a snippet is generated for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Proprietary curve DSL
    Tux,
    /// UIKit spring timing parameters
    Ios,
    /// AndroidX dynamic-animation SpringForce
    Android,
    /// Framer Motion style transition
    Web,
}

impl Platform {
    /// Every generator target, in declaration order
    pub const ALL: [Platform; 4] = [Platform::Tux, Platform::Ios, Platform::Android, Platform::Web];

    /// Targets offered in the interactive session
    pub const SURFACED: [Platform; 2] = [Platform::Tux, Platform::Web];

    /// Short tag used on the command line
    pub fn tag(&self) -> &'static str {
        match self {
            Platform::Tux => "tux",
            Platform::Ios => "ios",
            Platform::Android => "android",
            Platform::Web => "web",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Platform::Tux => "Tux",
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::Web => "Web",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Generate a snippet for `platform`.
///
/// Returns an empty string when no coefficients are available yet; that is the
/// normal state before a first successful conversion, not an error.
pub fn generate(
    platform: Platform,
    coefficients: Option<&SpringCoefficients>,
    duration_ms: f64,
) -> String {
    let Some(coeffs) = coefficients else {
        return String::new();
    };

    let header = format!("// {} spring, {} ms", platform.label(), fixed(duration_ms));
    let body = match platform {
        Platform::Tux => tux(coeffs),
        Platform::Ios => ios(coeffs),
        Platform::Android => android(coeffs),
        Platform::Web => web(coeffs),
    };

    format!("{}\n{}", header, body)
}

/// Generate a snippet for every platform
pub fn generate_all(
    coefficients: Option<&SpringCoefficients>,
    duration_ms: f64,
) -> Vec<(Platform, String)> {
    Platform::ALL
        .iter()
        .map(|&platform| (platform, generate(platform, coefficients, duration_ms)))
        .collect()
}

fn tux(coeffs: &SpringCoefficients) -> String {
    format!(
        "Spring(stiffness: {}, damping: {})",
        fixed(coeffs.stiffness),
        fixed(coeffs.damping)
    )
}

fn ios(coeffs: &SpringCoefficients) -> String {
    format!(
        "UISpringTimingParameters(mass: {}, stiffness: {}, damping: {}, \
         initialVelocity: CGVector(dx: 0, dy: 0))",
        MASS,
        fixed(coeffs.stiffness),
        fixed(coeffs.damping)
    )
}

// SpringForce takes a ratio, not an absolute damping coefficient
fn android(coeffs: &SpringCoefficients) -> String {
    format!(
        "SpringForce()\n    .setStiffness({}f)\n    .setDampingRatio({}f)",
        fixed(coeffs.stiffness),
        fixed(coeffs.damping_ratio())
    )
}

fn web(coeffs: &SpringCoefficients) -> String {
    format!(
        "transition={{{{ type: \"spring\", stiffness: {}, damping: {} }}}}",
        fixed(coeffs.stiffness),
        fixed(coeffs.damping)
    )
}
