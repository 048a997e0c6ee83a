//! Text and JSON rendering of results for the terminal

use crate::codegen::Platform;
use crate::curve::EasingCurveSpec;
use crate::error::AppResult;
use crate::format::{display_value, serialize_number};
use crate::spring::{SpringCoefficients, TimingInput};
use crate::state::Preview;
use serde::Serialize;

/// A conversion and its derived values, as written by `--json`
#[derive(Serialize)]
pub struct ConversionReport {
    pub input: TimingInput,
    #[serde(serialize_with = "serialize_number")]
    pub stiffness: f64,
    #[serde(serialize_with = "serialize_number")]
    pub damping: f64,
    #[serde(serialize_with = "serialize_number")]
    pub damping_ratio: f64,
}

impl ConversionReport {
    pub fn new(input: TimingInput, coeffs: &SpringCoefficients) -> Self {
        Self {
            input,
            stiffness: coeffs.stiffness,
            damping: coeffs.damping,
            damping_ratio: coeffs.damping_ratio(),
        }
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Labelled multi-line summary of a conversion
pub fn render_conversion(input: &TimingInput, coeffs: &SpringCoefficients) -> String {
    format!(
        "Duration: {} ms, Bounce: {}\nStiffness: {}\nDamping: {}\nDamping ratio: {}",
        display_value(input.duration_ms),
        display_value(input.bounce),
        display_value(coeffs.stiffness),
        display_value(coeffs.damping),
        display_value(coeffs.damping_ratio())
    )
}

/// Snippets separated by a titled rule per platform
pub fn render_snippets(snippets: &[(Platform, String)]) -> String {
    snippets
        .iter()
        .map(|(platform, code)| format!("── {} ──\n{}", platform.label(), code))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_curve(spec: &EasingCurveSpec) -> String {
    format!("Fallback curve: {}", spec)
}

/// One-line description of what the session would preview
pub fn render_preview(preview: &Preview) -> String {
    match preview {
        Preview::Spring(coeffs) => format!(
            "Spring preview: Stiffness: {}, Damping: {}",
            display_value(coeffs.stiffness),
            display_value(coeffs.damping)
        ),
        Preview::Curve(spec) => render_curve(spec),
        Preview::Unavailable => "No spring parameters yet. Convert first.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::generate;
    use crate::curve::fallback;
    use crate::spring::convert;

    #[test]
    fn test_render_conversion() {
        let input = TimingInput::new(300.0, -0.5);
        let coeffs = input.convert().unwrap();
        let text = render_conversion(&input, &coeffs);
        assert!(text.contains("Stiffness: 438.65"), "{}", text);
        assert!(text.contains("Damping: 83.78"), "{}", text);
        assert!(text.contains("Duration: 300.00 ms, Bounce: -0.50"));
    }

    #[test]
    fn test_render_conversion_shows_infinity() {
        let input = TimingInput::new(300.0, -1.0);
        let coeffs = input.convert().unwrap();
        assert!(render_conversion(&input, &coeffs).contains("Damping: ∞"));
    }

    #[test]
    fn test_render_snippets_titles() {
        let coeffs = convert(300.0, 0.1).unwrap();
        let snippets = vec![
            (Platform::Tux, generate(Platform::Tux, Some(&coeffs), 300.0)),
            (Platform::Web, generate(Platform::Web, Some(&coeffs), 300.0)),
        ];
        let text = render_snippets(&snippets);
        assert!(text.starts_with("── Tux ──\n"));
        assert!(text.contains("\n\n── Web ──\n"));
    }

    #[test]
    fn test_render_preview_variants() {
        let coeffs = convert(300.0, 0.1).unwrap();
        assert!(render_preview(&Preview::Spring(coeffs)).contains("Stiffness: 438.65"));
        assert!(render_preview(&Preview::Curve(fallback(300.0))).contains("cubic-bezier"));
        assert!(render_preview(&Preview::Unavailable).contains("Convert first"));
    }

    #[test]
    fn test_json_report() {
        let input = TimingInput::default();
        let coeffs = input.convert().unwrap();
        let json = ConversionReport::new(input, &coeffs).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"]["duration_ms"], 300.0);
        assert!((value["damping_ratio"].as_f64().unwrap() - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_json_report_keeps_infinite_damping() {
        let input = TimingInput::new(300.0, -1.0);
        let coeffs = input.convert().unwrap();
        let json = ConversionReport::new(input, &coeffs).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["damping"], "inf");
        assert_eq!(value["damping_ratio"], "inf");
        assert!((value["stiffness"].as_f64().unwrap() - 438.649).abs() < 1e-3);
    }
}
