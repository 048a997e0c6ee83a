//! Interactive session state
//!
//! The session owns the values the user is working with and hands them to the
//! pure core functions explicitly; nothing here is shared or global.

use crate::codegen::{self, Platform};
use crate::curve::{self, EasingCurveSpec};
use crate::error::SpringError;
use crate::spring::{SpringCoefficients, TimingInput};

/// What the preview area should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Preview {
    Spring(SpringCoefficients),
    Curve(EasingCurveSpec),
    /// No successful conversion yet
    Unavailable,
}

/// Values held between interactions
#[derive(Debug, Clone)]
pub struct Session {
    /// Pending input, edited by the user
    pub input: TimingInput,
    /// Last successful conversion and the input it came from
    converted: Option<(TimingInput, SpringCoefficients)>,
    pub fallback_preview: bool,
}

impl Session {
    /// Start from the default timing, already converted
    pub fn new() -> Self {
        Self::with_input(TimingInput::default())
    }

    /// Start from the given timing; coefficients stay empty if it is invalid
    pub fn with_input(input: TimingInput) -> Self {
        Self {
            input,
            converted: input.convert().ok().map(|coeffs| (input, coeffs)),
            fallback_preview: false,
        }
    }

    /// Edit the pending duration; takes effect on the next [`Session::convert`]
    pub fn set_duration(&mut self, duration_ms: f64) {
        self.input.duration_ms = duration_ms;
    }

    /// Edit the pending bounce; takes effect on the next [`Session::convert`]
    pub fn set_bounce(&mut self, bounce: f64) {
        self.input.bounce = bounce;
    }

    pub fn coefficients(&self) -> Option<SpringCoefficients> {
        self.converted.map(|(_, coeffs)| coeffs)
    }

    /// Input the current coefficients were derived from
    pub fn converted_input(&self) -> Option<TimingInput> {
        self.converted.map(|(input, _)| input)
    }

    /// Recompute coefficients from the pending input.
    ///
    /// On failure the stored coefficients are cleared so no stale snippet can
    /// be generated for an input the user has since changed.
    pub fn convert(&mut self) -> Result<SpringCoefficients, SpringError> {
        match self.input.convert() {
            Ok(coeffs) => {
                self.converted = Some((self.input, coeffs));
                Ok(coeffs)
            }
            Err(e) => {
                self.converted = None;
                Err(e)
            }
        }
    }

    /// Restore default timing and reconvert
    pub fn reset_to_default(&mut self) {
        *self = Self {
            fallback_preview: self.fallback_preview,
            ..Self::new()
        };
    }

    /// Switch between spring and fallback curve preview
    pub fn toggle_fallback(&mut self) -> bool {
        self.fallback_preview = !self.fallback_preview;
        self.fallback_preview
    }

    /// Preview built from the last conversion, never from pending edits
    pub fn preview(&self) -> Preview {
        match (self.fallback_preview, self.converted) {
            (true, Some((input, _))) => Preview::Curve(curve::fallback(input.duration_ms)),
            // The fallback curve needs no coefficients, only a duration
            (true, None) => Preview::Curve(curve::fallback(self.input.duration_ms)),
            (false, Some((_, coeffs))) => Preview::Spring(coeffs),
            (false, None) => Preview::Unavailable,
        }
    }

    /// Snippet for `platform` from the last conversion
    pub fn snippet(&self, platform: Platform) -> String {
        match &self.converted {
            Some((input, coeffs)) => codegen::generate(platform, Some(coeffs), input.duration_ms),
            None => codegen::generate(platform, None, self.input.duration_ms),
        }
    }

    pub fn copy_text(&self) -> Option<String> {
        self.coefficients().map(|c| c.copy_text())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
