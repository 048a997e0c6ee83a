//! Spring parameters from animation duration and bounce.
//!
//! [`spring::convert`] turns a duration in milliseconds and a bounce factor
//! into stiffness and damping, [`codegen::generate`] writes those as code for
//! a target platform, and [`curve::fallback`] gives a fixed cubic-bezier
//! stand-in for renderers without spring physics. Everything else in the
//! crate is the command line around them.

pub mod app;
pub mod codegen;
pub mod config;
pub mod constants;
pub mod curve;
pub mod error;
pub mod format;
pub mod report;
pub mod spring;
pub mod state;

pub use codegen::{Platform, generate, generate_all};
pub use curve::{EasingCurveSpec, fallback};
pub use error::SpringError;
pub use spring::{SpringCoefficients, TimingInput, convert};
