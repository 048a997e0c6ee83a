//! Configuration parsing and validation

use crate::codegen::Platform;
use crate::constants::defaults;
use crate::error::{AppError, AppResult};
use crate::spring::TimingInput;
use clap::{Parser, Subcommand};
use std::io::IsTerminal;

/// Command line arguments for the springcheck application
#[derive(Parser)]
#[command(name = "springcheck")]
#[command(about = "Convert animation duration and bounce into spring parameters")]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert duration and bounce into stiffness and damping
    Convert(ConvertArgs),
    /// Generate platform code snippets
    Generate(GenerateArgs),
    /// Describe the cubic-bezier fallback curve
    Fallback(FallbackArgs),
    /// Edit values and generate snippets from a menu
    Interactive(InteractiveArgs),
}

/// Timing flags shared by every subcommand that converts
#[derive(clap::Args, Clone, Copy)]
pub struct TimingArgs {
    /// Animation duration in milliseconds (e.g., 300)
    #[arg(long, default_value_t = defaults::DURATION_MS)]
    pub duration: f64,

    /// Bounce factor, usually between -1 and 1 (e.g., 0.1)
    #[arg(long, default_value_t = defaults::BOUNCE, allow_negative_numbers = true)]
    pub bounce: f64,
}

#[derive(Parser)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub timing: TimingArgs,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Output only "stiffness: S, damping: D"
    #[arg(long)]
    pub quiet: bool,
}

#[derive(Parser)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub timing: TimingArgs,

    /// Target platform (repeatable; prompts when omitted on a terminal)
    #[arg(long, value_enum)]
    pub platform: Vec<Platform>,

    /// Generate for every platform
    #[arg(long, conflicts_with = "platform")]
    pub all: bool,
}

#[derive(Parser)]
pub struct FallbackArgs {
    /// Animation duration in milliseconds (e.g., 300)
    #[arg(long, default_value_t = defaults::DURATION_MS, allow_negative_numbers = true)]
    pub duration: f64,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub timing: TimingArgs,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Report,
    Quiet,
    Json,
}

/// Which platforms a generate run covers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlatformSelection {
    Fixed(Vec<Platform>),
    /// Ask the user; only valid on a terminal
    Prompt,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub input: TimingInput,
    pub output: OutputMode,
    pub platforms: PlatformSelection,
}

impl Config {
    /// Create configuration from convert arguments
    pub fn from_convert_args(args: &ConvertArgs) -> AppResult<Self> {
        let output = if args.json {
            OutputMode::Json
        } else if args.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Report
        };

        Ok(Config {
            input: timing_input(&args.timing)?,
            output,
            platforms: PlatformSelection::Fixed(Vec::new()),
        })
    }

    /// Create configuration from generate arguments
    pub fn from_generate_args(args: &GenerateArgs) -> AppResult<Self> {
        Self::from_generate_args_on(args, std::io::stdin().is_terminal())
    }

    fn from_generate_args_on(args: &GenerateArgs, interactive: bool) -> AppResult<Self> {
        let platforms = if args.all {
            PlatformSelection::Fixed(Platform::ALL.to_vec())
        } else if !args.platform.is_empty() {
            let mut platforms = Vec::with_capacity(args.platform.len());
            for &platform in &args.platform {
                if !platforms.contains(&platform) {
                    platforms.push(platform);
                }
            }
            PlatformSelection::Fixed(platforms)
        } else if interactive {
            PlatformSelection::Prompt
        } else {
            PlatformSelection::Fixed(Platform::SURFACED.to_vec())
        };

        Ok(Config {
            input: timing_input(&args.timing)?,
            output: OutputMode::Report,
            platforms,
        })
    }

    /// Create configuration from fallback arguments.
    ///
    /// Never fails: any duration yields a curve, degenerate ones an instant one.
    pub fn from_fallback_args(args: &FallbackArgs) -> Self {
        if !(args.duration.is_finite() && args.duration > 0.0) {
            log::warn!(
                "Duration {} ms is not positive; the fallback curve will be instant",
                args.duration
            );
        }

        Config {
            input: TimingInput::new(args.duration, defaults::BOUNCE),
            output: if args.json {
                OutputMode::Json
            } else {
                OutputMode::Report
            },
            platforms: PlatformSelection::Fixed(Vec::new()),
        }
    }

    /// Create configuration from interactive arguments
    pub fn from_interactive_args(args: &InteractiveArgs) -> AppResult<Self> {
        Self::from_interactive_args_on(args, std::io::stdin().is_terminal())
    }

    fn from_interactive_args_on(args: &InteractiveArgs, interactive: bool) -> AppResult<Self> {
        if !interactive {
            return Err(AppError::Config(
                "Interactive mode needs a terminal on stdin".to_string(),
            ));
        }

        Ok(Config {
            input: timing_input(&args.timing)?,
            output: OutputMode::Report,
            platforms: PlatformSelection::Prompt,
        })
    }
}

/// Validate timing flags.
///
/// Bounce must be a real number; out-of-range values only warn. Duration is
/// left to the converter so its error names the rejected value.
fn timing_input(args: &TimingArgs) -> AppResult<TimingInput> {
    if !args.bounce.is_finite() {
        return Err(AppError::Config(format!(
            "Bounce must be a finite number, got {}",
            args.bounce
        )));
    }
    if !(-1.0..=1.0).contains(&args.bounce) {
        log::warn!("Bounce {} is outside the usual range of -1 to 1", args.bounce);
    }
    Ok(TimingInput::new(args.duration, args.bounce))
}
