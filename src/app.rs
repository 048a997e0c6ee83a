//! Main application logic and orchestration

use crate::codegen::{self, Platform};
use crate::config::{Config, OutputMode, PlatformSelection};
use crate::curve;
use crate::error::{AppError, AppResult};
use crate::report::{self, ConversionReport};
use crate::state::{Preview, Session};
use dialoguer::{Input, Select, theme::ColorfulTheme};
use std::io;

/// Main application struct
pub struct App {
    config: Config,
    session: Session,
}

/// Exit codes for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    UserExit = 1, // User pressed Escape or Ctrl+C
    Error = 2,    // Invalid input or an actual application error
}

/// Result type that includes user exit information
pub type AppRunResult = Result<(), AppError>;

/// Extended result that tracks exit reason
pub struct RunResult {
    pub result: AppRunResult,
    pub exit_code: ExitCode,
}

/// Entries of the interactive menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Convert,
    UseDefault,
    ToggleFallback,
    Generate,
    CopyText,
    Quit,
}

impl MenuAction {
    const ALL: [MenuAction; 6] = [
        MenuAction::Convert,
        MenuAction::UseDefault,
        MenuAction::ToggleFallback,
        MenuAction::Generate,
        MenuAction::CopyText,
        MenuAction::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuAction::Convert => "Convert",
            MenuAction::UseDefault => "Use default",
            MenuAction::ToggleFallback => "Toggle fallback curve preview",
            MenuAction::Generate => "Generate code",
            MenuAction::CopyText => "Show copy text",
            MenuAction::Quit => "Quit",
        }
    }
}

impl App {
    /// Initialize the application with configuration
    pub fn new_with_config(config: Config) -> Self {
        let session = Session::with_input(config.input);
        App { config, session }
    }

    /// Convert once and render according to the output mode
    pub fn convert(&self) -> AppResult<String> {
        let input = self.config.input;
        let coeffs = input.convert()?;
        log::debug!("Converted {:?} into {:?}", input, coeffs);

        match self.config.output {
            OutputMode::Quiet => Ok(coeffs.copy_text()),
            OutputMode::Json => ConversionReport::new(input, &coeffs).to_json(),
            OutputMode::Report => Ok(report::render_conversion(&input, &coeffs)),
        }
    }

    /// Generate snippets for the configured platforms.
    ///
    /// Returns `None` when the user backs out of the platform prompt.
    pub async fn generate(&self) -> AppResult<Option<String>> {
        // Convert before prompting so bad input fails fast
        let coeffs = self.config.input.convert()?;

        let platforms = match &self.config.platforms {
            PlatformSelection::Fixed(platforms) => platforms.clone(),
            PlatformSelection::Prompt => match prompt_platform().await? {
                Some(platform) => vec![platform],
                None => return Ok(None),
            },
        };

        let snippets: Vec<(Platform, String)> = platforms
            .into_iter()
            .map(|p| (p, codegen::generate(p, Some(&coeffs), self.config.input.duration_ms)))
            .collect();

        Ok(Some(report::render_snippets(&snippets)))
    }

    /// Describe the fallback curve for the configured duration
    pub fn fallback(&self) -> AppResult<String> {
        let spec = curve::fallback(self.config.input.duration_ms);
        match self.config.output {
            OutputMode::Json => Ok(serde_json::to_string_pretty(&spec)?),
            OutputMode::Quiet | OutputMode::Report => Ok(report::render_curve(&spec)),
        }
    }

    /// Run the interactive menu loop
    pub async fn run(mut self) -> RunResult {
        println!("{}", report::render_preview(&self.session.preview()));

        loop {
            let action = match prompt_menu(self.session.fallback_preview).await {
                Ok(Some(action)) => action,
                Ok(None) => return user_exit(),
                Err(e) if is_interrupt(&e) => return user_exit(),
                Err(e) => {
                    return RunResult {
                        result: Err(e),
                        exit_code: ExitCode::Error,
                    };
                }
            };

            match self.handle(action).await {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if is_interrupt(&e) => return user_exit(),
                Err(e) => {
                    return RunResult {
                        result: Err(e),
                        exit_code: ExitCode::Error,
                    };
                }
            }
        }

        RunResult {
            result: Ok(()),
            exit_code: ExitCode::Success,
        }
    }

    /// Apply one menu action; `Ok(false)` ends the session
    async fn handle(&mut self, action: MenuAction) -> AppResult<bool> {
        match action {
            MenuAction::Convert => {
                let Some(duration) =
                    prompt_number("Duration (ms)", self.session.input.duration_ms).await?
                else {
                    return Ok(true);
                };
                let Some(bounce) = prompt_number("Bounce", self.session.input.bounce).await? else {
                    return Ok(true);
                };

                self.session.set_duration(duration);
                self.session.set_bounce(bounce);
                match self.session.convert() {
                    Ok(coeffs) => {
                        println!("{}", report::render_conversion(&self.session.input, &coeffs))
                    }
                    // Invalid input leaves the session without coefficients; keep going
                    Err(e) => eprintln!("{}", e),
                }
            }
            MenuAction::UseDefault => {
                self.session.reset_to_default();
                println!("{}", report::render_preview(&self.session.preview()));
            }
            MenuAction::ToggleFallback => {
                self.session.toggle_fallback();
                println!("{}", report::render_preview(&self.session.preview()));
            }
            MenuAction::Generate => {
                if let Some(platform) = prompt_platform().await? {
                    let code = self.session.snippet(platform);
                    if code.is_empty() {
                        println!("{}", report::render_preview(&Preview::Unavailable));
                    } else {
                        println!("{}", report::render_snippets(&[(platform, code)]));
                    }
                }
            }
            MenuAction::CopyText => match self.session.copy_text() {
                Some(text) => println!("{}", text),
                None => println!("{}", report::render_preview(&Preview::Unavailable)),
            },
            MenuAction::Quit => return Ok(false),
        }

        Ok(true)
    }
}

fn user_exit() -> RunResult {
    RunResult {
        result: Ok(()),
        exit_code: ExitCode::UserExit,
    }
}

/// Ctrl+C, either as a signal or inside a raw-mode prompt, surfaces as an
/// interrupted read
pub fn is_interrupt(err: &AppError) -> bool {
    match err {
        AppError::Prompt(dialoguer::Error::IO(e)) | AppError::Io(e) => {
            e.kind() == io::ErrorKind::Interrupted
        }
        _ => false,
    }
}

fn interrupted() -> AppError {
    AppError::Io(io::Error::new(io::ErrorKind::Interrupted, "interrupted by Ctrl+C"))
}

/// Run a blocking prompt off the runtime, racing it against Ctrl+C.
async fn run_prompt<T, F>(prompt: F) -> AppResult<Option<T>>
where
    T: Send + 'static,
    F: FnOnce() -> dialoguer::Result<Option<T>> + Send + 'static,
{
    race_prompt(prompt, tokio::signal::ctrl_c()).await
}

/// `Ok(None)` means the user backed out of the prompt. An interrupt is an
/// `Interrupted` error instead, so callers end the session rather than
/// returning to the menu. The losing prompt thread is left blocked on stdin;
/// the process exits right after, which releases it.
async fn race_prompt<T, F, I>(prompt: F, interrupt: I) -> AppResult<Option<T>>
where
    T: Send + 'static,
    F: FnOnce() -> dialoguer::Result<Option<T>> + Send + 'static,
    I: Future<Output = io::Result<()>>,
{
    tokio::select! {
        biased;
        Ok(()) = interrupt => {
            log::debug!("Interrupted while prompting");
            Err(interrupted())
        }
        joined = tokio::task::spawn_blocking(prompt) => Ok(joined??),
    }
}

async fn prompt_menu(fallback_preview: bool) -> AppResult<Option<MenuAction>> {
    run_prompt(move || {
        let labels: Vec<String> = MenuAction::ALL
            .iter()
            .map(|action| match action {
                MenuAction::ToggleFallback if fallback_preview => {
                    format!("{} (on)", action.label())
                }
                _ => action.label().to_string(),
            })
            .collect();

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What next?")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        Ok(selection.map(|i| MenuAction::ALL[i]))
    })
    .await
}

async fn prompt_platform() -> AppResult<Option<Platform>> {
    run_prompt(|| {
        let labels: Vec<&str> = Platform::SURFACED.iter().map(|p| p.label()).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Select a platform")
            .items(&labels)
            .default(0)
            .interact_opt()?;

        Ok(selection.map(|i| Platform::SURFACED[i]))
    })
    .await
}

async fn prompt_number(prompt: &'static str, current: f64) -> AppResult<Option<f64>> {
    run_prompt(move || {
        let value = Input::<f64>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(current)
            .interact_text()?;
        Ok(Some(value))
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spring::TimingInput;
    use std::time::Duration;

    fn config(input: TimingInput, output: OutputMode, platforms: Vec<Platform>) -> Config {
        Config {
            input,
            output,
            platforms: PlatformSelection::Fixed(platforms),
        }
    }

    #[test]
    fn test_convert_quiet() {
        let app = App::new_with_config(config(TimingInput::default(), OutputMode::Quiet, vec![]));
        assert_eq!(app.convert().unwrap(), "stiffness: 438.65, damping: 37.70");
    }

    #[test]
    fn test_convert_rejects_bad_duration() {
        let app = App::new_with_config(config(
            TimingInput::new(0.0, 0.1),
            OutputMode::Report,
            vec![],
        ));
        assert!(matches!(app.convert(), Err(AppError::Spring(_))));
    }

    #[tokio::test]
    async fn test_generate_fixed_platforms() {
        let app = App::new_with_config(config(
            TimingInput::default(),
            OutputMode::Report,
            vec![Platform::Android, Platform::Web],
        ));
        let text = app.generate().await.unwrap().unwrap();
        assert!(text.contains("── Android ──"));
        assert!(text.contains(".setDampingRatio(0.90f)"));
        assert!(text.contains("stiffness: 438.65, damping: 37.70"));
        assert!(!text.contains("── Tux ──"));
    }

    #[tokio::test]
    async fn test_generate_fails_before_prompting() {
        let app = App::new_with_config(Config {
            input: TimingInput::new(f64::NAN, 0.1),
            output: OutputMode::Report,
            platforms: PlatformSelection::Prompt,
        });
        assert!(matches!(app.generate().await, Err(AppError::Spring(_))));
    }

    #[test]
    fn test_fallback_json() {
        let app = App::new_with_config(config(
            TimingInput::new(300.0, 0.1),
            OutputMode::Json,
            vec![],
        ));
        let value: serde_json::Value = serde_json::from_str(&app.fallback().unwrap()).unwrap();
        assert_eq!(value["control_points"][1], 0.86);
    }

    #[test]
    fn test_interrupt_detection() {
        let interrupted = AppError::Io(io::Error::from(io::ErrorKind::Interrupted));
        assert!(is_interrupt(&interrupted));
        assert!(!is_interrupt(&AppError::Config("nope".to_string())));
    }

    #[tokio::test]
    async fn test_interrupt_during_prompt_is_an_error() {
        let result: AppResult<Option<f64>> = race_prompt(
            || {
                std::thread::sleep(Duration::from_millis(200));
                Ok(Some(1.0))
            },
            std::future::ready(Ok(())),
        )
        .await;

        let err = result.unwrap_err();
        assert!(is_interrupt(&err), "expected an interrupt, got {}", err);
    }

    #[tokio::test]
    async fn test_prompt_answer_and_cancel_without_interrupt() {
        let answered = race_prompt(|| Ok(Some(42.0)), std::future::pending()).await;
        assert_eq!(answered.unwrap(), Some(42.0));

        let cancelled: AppResult<Option<Platform>> =
            race_prompt(|| Ok(None), std::future::pending()).await;
        assert_eq!(cancelled.unwrap(), None);
    }

    #[tokio::test]
    async fn test_failed_signal_registration_does_not_interrupt() {
        let answered = race_prompt(
            || Ok(Some(7.0)),
            std::future::ready(Err(io::Error::other("no signal handler"))),
        )
        .await;
        assert_eq!(answered.unwrap(), Some(7.0));
    }

    #[test]
    fn test_menu_order() {
        assert_eq!(MenuAction::ALL[0], MenuAction::Convert);
        assert_eq!(MenuAction::ALL[MenuAction::ALL.len() - 1], MenuAction::Quit);
    }
}
