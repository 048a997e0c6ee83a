use clap::Parser;
use springcheck::app::{self, App, ExitCode};
use springcheck::config::{self, Args, Commands};

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() {
    init_logging();

    let args = Args::parse();

    match args.command {
        Commands::Convert(convert_args) => {
            let config = match config::Config::from_convert_args(&convert_args) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(ExitCode::Error as i32);
                }
            };

            match App::new_with_config(config).convert() {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(ExitCode::Error as i32);
                }
            }
        }
        Commands::Generate(generate_args) => {
            let config = match config::Config::from_generate_args(&generate_args) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(ExitCode::Error as i32);
                }
            };

            match App::new_with_config(config).generate().await {
                Ok(Some(output)) => println!("{}", output),
                Ok(None) => std::process::exit(ExitCode::UserExit as i32),
                Err(e) if app::is_interrupt(&e) => std::process::exit(ExitCode::UserExit as i32),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(ExitCode::Error as i32);
                }
            }
        }
        Commands::Fallback(fallback_args) => {
            let config = config::Config::from_fallback_args(&fallback_args);

            match App::new_with_config(config).fallback() {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(ExitCode::Error as i32);
                }
            }
        }
        Commands::Interactive(interactive_args) => {
            let config = match config::Config::from_interactive_args(&interactive_args) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(ExitCode::Error as i32);
                }
            };

            let run_result = App::new_with_config(config).run().await;
            if let Err(e) = run_result.result {
                eprintln!("Application error: {}", e);
                std::process::exit(ExitCode::Error as i32);
            }
            // Exit explicitly so a prompt still blocked on stdin cannot hold the runtime open
            std::process::exit(run_result.exit_code as i32);
        }
    }
}
