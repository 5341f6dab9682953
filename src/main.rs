//! fridgewatch - refrigeration temperature monitoring tool
//!
//! A command-line tool for watching live fridge sensor feeds against
//! configured temperature limits, with a breach alert queue and email
//! notifications.

use clap::Parser;
use fridgewatch::cli::args::{generate_completions, Cli, Commands};
use fridgewatch::commands::{run_check, run_limits, run_sensors, run_watch};
use fridgewatch::config::ConfigBuilder;
use fridgewatch::error::{AppError, ConfigError};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Set log level based on verbose flag
    if cli.verbose {
        log::set_max_level(log::LevelFilter::Debug);
    }

    // Run the appropriate command
    let result = run(cli).await;

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())
        .with_verbose(Some(cli.verbose))
        .with_base_url(cli.base_url)
        .with_telemetry_url(cli.telemetry_url)
        .build();

    match cli.command {
        Commands::Sensors => run_sensors(&config, cli.format).await,

        Commands::Limits => run_limits(&config, cli.format).await,

        Commands::Check(args) => run_check(&config, &args, cli.format).await,

        Commands::Watch(args) => run_watch(&config, &args).await,

        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Config(ConfigError::MissingField(field)) if field == "api.base_url" => {
            eprintln!();
            eprintln!("Hint: Set the compliance backend URL with --base-url,");
            eprintln!("      the FRIDGEWATCH_BASE_URL environment variable,");
            eprintln!("      or api.base_url in the configuration file.");
        }
        AppError::Config(ConfigError::MissingField(field)) if field == "alerts.recipient" => {
            eprintln!();
            eprintln!("Hint: Set the alert recipient with --recipient or");
            eprintln!("      alerts.recipient in the configuration file.");
        }
        AppError::Fetch(_) => {
            eprintln!();
            eprintln!("Hint: Check that the backend is reachable and the");
            eprintln!("      configured URLs are correct.");
        }
        _ => {}
    }
}
