//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Refrigeration temperature monitoring tool
///
/// Watch live sensor feeds against configured temperature limits, queue
/// threshold breaches for review, and notify an administrator by email.
#[derive(Parser, Debug)]
#[command(name = "fridgewatch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FRIDGEWATCH_CONFIG")]
    pub config: Option<String>,

    /// Base URL of the compliance backend
    #[arg(long, global = true, env = "FRIDGEWATCH_BASE_URL")]
    pub base_url: Option<String>,

    /// URL of the external telemetry feed
    #[arg(long, global = true, env = "FRIDGEWATCH_TELEMETRY_URL")]
    pub telemetry_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show live readings for all sensors
    Sensors,

    /// Show configured temperature limits
    Limits,

    /// Run one fetch-evaluate cycle and report breaches
    Check(CheckArgs),

    /// Run the live polling dashboard
    Watch(WatchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Send an alert email if breaches are found
    #[arg(long)]
    pub notify: bool,

    /// Recipient for the alert email (overrides config)
    #[arg(long)]
    pub recipient: Option<String>,
}

/// Arguments for the watch command
#[derive(Parser, Debug)]
pub struct WatchArgs {
    /// Seconds between polling cycles (overrides config)
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// Recipient for alert emails (overrides config)
    #[arg(long)]
    pub recipient: Option<String>,

    /// Disable alert email notifications
    #[arg(long)]
    pub no_notify: bool,
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// Compact single-line format
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
