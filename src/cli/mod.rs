//! CLI module for Vigil
//!
//! Command-line interface definitions and handlers for the Vigil monitoring
//! report generator.
//!
//! # Commands
//!
//! - `report` - Run a full monitoring report
//! - `pins` - Inspect the artifact board (list, show)
//! - `config` - Configuration utilities (init)
//! - `completions` - Generate shell completions
//!
//! # Example
//!
//! ```bash
//! # Run a report with the default config
//! vigil report
//!
//! # Export the report document as JSON
//! vigil report --json --out report.json
//!
//! # Inspect the board catalog
//! vigil pins list
//!
//! # Generate shell completions
//! vigil completions bash > ~/.bash_completion.d/vigil
//! ```

pub mod completions;
pub mod config;
pub mod output;
pub mod pins;
pub mod report;

pub use completions::handle_completions;
pub use config::handle_config_init;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Vigil - Model monitoring report generator
#[derive(Parser, Debug)]
#[command(
    name = "vigil",
    version,
    about = "Model performance monitoring report generator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a monitoring report
    Report(ReportArgs),
    /// Inspect the artifact board
    #[command(subcommand)]
    Pins(PinsCommands),
    /// Configuration utilities
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to configuration file
    #[arg(short, long, default_value = "vigil.toml")]
    pub config: PathBuf,

    /// Override the model pin name
    #[arg(short, long, env = "VIGIL_MODEL")]
    pub model: Option<String>,

    /// Override the data pin name
    #[arg(short, long, env = "VIGIL_DATA")]
    pub data: Option<String>,

    /// Override the rolling window length in days
    #[arg(short, long, env = "VIGIL_PERIOD_DAYS")]
    pub period_days: Option<i64>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "VIGIL_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Output the report document as JSON
    #[arg(long)]
    pub json: bool,

    /// Also write the JSON report document to a file
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum PinsCommands {
    /// List pins on the board
    List(PinsListArgs),
    /// Show one pin's metadata
    Show(PinsShowArgs),
}

#[derive(Args, Debug)]
pub struct PinsListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "vigil.toml")]
    pub config: PathBuf,
}

#[derive(Args, Debug)]
pub struct PinsShowArgs {
    /// Pin name to show
    pub name: String,

    /// Show a specific version instead of the latest
    #[arg(short, long)]
    pub version: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Path to configuration file
    #[arg(short, long, default_value = "vigil.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Initialize a new configuration file
    Init(ConfigInitArgs),
}

#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Output file path
    #[arg(short, long, default_value = "vigil.toml")]
    pub output: PathBuf,

    /// Overwrite existing file
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}
