//! Problems CLI - three small console programs
//!
//! # Commands
//!
//! - `problems caesar` - encode a message with a Caesar shift and decode it back
//! - `problems format` - print a number with Indian digit grouping (12,34,567)
//! - `problems min-loss` - print the minimum loss over a series of yearly prices
//!
//! Every command reads its answers from stdin and writes to stdout. Logs go to
//! stderr so they never mix with program output.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::AppConfig;

/// Coding problems: Caesar cipher, Indian number format, minimum loss
#[derive(Parser)]
#[command(name = "problems")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (JSON); the built-in defaults are used when omitted
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a message with a Caesar shift, then decode it back
    Caesar,

    /// Format a number using Indian digit grouping
    Format,

    /// Find the minimum loss in a series of yearly prices
    MinLoss,
}

// RUST_LOG wins over the configured level; --verbose wins over both.
fn init_tracing(verbose: bool, configured_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured_level))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config = AppConfig::load(cli.config.as_deref());
    let level = app_config
        .as_ref()
        .map(|cfg| cfg.app.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());
    init_tracing(cli.verbose, &level);

    let app_config = app_config?;
    info!(version = %app_config.version, "Loaded configuration");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut output = stdout.lock();

    match cli.command {
        Commands::Caesar => commands::caesar::run(&mut input, &mut output, &app_config.engine.cipher),
        Commands::Format => commands::format::run(&mut input, &mut output, &app_config.engine.formatter),
        Commands::MinLoss => commands::min_loss::run(&mut input, &mut output),
    }
}
