//! # amdconf-cli
//!
//! Command-line front end for amdconf. It reads module-loader configuration
//! documents, reports what they decode to, and rewrites them in canonical
//! shapes.

use amdconf_config::DecodeOptions;
use amdconf_core::error::ConfigResult;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tracing::{error, info};

mod commands;
mod output;

use commands::CommandContext;
use output::errors::ErrorFormatter;

/// Inspect and normalize module-loader configuration documents
#[derive(Parser)]
#[command(name = "amdconf", version, about = "Module-loader configuration tool")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Decode the bundles section as well
    #[arg(long, global = true, env = "AMDCONF_PROCESS_BUNDLES")]
    pub bundles: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate documents and print a summary of each
    Check {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<Utf8PathBuf>,
    },
    /// Print the decoded configuration as JSON
    Show {
        file: Utf8PathBuf,
        /// Print on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Print the document rewritten in canonical shapes
    Normalize { file: Utf8PathBuf },
    /// Show version information
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose);
    setup_panic_handler();

    info!("Starting amdconf v{}", env!("CARGO_PKG_VERSION"));

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            eprint!("{}", ErrorFormatter::new().format_error(&e));
            ExitCode::FAILURE
        },
    }
}

fn run_cli(cli: Cli) -> ConfigResult<()> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| amdconf_core::error::ConfigError::io("Failed to create async runtime".to_string(), e))?;

    let options = DecodeOptions {
        process_bundles: cli.bundles,
    };

    rt.block_on(async {
        let ctx = CommandContext::new(options);
        commands::dispatch_command(cli.command, &ctx).await
    })
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(format!("amdconf={},amdconf_config={}", level, level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn setup_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("amdconf encountered an unexpected error: {}", panic_info);
        eprintln!("amdconf crashed! This is a bug.");
        eprintln!("Please report this at: https://github.com/amdconf/amdconf/issues");
        eprintln!("Error: {}", panic_info);
    }));
}
