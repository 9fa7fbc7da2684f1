//! Command implementations and dispatch logic.
//!
//! Each command is an async function that takes a CommandContext. Rendering is
//! kept in plain functions returning strings so it can be tested without a
//! terminal.

use amdconf_config::{serialize_document, ConfigLoader, DecodeOptions};
use amdconf_core::error::{ConfigError, ConfigResult};
use amdconf_core::types::ConfigurationCollection;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::info;


use crate::{output::OutputHandler, Commands};

/// Shared context for all commands
pub struct CommandContext {
    pub loader: ConfigLoader,
    pub output: OutputHandler,
}

impl CommandContext {
    /// Create a new command context
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            loader: ConfigLoader::new(options),
            output: OutputHandler::new(),
        }
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> ConfigResult<()> {
    match command {
        Commands::Check { files } => {
            info!("Checking {} configuration file(s)", files.len());
            check(&files, ctx).await
        },
        Commands::Show { file, compact } => {
            info!("Showing configuration: {} (compact: {})", file, compact);
            show(&file, compact, ctx).await
        },
        Commands::Normalize { file } => {
            info!("Normalizing configuration: {}", file);
            normalize(&file, ctx).await
        },
        Commands::Version => show_version(ctx),
    }
}

/// Load every file and print a summary line for each
///
/// Stops at the first file that fails, naming it before the error is reported.
pub async fn check(files: &[Utf8PathBuf], ctx: &CommandContext) -> ConfigResult<()> {
    for file in files {
        match ctx.loader.load(file).await {
            Ok(collection) => ctx.output.success(&summarize(&collection)),
            Err(e) => {
                ctx.output.failure(&failure_line(file, &e));
                return Err(e);
            },
        }
    }
    Ok(())
}

/// One-line description of a file that failed to load
pub fn failure_line(file: &Utf8Path, error: &ConfigError) -> String {
    format!("{}: {}", file, error)
}

/// Print the decoded collection as JSON
pub async fn show(file: &Utf8Path, compact: bool, ctx: &CommandContext) -> ConfigResult<()> {
    let collection = ctx.loader.load(file).await?;
    if !collection.bundles_requested() {
        ctx.output.warn("Bundles were not decoded; pass --bundles to include them");
    }
    ctx.output.print(&render_collection(&collection, compact)?);
    Ok(())
}

/// Print the document rewritten in canonical shapes
pub async fn normalize(file: &Utf8Path, ctx: &CommandContext) -> ConfigResult<()> {
    let collection = ctx.loader.load(file).await?;
    ctx.output.print(&serialize_document(&collection)?);
    Ok(())
}

fn show_version(ctx: &CommandContext) -> ConfigResult<()> {
    ctx.output.print(&format!("amdconf v{}", env!("CARGO_PKG_VERSION")));
    ctx.output.print(&format!("Built: {}", env!("BUILD_DATE")));
    ctx.output.print(&format!("Target: {}", env!("BUILD_TARGET")));
    ctx.output.print(&format!("Rust: {}", env!("RUSTC_VERSION")));
    Ok(())
}

/// One-line description of a decoded collection
pub fn summarize(collection: &ConfigurationCollection) -> String {
    let bundles = match &collection.bundles {
        Some(bundles) => {
            let virtual_count = bundles.iter().filter(|bundle| bundle.is_virtual).count();
            format!("{} bundle(s) ({} virtual)", bundles.len(), virtual_count)
        },
        None => "bundles not decoded".to_string(),
    };

    format!(
        "{}: {} path alias(es), {} shim entr{}, {}",
        collection.file_path,
        collection.paths.len(),
        collection.shim.len(),
        if collection.shim.len() == 1 { "y" } else { "ies" },
        bundles
    )
}

/// Serialize the collection model itself
pub fn render_collection(collection: &ConfigurationCollection, compact: bool) -> ConfigResult<String> {
    let rendered = if compact {
        serde_json::to_string(collection)
    } else {
        serde_json::to_string_pretty(collection)
    };

    rendered.map_err(ConfigError::serialization)
}
