//! Reading configuration documents from disk
//!
//! The decoder itself never touches the filesystem. This module picks a
//! reader from the file extension, reads the text and hands it to the
//! matching decoder, then records where the collection came from.

use amdconf_core::error::{ConfigError, ConfigResult};
use amdconf_core::types::ConfigurationCollection;
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::json::{self, DecodeOptions};

/// Document format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
}

impl ConfigFormat {
    /// Pick the format for a path
    pub fn from_path(path: &Utf8Path) -> ConfigResult<Self> {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.to_string(),
            }),
        }
    }

    /// Decode document text in this format
    pub fn decode(self, text: &str, options: &DecodeOptions) -> ConfigResult<ConfigurationCollection> {
        match self {
            Self::Json => json::decode(text, options),
        }
    }
}

/// Main configuration loading interface
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    options: DecodeOptions,
}

impl ConfigLoader {
    /// Create a new configuration loader
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }

    /// Options every load is decoded with
    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Load and decode one document
    pub async fn load(&self, path: &Utf8Path) -> ConfigResult<ConfigurationCollection> {
        let format = ConfigFormat::from_path(path)?;
        debug!(path = %path, ?format, process_bundles = self.options.process_bundles, "loading configuration");

        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConfigError::io(format!("Failed to read {}", path), e))?;

        let collection = format
            .decode(&text, &self.options)
            .map_err(|e| e.in_file(path.as_str()))?
            .with_file_path(path.as_str());

        debug!(
            path = %path,
            paths = collection.paths.len(),
            shim = collection.shim.len(),
            bundles = collection.bundles.as_ref().map(Vec::len),
            "configuration loaded"
        );
        Ok(collection)
    }

    /// Load several documents in order, stopping at the first failure
    pub async fn load_many(&self, paths: &[Utf8PathBuf]) -> ConfigResult<Vec<ConfigurationCollection>> {
        let mut collections = Vec::with_capacity(paths.len());
        for path in paths {
            collections.push(self.load(path).await?);
        }
        Ok(collections)
    }
}
