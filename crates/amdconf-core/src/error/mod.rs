//! Error types and result aliases for amdconf operations.
//!
//! Every structural problem in a configuration document maps to exactly one
//! variant. Malformed bundle items are not represented here because they never
//! fail a decode.

use thiserror::Error;

/// Unified error type for all amdconf operations
#[derive(Error, Debug)]
pub enum ConfigError {
    // Document errors
    #[error("Malformed configuration document: {message}")]
    MalformedDocument {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Required section '{section}' is missing")]
    MissingRequiredSection { section: String },

    #[error("Section '{section}' must be an object, found {found}")]
    InvalidSectionShape { section: String, found: String },

    // Entry errors
    #[error("Path alias '{key}' is invalid: {reason}")]
    InvalidPathShape { key: String, reason: String },

    #[error("Shim entry '{module_id}' is invalid: {reason}")]
    InvalidShimShape { module_id: String, reason: String },

    #[error("Bundle '{name}' must be an array or an object, found {found}")]
    InvalidBundleShape { name: String, found: String },

    #[error("Failed to serialize configuration: {message}")]
    Serialization {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    // Loader errors
    #[error("Unsupported configuration format: {path}")]
    UnsupportedFormat { path: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for amdconf operations
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Create a malformed-document error from a JSON parse failure
    pub fn malformed(source: serde_json::Error) -> Self {
        Self::MalformedDocument {
            message: source.to_string(),
            source: Some(source),
        }
    }

    /// Create a malformed-document error without an underlying parse failure
    pub fn malformed_root(found: &str) -> Self {
        Self::MalformedDocument {
            message: format!("document root must be an object, found {}", found),
            source: None,
        }
    }

    /// Create a serialization error for output that could not be written
    pub fn serialization(source: serde_json::Error) -> Self {
        Self::Serialization {
            message: source.to_string(),
            source,
        }
    }

    /// Create an IO error from std::io::Error
    pub fn io(message: String, source: std::io::Error) -> Self {
        Self::Io { message, source }
    }

    /// Prefix the human-readable message with the file it came from.
    ///
    /// Only the free-form parse message is rewritten; the structured variants
    /// already name the offending entry.
    pub fn in_file(self, path: &str) -> Self {
        match self {
            Self::MalformedDocument { message, source } => Self::MalformedDocument {
                message: format!("In file {}: {}", path, message),
                source,
            },
            other => other,
        }
    }

    /// Check if this error is recoverable
    ///
    /// Only reading the source can succeed on a second attempt; decoding the
    /// same text again always fails the same way.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ConfigError::Io { .. })
    }

    /// Get a user-friendly suggestion for fixing this error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ConfigError::MalformedDocument { .. } => {
                Some("Check the file is valid JSON with an object at the top level")
            },
            ConfigError::MissingRequiredSection { .. } => {
                Some("Add a \"paths\" object, even an empty one: \"paths\": {}")
            },
            ConfigError::InvalidPathShape { .. } => Some(
                "Use either \"alias\": \"path/to/module\" or \"alias\": { \"path\": ..., \"defaultBundle\": ... }",
            ),
            ConfigError::InvalidShimShape { .. } => {
                Some("Shim entries look like \"module\": { \"exports\": ..., \"deps\": [...] }")
            },
            ConfigError::InvalidBundleShape { .. } => {
                Some("Declare bundles as an array of modules or an object with \"items\"")
            },
            ConfigError::UnsupportedFormat { .. } => Some("Only .json configuration files are supported"),
            _ => None,
        }
    }
}
