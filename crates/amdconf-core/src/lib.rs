//! # amdconf-core
//!
//! Core types shared across all amdconf crates.
//!
//! This crate provides:
//! - The canonical configuration model (path aliases, shim entries, bundles)
//! - ConfigError enum for unified error handling
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `types`: Canonical entities produced by the document decoders
//! - `error`: Error types and result aliases

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{ConfigError, ConfigResult};
pub use types::{
    AutoBundle, AutoBundleItem, Bundle, BundleItem, CollectionOverride, ConfigurationCollection,
    MapElement, MapReplacement, PathAlias, ShimEntry,
};
