//! Configuration decoding for amdconf
//!
//! This crate turns hand-written module-loader documents into the canonical
//! model from `amdconf-core`. The `json` module is the pure decoder (and its
//! inverse, the encoder); the `loader` module reads documents from disk and
//! picks a decoder by file extension.

pub mod json;
pub mod loader;

// Re-export main types
pub use json::{decode, decode_value, encode_document, serialize_document, DecodeOptions};
pub use loader::{ConfigFormat, ConfigLoader};

pub use amdconf_core::error::{ConfigError, ConfigResult};
