//! `paths` section decoder.

use amdconf_core::error::{ConfigError, ConfigResult};
use amdconf_core::types::PathAlias;
use serde_json::{Map, Value};

use super::section_entries;
use super::shape::{optional_text, PathShape};

/// Decode the `paths` section, one alias per key in document order
pub fn decode_paths(paths: &Value) -> ConfigResult<Vec<PathAlias>> {
    section_entries("paths", paths)?
        .iter()
        .map(|(key, value)| decode_path_alias(key, value))
        .collect()
}

fn decode_path_alias(key: &str, value: &Value) -> ConfigResult<PathAlias> {
    match PathShape::classify(value) {
        PathShape::Plain(target) => Ok(PathAlias::new(key, target)),
        PathShape::Structured(fields) => decode_structured(key, fields),
        PathShape::Unrecognized(kind) => Err(ConfigError::InvalidPathShape {
            key: key.to_string(),
            reason: format!("expected a string or an object, found {}", kind),
        }),
    }
}

fn decode_structured(key: &str, fields: &Map<String, Value>) -> ConfigResult<PathAlias> {
    let target = optional_text(fields, "path").ok_or_else(|| ConfigError::InvalidPathShape {
        key: key.to_string(),
        reason: "object form requires a \"path\" key".to_string(),
    })?;

    Ok(PathAlias {
        key: key.to_string(),
        target,
        default_bundle: optional_text(fields, "defaultBundle"),
    })
}
