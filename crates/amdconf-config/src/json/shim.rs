//! `shim` section decoder.

use amdconf_core::error::{ConfigError, ConfigResult};
use amdconf_core::types::ShimEntry;
use serde_json::{Map, Value};

use super::section_entries;
use super::shape::{optional_text, render, JsonKind, ShimShape};

/// Decode the `shim` section; an absent section yields no entries
pub fn decode_shim(shim: Option<&Value>) -> ConfigResult<Vec<ShimEntry>> {
    let Some(shim) = shim else {
        return Ok(Vec::new());
    };

    section_entries("shim", shim)?
        .iter()
        .map(|(module_id, value)| match ShimShape::classify(value) {
            ShimShape::Declared(fields) => Ok(ShimEntry {
                module_id: module_id.clone(),
                exports: optional_text(fields, "exports"),
                dependencies: decode_dependencies(module_id, fields)?,
            }),
            ShimShape::Unrecognized(kind) => Err(ConfigError::InvalidShimShape {
                module_id: module_id.clone(),
                reason: format!("expected an object, found {}", kind),
            }),
        })
        .collect()
}

/// `deps` is optional, but when present it must be an array
fn decode_dependencies(module_id: &str, fields: &Map<String, Value>) -> ConfigResult<Vec<String>> {
    match fields.get("deps") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Array(elements)) => Ok(elements.iter().map(render).collect()),
        Some(other) => Err(ConfigError::InvalidShimShape {
            module_id: module_id.to_string(),
            reason: format!("\"deps\" must be an array, found {}", JsonKind::of(other)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_section() {
        assert!(decode_shim(None).unwrap().is_empty());
    }

    #[test]
    fn test_entries() {
        let shim = json!({
            "backbone": { "exports": "Backbone", "deps": ["underscore", "jquery"] },
            "modernizr": { "exports": "Modernizr" },
            "plugin": { "deps": ["jquery"] }
        });

        let entries = decode_shim(Some(&shim)).unwrap();
        assert_eq!(
            entries,
            vec![
                ShimEntry::new("backbone")
                    .with_exports("Backbone")
                    .with_dependency("underscore")
                    .with_dependency("jquery"),
                ShimEntry::new("modernizr").with_exports("Modernizr"),
                ShimEntry::new("plugin").with_dependency("jquery"),
            ]
        );
    }

    #[test]
    fn test_dependencies_empty_not_absent() {
        let entries = decode_shim(Some(&json!({ "legacy": {} }))).unwrap();

        assert!(entries[0].exports.is_none());
        assert!(entries[0].dependencies.is_empty());
    }

    #[test]
    fn test_non_string_dependencies_are_rendered() {
        let entries = decode_shim(Some(&json!({ "legacy": { "deps": ["a", 1, true] } }))).unwrap();
        assert_eq!(entries[0].dependencies, vec!["a", "1", "true"]);
    }

    #[test]
    fn test_non_object_entry_is_invalid() {
        let err = decode_shim(Some(&json!({ "backbone": "Backbone" }))).unwrap_err();
        match err {
            ConfigError::InvalidShimShape { module_id, reason } => {
                assert_eq!(module_id, "backbone");
                assert!(reason.contains("found string"));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_array_dependencies_are_invalid() {
        let err = decode_shim(Some(&json!({ "m": { "deps": "jquery" } }))).unwrap_err();
        match err {
            ConfigError::InvalidShimShape { module_id, reason } => {
                assert_eq!(module_id, "m");
                assert_eq!(reason, "\"deps\" must be an array, found string");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_null_dependencies_are_empty() {
        let entries = decode_shim(Some(&json!({ "m": { "deps": null } }))).unwrap();
        assert!(entries[0].dependencies.is_empty());
    }

    #[test]
    fn test_exports_null_is_absent_and_scalars_are_rendered() {
        let entries = decode_shim(Some(&json!({
            "nothing": { "exports": null },
            "counter": { "exports": 7 }
        })))
        .unwrap();

        assert_eq!(entries[0], ShimEntry::new("nothing"));
        assert_eq!(entries[1].exports.as_deref(), Some("7"));
    }
}
