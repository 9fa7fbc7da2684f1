//! Writes a configuration collection back into document form.
//!
//! Each entity is written in the most compact shape the decoder accepts for
//! it, so decoding the output (with bundles requested) reproduces the
//! collection.

use amdconf_core::error::{ConfigError, ConfigResult};
use amdconf_core::types::{Bundle, BundleItem, ConfigurationCollection, PathAlias, ShimEntry};
use serde_json::{Map, Value};

/// Encode a collection as a document value
pub fn encode_document(config: &ConfigurationCollection) -> Value {
    let mut document = Map::new();

    let paths = config.paths.iter().map(|alias| (alias.key.clone(), encode_path(alias)));
    document.insert("paths".to_string(), Value::Object(paths.collect()));

    if !config.shim.is_empty() {
        let shim = config.shim.iter().map(|entry| (entry.module_id.clone(), encode_shim(entry)));
        document.insert("shim".to_string(), Value::Object(shim.collect()));
    }

    if let Some(bundles) = &config.bundles {
        let bundles = bundles.iter().map(|bundle| (bundle.name.clone(), encode_bundle(bundle)));
        document.insert("bundles".to_string(), Value::Object(bundles.collect()));
    }

    Value::Object(document)
}

/// Serialize a collection to pretty-printed document text
pub fn serialize_document(config: &ConfigurationCollection) -> ConfigResult<String> {
    serde_json::to_string_pretty(&encode_document(config)).map_err(ConfigError::serialization)
}

fn encode_path(alias: &PathAlias) -> Value {
    match &alias.default_bundle {
        None => Value::String(alias.target.clone()),
        Some(default_bundle) => {
            let mut fields = Map::new();
            fields.insert("path".to_string(), Value::String(alias.target.clone()));
            fields.insert("defaultBundle".to_string(), Value::String(default_bundle.clone()));
            Value::Object(fields)
        },
    }
}

fn encode_shim(entry: &ShimEntry) -> Value {
    let mut fields = Map::new();
    if let Some(exports) = &entry.exports {
        fields.insert("exports".to_string(), Value::String(exports.clone()));
    }
    if !entry.dependencies.is_empty() {
        fields.insert("deps".to_string(), string_array(&entry.dependencies));
    }
    Value::Object(fields)
}

fn encode_bundle(bundle: &Bundle) -> Value {
    if bundle.is_plain_list() {
        return Value::Array(bundle.items.iter().map(encode_item).collect());
    }

    let mut fields = Map::new();
    if bundle.is_virtual {
        fields.insert("virtual".to_string(), Value::Bool(true));
    }
    if let Some(output_path) = &bundle.output_path {
        fields.insert("outputPath".to_string(), Value::String(output_path.clone()));
    }
    if !bundle.includes.is_empty() {
        fields.insert("includes".to_string(), string_array(&bundle.includes));
    }
    if !bundle.items.is_empty() {
        fields.insert("items".to_string(), Value::Array(bundle.items.iter().map(encode_item).collect()));
    }
    Value::Object(fields)
}

fn encode_item(item: &BundleItem) -> Value {
    if let (Some(module_name), None) = (&item.module_name, &item.compression_type) {
        return Value::String(module_name.clone());
    }

    let mut fields = Map::new();
    if let Some(module_name) = &item.module_name {
        fields.insert("path".to_string(), Value::String(module_name.clone()));
    }
    if let Some(compression) = &item.compression_type {
        fields.insert("compression".to_string(), Value::String(compression.clone()));
    }
    Value::Object(fields)
}

fn string_array(values: &[String]) -> Value {
    Value::Array(values.iter().cloned().map(Value::String).collect())
}
