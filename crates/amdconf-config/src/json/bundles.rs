//! `bundles` section decoder.
//!
//! Bundle declarations are strict: an entry that is neither an array nor an
//! object fails the whole document. Bundle items are lenient: an element of
//! any other shape becomes an empty item.

use amdconf_core::error::{ConfigError, ConfigResult};
use amdconf_core::types::{Bundle, BundleItem};
use serde_json::{Map, Value};

use super::section_entries;
use super::shape::{optional_text, text_list, BundleShape, ItemShape};

/// Decode the `bundles` section; an absent section yields no bundles
pub fn decode_bundles(bundles: Option<&Value>) -> ConfigResult<Vec<Bundle>> {
    let Some(bundles) = bundles else {
        return Ok(Vec::new());
    };

    section_entries("bundles", bundles)?
        .iter()
        .map(|(name, value)| decode_bundle(name, value))
        .collect()
}

fn decode_bundle(name: &str, value: &Value) -> ConfigResult<Bundle> {
    match BundleShape::classify(value) {
        BundleShape::List(elements) => Ok(Bundle {
            name: name.to_string(),
            is_virtual: false,
            output_path: None,
            includes: Vec::new(),
            items: elements.iter().map(decode_item).collect(),
        }),
        BundleShape::Declared(fields) => Ok(decode_declared(name, fields)),
        BundleShape::Unrecognized(kind) => Err(ConfigError::InvalidBundleShape {
            name: name.to_string(),
            found: kind.to_string(),
        }),
    }
}

fn decode_declared(name: &str, fields: &Map<String, Value>) -> Bundle {
    let items = match fields.get("items") {
        Some(Value::Array(elements)) => elements.iter().map(decode_item).collect(),
        _ => Vec::new(),
    };

    Bundle {
        name: name.to_string(),
        // only a literal boolean counts
        is_virtual: matches!(fields.get("virtual"), Some(Value::Bool(true))),
        output_path: optional_text(fields, "outputPath"),
        includes: text_list(fields, "includes"),
        items,
    }
}

/// Decode one bundle item; never fails
pub fn decode_item(value: &Value) -> BundleItem {
    match ItemShape::classify(value) {
        ItemShape::Module(module) => BundleItem::module(module),
        ItemShape::Annotated(fields) => BundleItem {
            module_name: optional_text(fields, "path"),
            compression_type: optional_text(fields, "compression"),
        },
        ItemShape::Unrecognized(_) => BundleItem::default(),
    }
}
