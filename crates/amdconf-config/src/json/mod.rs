//! JSON configuration document decoding and encoding
//!
//! A document is a single JSON object. `paths` is required, `shim` and
//! `bundles` are optional, and every other key is ignored. Each section is
//! handled by its own decoder; this module parses the text and assembles the
//! results into a [`ConfigurationCollection`].

use amdconf_core::error::{ConfigError, ConfigResult};
use amdconf_core::types::ConfigurationCollection;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod bundles;
pub mod encode;
pub mod paths;
pub mod shape;
pub mod shim;

pub use bundles::{decode_bundles, decode_item};
pub use encode::{encode_document, serialize_document};
pub use paths::decode_paths;
pub use shape::JsonKind;
pub use shim::decode_shim;

/// Which optional sections a decode pass processes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecodeOptions {
    /// Decode the `bundles` section; when false the collection carries no bundles at all
    #[serde(default)]
    pub process_bundles: bool,
}

impl DecodeOptions {
    /// Options that decode every supported section
    pub fn with_bundles() -> Self {
        Self {
            process_bundles: true,
        }
    }
}

/// Decode raw document text into a configuration collection
pub fn decode(raw_text: &str, options: &DecodeOptions) -> ConfigResult<ConfigurationCollection> {
    let document: Value = serde_json::from_str(raw_text).map_err(ConfigError::malformed)?;
    decode_value(&document, options)
}

/// Decode an already-parsed document
pub fn decode_value(document: &Value, options: &DecodeOptions) -> ConfigResult<ConfigurationCollection> {
    let root = match document {
        Value::Object(root) => root,
        other => return Err(ConfigError::malformed_root(JsonKind::of(other).name())),
    };

    let paths = optional_section(root, "paths").ok_or_else(|| ConfigError::MissingRequiredSection {
        section: "paths".to_string(),
    })?;

    let paths = decode_paths(paths)?;
    let shim = decode_shim(optional_section(root, "shim"))?;
    let bundles = if options.process_bundles {
        Some(decode_bundles(optional_section(root, "bundles"))?)
    } else {
        None
    };

    Ok(ConfigurationCollection {
        file_path: String::new(),
        paths,
        shim,
        bundles,
        map: Vec::new(),
        auto_bundles: Vec::new(),
        overrides: Vec::new(),
    })
}

/// Look up a top-level section, treating `null` as absent
fn optional_section<'a>(root: &'a Map<String, Value>, section: &str) -> Option<&'a Value> {
    root.get(section).filter(|value| !value.is_null())
}

/// Entries of a section, which must be an object
pub(crate) fn section_entries<'a>(section: &str, value: &'a Value) -> ConfigResult<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| ConfigError::InvalidSectionShape {
        section: section.to_string(),
        found: JsonKind::of(value).to_string(),
    })
}


#[cfg(all(test, feature = "property-tests"))]
mod property_tests {
    use super::*;
    use amdconf_core::types::{Bundle, BundleItem, PathAlias, ShimEntry};
    use proptest::prelude::*;

    fn arb_name() -> impl Strategy<Value = String> {
        "[a-z][a-z0-9/_-]{0,12}"
    }

    prop_compose! {
        fn arb_path_alias()(
            key in arb_name(),
            target in arb_name(),
            default_bundle in prop::option::of(arb_name()),
        ) -> PathAlias {
            PathAlias { key, target, default_bundle }
        }
    }

    prop_compose! {
        fn arb_shim_entry()(
            module_id in arb_name(),
            exports in prop::option::of("[A-Za-z$_][A-Za-z0-9$_.]{0,10}"),
            dependencies in prop::collection::vec(arb_name(), 0..4),
        ) -> ShimEntry {
            ShimEntry { module_id, exports, dependencies }
        }
    }

    prop_compose! {
        fn arb_bundle_item()(
            module_name in prop::option::of(arb_name()),
            compression_type in prop::option::of("none|gzip|minify"),
        ) -> BundleItem {
            BundleItem { module_name, compression_type }
        }
    }

    prop_compose! {
        fn arb_bundle()(
            name in arb_name(),
            is_virtual in any::<bool>(),
            output_path in prop::option::of(arb_name()),
            includes in prop::collection::vec(arb_name(), 0..3),
            items in prop::collection::vec(arb_bundle_item(), 0..5),
        ) -> Bundle {
            Bundle { name, is_virtual, output_path, includes, items }
        }
    }

    /// Collections with unique keys per section, as a JSON object requires
    fn arb_collection() -> impl Strategy<Value = ConfigurationCollection> {
        (
            prop::collection::vec(arb_path_alias(), 0..6),
            prop::collection::vec(arb_shim_entry(), 0..4),
            prop::collection::vec(arb_bundle(), 0..4),
        )
            .prop_map(|(paths, shim, bundles)| ConfigurationCollection {
                paths: dedup_by(paths, |alias| alias.key.clone()),
                shim: dedup_by(shim, |entry| entry.module_id.clone()),
                bundles: Some(dedup_by(bundles, |bundle| bundle.name.clone())),
                ..Default::default()
            })
    }

    fn dedup_by<T>(items: Vec<T>, key: impl Fn(&T) -> String) -> Vec<T> {
        let mut seen = std::collections::HashSet::new();
        items.into_iter().filter(|item| seen.insert(key(item))).collect()
    }

    proptest! {
        /// encode then decode yields the same collection
        #[test]
        fn document_round_trip(collection in arb_collection()) {
            let text = serialize_document(&collection).unwrap();
            let decoded = decode(&text, &DecodeOptions::with_bundles()).unwrap();

            prop_assert_eq!(collection, decoded);
        }

        /// decoding the same text twice gives equal results
        #[test]
        fn decode_deterministic(collection in arb_collection(), process_bundles in any::<bool>()) {
            let text = serialize_document(&collection).unwrap();
            let options = DecodeOptions { process_bundles };

            prop_assert_eq!(decode(&text, &options).unwrap(), decode(&text, &options).unwrap());
        }

        /// aliases come back in document order
        #[test]
        fn paths_order_preserved(keys in prop::collection::hash_set("[a-z]{1,8}", 1..10)) {
            let keys: Vec<String> = keys.into_iter().collect();
            let mut paths = Map::new();
            for key in &keys {
                paths.insert(key.clone(), Value::String(format!("lib/{}", key)));
            }
            let document = serde_json::json!({ "paths": paths });

            let decoded = decode_value(&document, &DecodeOptions::default()).unwrap();
            let decoded_keys: Vec<String> = decoded.paths.into_iter().map(|alias| alias.key).collect();
            prop_assert_eq!(keys, decoded_keys);
        }
    }
}
