//! The configuration collection and its reserved extension points.

use serde::{Deserialize, Serialize};

use super::{Bundle, PathAlias, ShimEntry};

/// Root aggregate produced by one decode pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationCollection {
    /// Source document, empty when decoded from raw text
    #[serde(default)]
    pub file_path: String,
    pub paths: Vec<PathAlias>,
    #[serde(default)]
    pub shim: Vec<ShimEntry>,
    /// `None` when bundle processing was not requested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundles: Option<Vec<Bundle>>,
    #[serde(default)]
    pub map: Vec<MapElement>,
    #[serde(default)]
    pub auto_bundles: Vec<AutoBundle>,
    #[serde(default)]
    pub overrides: Vec<CollectionOverride>,
}

/// Module id remapping for one requesting module (reserved, never decoded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapElement {
    pub for_module: String,
    #[serde(default)]
    pub replacements: Vec<MapReplacement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapReplacement {
    pub old_key: String,
    pub new_key: String,
}

/// Bundle assembled from files or directories (reserved, never decoded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoBundle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(default)]
    pub includes: Vec<AutoBundleItem>,
    #[serde(default)]
    pub excludes: Vec<AutoBundleItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoBundleItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

/// Per-bundle replacement of script lists (reserved, never decoded)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionOverride {
    pub bundle_id: String,
    #[serde(default)]
    pub bundled_scripts: Vec<String>,
}

impl ConfigurationCollection {
    /// Attach the path of the document this collection was read from
    pub fn with_file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = path.into();
        self
    }

    /// Check if bundles were decoded for this collection
    pub fn bundles_requested(&self) -> bool {
        self.bundles.is_some()
    }

    /// Find a path alias by key
    pub fn path_alias(&self, key: &str) -> Option<&PathAlias> {
        self.paths.iter().find(|alias| alias.key == key)
    }

    /// Find a shim entry by module id
    pub fn shim_entry(&self, module_id: &str) -> Option<&ShimEntry> {
        self.shim.iter().find(|entry| entry.module_id == module_id)
    }

    /// Find a bundle by name
    ///
    /// Always `None` when bundles were not requested.
    pub fn bundle(&self, name: &str) -> Option<&Bundle> {
        self.bundles
            .as_deref()
            .and_then(|bundles| bundles.iter().find(|bundle| bundle.name == name))
    }
}
