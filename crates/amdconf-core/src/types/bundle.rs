//! Bundle declaration types.
//!
//! A bundle is either concrete (written to `output_path`) or virtual, a
//! logical grouping with no artifact of its own.

use serde::{Deserialize, Serialize};

/// Named group of modules intended to be combined
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub name: String,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
    #[serde(default)]
    pub includes: Vec<String>,
    #[serde(default)]
    pub items: Vec<BundleItem>,
}

/// One member of a bundle
///
/// Both fields are absent when the source element had an unrecognized shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression_type: Option<String>,
}

impl Bundle {
    /// Create an empty, concrete bundle
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_virtual: false,
            output_path: None,
            includes: Vec::new(),
            items: Vec::new(),
        }
    }

    /// Create a bundle from a plain list of module names
    pub fn from_modules<I, S>(name: impl Into<String>, modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut bundle = Self::new(name);
        bundle.items = modules.into_iter().map(BundleItem::module).collect();
        bundle
    }

    /// Mark the bundle as virtual
    pub fn virtual_bundle(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Set the output artifact path
    pub fn with_output_path(mut self, path: impl Into<String>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Include the contents of another bundle
    pub fn with_include(mut self, bundle: impl Into<String>) -> Self {
        self.includes.push(bundle.into());
        self
    }

    /// Append an item
    pub fn with_item(mut self, item: BundleItem) -> Self {
        self.items.push(item);
        self
    }

    /// Module names of all items that have one, in declaration order
    pub fn module_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(|item| item.module_name.as_deref())
    }

    /// Check if the bundle can be written as a plain module list
    pub fn is_plain_list(&self) -> bool {
        !self.is_virtual
            && self.output_path.is_none()
            && self.includes.is_empty()
            && self.items.iter().all(BundleItem::is_module_only)
    }
}

impl BundleItem {
    /// Item naming a module with no compression annotation
    pub fn module(name: impl Into<String>) -> Self {
        Self {
            module_name: Some(name.into()),
            compression_type: None,
        }
    }

    /// Set the compression strategy
    pub fn with_compression(mut self, compression: impl Into<String>) -> Self {
        self.compression_type = Some(compression.into());
        self
    }

    /// Check if the item only names a module
    pub fn is_module_only(&self) -> bool {
        self.module_name.is_some() && self.compression_type.is_none()
    }

    /// Check if neither field is set
    pub fn is_empty(&self) -> bool {
        self.module_name.is_none() && self.compression_type.is_none()
    }
}
