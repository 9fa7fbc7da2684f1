//! Shim entry types.

use serde::{Deserialize, Serialize};

/// Loading metadata for a script that is not module-aware
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShimEntry {
    pub module_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exports: Option<String>,
    /// Empty, never absent, when the entry declares no `deps`
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl ShimEntry {
    /// Create a shim entry with no exports and no dependencies
    pub fn new(module_id: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            exports: None,
            dependencies: Vec::new(),
        }
    }

    /// Set the global the script exports
    pub fn with_exports(mut self, exports: impl Into<String>) -> Self {
        self.exports = Some(exports.into());
        self
    }

    /// Add a dependency
    pub fn with_dependency(mut self, dependency: impl Into<String>) -> Self {
        self.dependencies.push(dependency.into());
        self
    }

    /// Check if the script must wait for other modules
    pub fn has_dependencies(&self) -> bool {
        !self.dependencies.is_empty()
    }
}
