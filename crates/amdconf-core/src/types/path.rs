//! Path alias types.

use serde::{Deserialize, Serialize};

/// Named module-path mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathAlias {
    pub key: String,
    pub target: String,
    /// Only set by the structured form, and only when it names a bundle
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_bundle: Option<String>,
}

impl PathAlias {
    /// Create an alias declared as a plain string
    pub fn new(key: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            target: target.into(),
            default_bundle: None,
        }
    }

    /// Tag the alias with a default bundle
    pub fn with_default_bundle(mut self, bundle: impl Into<String>) -> Self {
        self.default_bundle = Some(bundle.into());
        self
    }

    /// Check if the alias tags a default bundle
    pub fn has_default_bundle(&self) -> bool {
        self.default_bundle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_alias() {
        let alias = PathAlias::new("jquery", "lib/jquery-1.11.0");

        assert_eq!(alias.key, "jquery");
        assert_eq!(alias.target, "lib/jquery-1.11.0");
        assert!(!alias.has_default_bundle());
    }

    #[test]
    fn test_structured_alias() {
        let alias = PathAlias::new("app", "scripts/app").with_default_bundle("core");

        assert_eq!(alias.default_bundle.as_deref(), Some("core"));
        assert!(alias.has_default_bundle());
    }

    #[test]
    fn test_serializes_camel_case() {
        let alias = PathAlias::new("app", "scripts/app").with_default_bundle("core");
        let json = serde_json::to_value(&alias).unwrap();

        assert_eq!(json["defaultBundle"], "core");
        assert!(serde_json::to_value(PathAlias::new("a", "b")).unwrap().get("defaultBundle").is_none());
    }
}
