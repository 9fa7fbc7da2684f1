//! Shape classification for configuration nodes.
//!
//! Every decoder first sorts its node into one of the tags below and only then
//! extracts fields. The accepted encodings of each concept are therefore
//! listed in one place per section.

use std::fmt;

use serde_json::{Map, Value};

/// Runtime kind of any JSON node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a node
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepted encodings of a path alias value
#[derive(Debug, PartialEq)]
pub enum PathShape<'a> {
    /// `"alias": "target"`
    Plain(&'a str),
    /// `"alias": { "path": ..., "defaultBundle": ... }`
    Structured(&'a Map<String, Value>),
    Unrecognized(JsonKind),
}

impl<'a> PathShape<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(target) => Self::Plain(target),
            Value::Object(fields) => Self::Structured(fields),
            other => Self::Unrecognized(JsonKind::of(other)),
        }
    }
}

/// Accepted encodings of a shim entry value
#[derive(Debug, PartialEq)]
pub enum ShimShape<'a> {
    /// `"module": { "exports": ..., "deps": [...] }`
    Declared(&'a Map<String, Value>),
    Unrecognized(JsonKind),
}

impl<'a> ShimShape<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Object(fields) => Self::Declared(fields),
            other => Self::Unrecognized(JsonKind::of(other)),
        }
    }
}

/// Accepted encodings of a bundle declaration
#[derive(Debug, PartialEq)]
pub enum BundleShape<'a> {
    /// `"bundle": ["module", ...]`
    List(&'a [Value]),
    /// `"bundle": { "outputPath": ..., "includes": [...], "items": [...], "virtual": true }`
    Declared(&'a Map<String, Value>),
    Unrecognized(JsonKind),
}

impl<'a> BundleShape<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::Array(elements) => Self::List(elements),
            Value::Object(fields) => Self::Declared(fields),
            other => Self::Unrecognized(JsonKind::of(other)),
        }
    }
}

/// Accepted encodings of a single bundle item
#[derive(Debug, PartialEq)]
pub enum ItemShape<'a> {
    /// `"module"`
    Module(&'a str),
    /// `{ "path": ..., "compression": ... }`
    Annotated(&'a Map<String, Value>),
    /// Anything else decodes to an empty item
    Unrecognized(JsonKind),
}

impl<'a> ItemShape<'a> {
    pub fn classify(value: &'a Value) -> Self {
        match value {
            Value::String(module) => Self::Module(module),
            Value::Object(fields) => Self::Annotated(fields),
            other => Self::Unrecognized(JsonKind::of(other)),
        }
    }
}

/// String representation of a node: strings verbatim, everything else as
/// compact JSON text
pub fn render(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Rendered field value, absent when the key is missing or `null`
pub fn optional_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        None | Some(Value::Null) => None,
        Some(value) => Some(render(value)),
    }
}

/// Rendered elements of an array field, empty when the field is not an array
pub fn text_list(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    match fields.get(key) {
        Some(Value::Array(elements)) => elements.iter().map(render).collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_kind() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(false)), JsonKind::Boolean);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("a")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
        assert_eq!(JsonKind::Number.to_string(), "number");
    }

    #[test]
    fn test_path_shapes() {
        assert_eq!(PathShape::classify(&json!("lib/jquery")), PathShape::Plain("lib/jquery"));
        assert!(matches!(
            PathShape::classify(&json!({"path": "a"})),
            PathShape::Structured(_)
        ));
        assert_eq!(
            PathShape::classify(&json!(5)),
            PathShape::Unrecognized(JsonKind::Number)
        );
        assert_eq!(
            PathShape::classify(&json!(["a"])),
            PathShape::Unrecognized(JsonKind::Array)
        );
    }

    #[test]
    fn test_shim_shapes() {
        assert!(matches!(ShimShape::classify(&json!({})), ShimShape::Declared(_)));
        assert_eq!(
            ShimShape::classify(&json!("Backbone")),
            ShimShape::Unrecognized(JsonKind::String)
        );
    }

    #[test]
    fn test_bundle_shapes() {
        let list = json!(["a", "b"]);
        match BundleShape::classify(&list) {
            BundleShape::List(elements) => assert_eq!(elements.len(), 2),
            other => panic!("unexpected shape: {other:?}"),
        }
        assert!(matches!(BundleShape::classify(&json!({})), BundleShape::Declared(_)));
        assert_eq!(
            BundleShape::classify(&json!(true)),
            BundleShape::Unrecognized(JsonKind::Boolean)
        );
    }

    #[test]
    fn test_item_shapes() {
        assert_eq!(ItemShape::classify(&json!("app")), ItemShape::Module("app"));
        assert!(matches!(
            ItemShape::classify(&json!({"path": "app"})),
            ItemShape::Annotated(_)
        ));
        assert_eq!(ItemShape::classify(&json!(42)), ItemShape::Unrecognized(JsonKind::Number));
        assert_eq!(ItemShape::classify(&json!(null)), ItemShape::Unrecognized(JsonKind::Null));
    }

    #[test]
    fn test_render() {
        assert_eq!(render(&json!("plain")), "plain");
        assert_eq!(render(&json!(42)), "42");
        assert_eq!(render(&json!(true)), "true");
        assert_eq!(render(&json!({"a": 1})), r#"{"a":1}"#);
    }

    #[test]
    fn test_field_helpers() {
        let fields = json!({"exports": "$", "none": null, "deps": ["a", 2], "scalar": "x"});
        let fields = fields.as_object().unwrap();

        assert_eq!(optional_text(fields, "exports").as_deref(), Some("$"));
        assert_eq!(optional_text(fields, "none"), None);
        assert_eq!(optional_text(fields, "missing"), None);
        assert_eq!(text_list(fields, "deps"), vec!["a", "2"]);
        assert!(text_list(fields, "scalar").is_empty());
        assert!(text_list(fields, "missing").is_empty());
    }
}
