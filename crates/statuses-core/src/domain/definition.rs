//! Raw status definitions, as handed over by the status registration layer.
//!
//! Every attribute is optional so that "not set by the caller" stays observable
//! after decoding. Fields this crate does not know about are kept in `extra`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::errors::StatusError;
use super::labels::StatusLabels;

/// A status definition before any defaults are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusDefinition {
    /// Lookup key for built-in defaults. Missing in the input means empty.
    #[serde(default)]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_count: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<StatusLabels>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_from_search: Option<bool>,

    #[serde(rename = "public", default, skip_serializing_if = "Option::is_none")]
    pub is_public: Option<bool>,

    #[serde(rename = "internal", default, skip_serializing_if = "Option::is_none")]
    pub is_internal: Option<bool>,

    #[serde(rename = "protected", default, skip_serializing_if = "Option::is_none")]
    pub is_protected: Option<bool>,

    #[serde(rename = "private", default, skip_serializing_if = "Option::is_none")]
    pub is_private: Option<bool>,

    #[serde(
        rename = "publicly_queryable",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_publicly_queryable: Option<bool>,

    #[serde(rename = "post_type", default, skip_serializing_if = "Option::is_none")]
    pub post_types: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_admin_status_list: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_admin_all_list: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_metabox_dropdown: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_in_inline_dropdown: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashicon: Option<String>,

    /// Unknown fields, passed through to the descriptor unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StatusDefinition {
    /// Convenience constructor: a definition carrying only its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_label_count(mut self, label_count: impl Into<String>) -> Self {
        self.label_count = Some(label_count.into());
        self
    }

    pub fn with_labels(mut self, labels: StatusLabels) -> Self {
        self.labels = Some(labels);
        self
    }

    pub fn with_post_types<I, S>(mut self, post_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.post_types = Some(post_types.into_iter().map(Into::into).collect());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, StatusError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_value(value: Value) -> Result<Self, StatusError> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Decodes a batch of definitions.
///
/// Accepts either an array of records or an object keyed by status name.
/// In the keyed form the key fills in `name` when the record has none.
pub fn definitions_from_json_str(json: &str) -> Result<Vec<StatusDefinition>, StatusError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items
            .into_iter()
            .map(StatusDefinition::from_json_value)
            .collect(),
        Value::Object(entries) => entries
            .into_iter()
            .map(|(key, value)| {
                let mut definition = StatusDefinition::from_json_value(value)?;
                if definition.name.is_empty() {
                    definition.name = key;
                }
                Ok(definition)
            })
            .collect(),
        other => Err(StatusError::InvalidDefinitions(json_kind(&other).to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::labels::METABOX_DROPDOWN;
    use rstest::rstest;

    #[test]
    fn decodes_host_field_names() {
        let json = r#"
        {
          "name": "archive",
          "label": "Archived",
          "label_count": "Archived (%s)",
          "public": false,
          "publicly_queryable": false,
          "post_type": ["post", "page"],
          "show_in_inline_dropdown": true,
          "labels": { "metabox_dropdown": "Archive it" }
        }"#;
        let definition = StatusDefinition::from_json_str(json).expect("deserialize");

        assert_eq!(definition.name, "archive");
        assert_eq!(definition.label.as_deref(), Some("Archived"));
        assert_eq!(definition.label_count.as_deref(), Some("Archived (%s)"));
        assert_eq!(definition.is_public, Some(false));
        assert_eq!(definition.is_publicly_queryable, Some(false));
        assert_eq!(definition.is_private, None);
        assert_eq!(
            definition.post_types,
            Some(vec!["post".to_string(), "page".to_string()])
        );
        assert_eq!(definition.show_in_inline_dropdown, Some(true));
        assert_eq!(definition.show_in_metabox_dropdown, None);
        assert_eq!(
            definition.labels.as_ref().and_then(|l| l.get(METABOX_DROPDOWN)),
            Some("Archive it")
        );
        assert!(definition.extra.is_empty());
    }

    #[test]
    fn missing_name_decodes_as_empty() {
        let definition = StatusDefinition::from_json_str(r#"{ "label": "Nameless" }"#)
            .expect("deserialize");
        assert_eq!(definition.name, "");
    }

    #[test]
    fn unknown_fields_are_kept() {
        let json = r#"{ "name": "archive", "date_floating": true, "rewrite": { "slug": "old" } }"#;
        let definition = StatusDefinition::from_json_str(json).expect("deserialize");

        assert_eq!(definition.extra.get("date_floating"), Some(&Value::Bool(true)));
        assert!(definition.extra.contains_key("rewrite"));
    }

    #[test]
    fn keyed_object_fills_in_names() {
        let json = r#"
        {
          "archive": { "label": "Archived" },
          "draft": { "name": "draft" },
          "publish": {}
        }"#;
        let definitions = definitions_from_json_str(json).expect("decode");
        let names: Vec<_> = definitions.iter().map(|d| d.name.as_str()).collect();

        assert_eq!(names, vec!["archive", "draft", "publish"]);
    }

    #[test]
    fn array_keeps_input_order() {
        let json = r#"[ { "name": "pending" }, { "name": "archive" } ]"#;
        let definitions = definitions_from_json_str(json).expect("decode");

        assert_eq!(definitions[0].name, "pending");
        assert_eq!(definitions[1].name, "archive");
    }

    #[rstest]
    #[case::string(r#""publish""#)]
    #[case::number("42")]
    #[case::null("null")]
    fn scalar_document_is_rejected(#[case] json: &str) {
        let result = definitions_from_json_str(json);
        assert!(matches!(result, Err(StatusError::InvalidDefinitions(_))));
    }

    #[test]
    fn wrong_field_type_is_a_decode_error() {
        let result = StatusDefinition::from_json_str(r#"{ "name": "x", "public": "yes" }"#);
        assert!(matches!(result, Err(StatusError::Decode(_))));
    }
}
