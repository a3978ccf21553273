//! # FORM CONFIGURATION
//!
//! **PURPOSE**: Names the annotation keys the engine reads from field
//! descriptors. Two forms with different configurations can coexist.

use serde::{Deserialize, Serialize};

use crate::errors::FormError;

/// **ANNOTATION KEY CONFIGURATION**
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// **EXTERNAL KEY CANDIDATES** - first non-empty annotation names the input key
    pub key_fields: Vec<String>,

    /// **TITLE CANDIDATES** - first non-empty annotation names the field in messages
    pub title_fields: Vec<String>,

    /// **RULE CHAIN KEY**
    pub valid_field: String,

    /// **DEFAULT VALUE KEY**
    pub default_field: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            key_fields: vec!["form".to_string(), "json".to_string()],
            title_fields: vec!["title".to_string(), "label".to_string(), "json".to_string()],
            valid_field: "valid".to_string(),
            default_field: "default".to_string(),
        }
    }
}

impl FormConfig {
    /// **LOAD FROM JSON** - missing keys keep their defaults
    pub fn from_json(document: &str) -> Result<Self, FormError> {
        serde_json::from_str(document)
            .map_err(|e| FormError::schema(format!("Invalid form configuration: {}", e)))
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn with_key_fields<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_fields = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_title_fields<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.title_fields = keys.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_valid_field(mut self, key: impl Into<String>) -> Self {
        self.valid_field = key.into();
        self
    }

    pub fn with_default_field(mut self, key: impl Into<String>) -> Self {
        self.default_field = key.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = FormConfig::default();
        assert_eq!(config.key_fields, vec!["form", "json"]);
        assert_eq!(config.title_fields, vec!["title", "label", "json"]);
        assert_eq!(config.valid_field, "valid");
        assert_eq!(config.default_field, "default");
    }

    #[test]
    fn test_config_partial_json() {
        let config = FormConfig::from_json(r#"{"valid_field": "rules", "key_fields": ["query"]}"#)
            .unwrap();
        assert_eq!(config.valid_field, "rules");
        assert_eq!(config.key_fields, vec!["query"]);
        assert_eq!(config.title_fields, vec!["title", "label", "json"]);
    }

    #[test]
    fn test_config_invalid_json() {
        let result = FormConfig::from_json("{not json");
        assert!(matches!(result, Err(FormError::Schema { .. })));
    }

    #[test]
    fn test_config_json_roundtrip() {
        let config = FormConfig::default().with_title_fields(["label"]);
        let parsed = FormConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_config_builders() {
        let config = FormConfig::default()
            .with_key_fields(["param"])
            .with_valid_field("check")
            .with_default_field("fallback");
        assert_eq!(config.key_fields, vec!["param"]);
        assert_eq!(config.valid_field, "check");
        assert_eq!(config.default_field, "fallback");
    }
}
