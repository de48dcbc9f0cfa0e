//! Bundles group competitions together.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::competition::Competition;

/// Fields accepted when creating or updating a bundle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BundleInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl BundleInput {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Competitions in the order they were attached
    #[serde(default)]
    pub competitions: Vec<Competition>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bundle_without_competitions() {
        let bundle: Bundle = serde_json::from_value(json!({"id": 9, "name": "Spring"})).unwrap();
        assert!(bundle.competitions.is_empty());
        assert_eq!(bundle.name.as_deref(), Some("Spring"));
    }

    #[test]
    fn test_input_skips_missing_description() {
        assert_eq!(
            serde_json::to_string(&BundleInput::named("Spring")).unwrap(),
            r#"{"name":"Spring"}"#
        );
    }
}
