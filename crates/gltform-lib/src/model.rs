//! The dotfile record and the parameters used to write it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{GltformError, Result};

/// Contents of the `.gltform` file.
///
/// Every field decodes to `""` when its key is absent or its value is null.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigRecord {
    /// Workspace/space name. Only needed when a project has to be created.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub space_name: String,

    /// Platform project identifier.
    #[serde(deserialize_with = "null_as_empty")]
    pub project_id: String,

    /// Base URL of the remote service this record belongs to.
    #[serde(deserialize_with = "null_as_empty")]
    pub rest_url: String,

    /// Workspace used in GLP mode.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub glp_workspace: String,

    /// Role used in GLP mode.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub glp_role: String,

    /// Deprecated bearer token. Read for older callers; never written by `save`.
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_empty")]
    pub access_token: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Typed write parameters for [`crate::ConfigStore::save`].
///
/// There is no token field, so a save can never persist one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigFields {
    pub space_name: String,
    pub project_id: String,
    pub rest_url: String,
    pub glp_workspace: String,
    pub glp_role: String,
}

impl ConfigFields {
    /// Keys a loosely-typed caller must supply.
    pub const KEYS: [&'static str; 5] = [
        "space_name",
        "project_id",
        "rest_url",
        "glp_role",
        "glp_workspace",
    ];

    #[must_use]
    pub fn new(project_id: impl Into<String>, rest_url: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            rest_url: rest_url.into(),
            ..Default::default()
        }
    }

    /// Validate an untyped key/value map into typed fields.
    ///
    /// Every key in [`Self::KEYS`] must be present and hold a string. Other
    /// keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ContractViolation` naming the first key that is missing or
    /// not a string.
    pub fn from_untyped(map: &Map<String, Value>) -> Result<Self> {
        let field = |key: &str| -> Result<String> {
            match map.get(key) {
                Some(Value::String(s)) => Ok(s.clone()),
                Some(other) => Err(GltformError::contract(
                    key,
                    format!("expected a string, got {}", kind(other)),
                )),
                None => Err(GltformError::contract(key, "missing key")),
            }
        };

        Ok(Self {
            space_name: field("space_name")?,
            project_id: field("project_id")?,
            rest_url: field("rest_url")?,
            glp_role: field("glp_role")?,
            glp_workspace: field("glp_workspace")?,
        })
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<&ConfigFields> for ConfigRecord {
    fn from(fields: &ConfigFields) -> Self {
        Self {
            space_name: fields.space_name.clone(),
            project_id: fields.project_id.clone(),
            rest_url: fields.rest_url.clone(),
            glp_workspace: fields.glp_workspace.clone(),
            glp_role: fields.glp_role.clone(),
            access_token: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn untyped(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_from_untyped_all_keys() {
        let map = untyped(json!({
            "space_name": "space",
            "project_id": "proj-1",
            "rest_url": "https://api.example.com",
            "glp_role": "admin",
            "glp_workspace": "ws-9",
            "ignored": 42,
        }));

        let fields = ConfigFields::from_untyped(&map).unwrap();
        assert_eq!(fields.space_name, "space");
        assert_eq!(fields.project_id, "proj-1");
        assert_eq!(fields.rest_url, "https://api.example.com");
        assert_eq!(fields.glp_role, "admin");
        assert_eq!(fields.glp_workspace, "ws-9");
    }

    #[test]
    fn test_from_untyped_missing_rest_url() {
        let map = untyped(json!({
            "space_name": "",
            "project_id": "proj-1",
            "glp_role": "",
            "glp_workspace": "",
        }));

        let err = ConfigFields::from_untyped(&map).unwrap_err();
        match err {
            GltformError::ContractViolation { field, reason } => {
                assert_eq!(field, "rest_url");
                assert_eq!(reason, "missing key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_from_untyped_missing_space_name_is_not_defaulted() {
        let map = untyped(json!({
            "project_id": "proj-1",
            "rest_url": "https://api.example.com",
            "glp_role": "",
            "glp_workspace": "",
        }));

        let err = ConfigFields::from_untyped(&map).unwrap_err();
        assert!(matches!(err, GltformError::ContractViolation { ref field, .. } if field == "space_name"));
    }

    #[test]
    fn test_from_untyped_non_string_value() {
        let map = untyped(json!({
            "space_name": "",
            "project_id": 17,
            "rest_url": "https://api.example.com",
            "glp_role": "",
            "glp_workspace": "",
        }));

        let err = ConfigFields::from_untyped(&map).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Contract violation: project_id: expected a string, got a number"
        );
    }

    #[test]
    fn test_record_from_fields_never_sets_token() {
        let record = ConfigRecord::from(&ConfigFields {
            glp_role: "viewer".to_string(),
            ..ConfigFields::new("p", "https://x")
        });
        assert_eq!(record.project_id, "p");
        assert_eq!(record.rest_url, "https://x");
        assert_eq!(record.glp_role, "viewer");
        assert!(record.access_token.is_empty());
    }

    #[test]
    fn test_null_values_decode_as_empty() {
        let record: ConfigRecord = serde_yaml::from_str(
            "glp_role: ~\nspace_name: null\nproject_id: p\nrest_url: u\naccess_token:\n",
        )
        .unwrap();
        assert_eq!(record.glp_role, "");
        assert_eq!(record.space_name, "");
        assert_eq!(record.access_token, "");
        assert_eq!(record.project_id, "p");
        assert_eq!(record.rest_url, "u");
    }

    #[test]
    fn test_quoted_tilde_stays_a_string() {
        let record: ConfigRecord = serde_yaml::from_str("glp_role: '~'\n").unwrap();
        assert_eq!(record.glp_role, "~");
    }
}
