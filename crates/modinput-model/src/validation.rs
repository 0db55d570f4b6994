use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Value of a single parameter in a validation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// From a `<param>` element.
    Single(String),
    /// From a `<param_list>` element, in document order.
    List(Vec<String>),
}

impl ParamValue {
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ParamValue::Single(value) => Some(value),
            ParamValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ParamValue::Single(_) => None,
            ParamValue::List(values) => Some(values),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::List(values)
    }
}

/// A proposed configuration sent by the host for validation.
///
/// `metadata` holds the host-level values (`server_host`, `server_uri`,
/// `session_key`, `checkpoint_dir`, ...) plus `name`, the stanza being
/// validated. `parameters` holds the stanza's parameters by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationRequest {
    pub metadata: BTreeMap<String, String>,
    pub parameters: BTreeMap<String, ParamValue>,
}

impl ValidationRequest {
    pub const NAME_KEY: &'static str = "name";

    /// Name of the stanza under validation.
    pub fn name(&self) -> Option<&str> {
        self.metadata_value(Self::NAME_KEY)
    }

    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    pub fn parameter(&self, name: &str) -> Option<&ParamValue> {
        self.parameters.get(name)
    }
}
