use serde::{Deserialize, Serialize};

use crate::enums::DataType;
use crate::record::non_empty;

/// Description of one configurable input parameter.
///
/// The type does not enforce a non-empty `name`; callers that build a
/// configuration description are expected to check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterDescriptor {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub validation: Option<String>,
    #[serde(default = "default_data_type")]
    pub data_type: Option<DataType>,
    #[serde(default)]
    pub required_on_edit: bool,
    #[serde(default)]
    pub required_on_create: bool,
}

fn default_data_type() -> Option<DataType> {
    Some(DataType::default())
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            validation: None,
            data_type: default_data_type(),
            required_on_edit: false,
            required_on_create: false,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_validation(mut self, validation: impl Into<String>) -> Self {
        self.validation = Some(validation.into());
        self
    }

    #[must_use]
    pub fn with_data_type(mut self, data_type: Option<DataType>) -> Self {
        self.data_type = data_type;
        self
    }

    #[must_use]
    pub fn with_required_on_edit(mut self, required: bool) -> Self {
        self.required_on_edit = required;
        self
    }

    #[must_use]
    pub fn with_required_on_create(mut self, required: bool) -> Self {
        self.required_on_create = required;
        self
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    pub fn validation(&self) -> Option<&str> {
        non_empty(self.validation.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_descriptor_uses_defaults() {
        let arg = ParameterDescriptor::new("interval");
        assert_eq!(arg.data_type, Some(DataType::String));
        assert!(!arg.required_on_edit);
        assert!(!arg.required_on_create);
        assert_eq!(arg.description(), None);
    }

    #[test]
    fn deserializes_with_defaults() {
        let arg: ParameterDescriptor =
            serde_json::from_str(r#"{"name": "interval", "requiredOnCreate": true}"#).unwrap();
        assert_eq!(arg.name, "interval");
        assert_eq!(arg.data_type, Some(DataType::String));
        assert!(arg.required_on_create);
        assert!(!arg.required_on_edit);
    }

    #[test]
    fn deserializes_explicit_data_type() {
        let arg: ParameterDescriptor =
            serde_json::from_str(r#"{"name": "count", "dataType": "NUMBER"}"#).unwrap();
        assert_eq!(arg.data_type, Some(DataType::Number));
    }
}
