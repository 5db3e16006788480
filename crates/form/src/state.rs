//! Mutable runtime state of one form instance.
//!
//! Holds the captured values, the derived error map and the touched set.
//! Kept free of rule evaluation so it can be cloned, compared and serialized
//! on its own.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};

/// Field name -> current value.
pub type FormValues = IndexMap<String, String>;

/// Field name -> error message. Absent means "no error".
pub type ErrorMap = IndexMap<String, String>;

/// Field name -> whether the field has been blurred at least once.
pub type TouchedSet = IndexMap<String, bool>;

/// Values, errors and touched flags captured while editing a form.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub values: FormValues,
    pub errors: ErrorMap,
    pub touched: TouchedSet,
}

impl FormState {
    pub fn with_values(values: FormValues) -> Self {
        Self {
            values,
            ..Self::default()
        }
    }

    /// Set (or replace) the value for a field.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(String::as_str)
    }

    /// True if the field has a non-empty error message.
    pub fn has_error(&self, key: &str) -> bool {
        self.error(key).is_some_and(|e| !e.is_empty())
    }

    pub fn is_touched(&self, key: &str) -> bool {
        self.touched.get(key).copied().unwrap_or(false)
    }

    pub fn touch(&mut self, key: &str) {
        self.touched.insert(key.to_string(), true);
    }

    pub fn clear_validation(&mut self) {
        self.errors.clear();
        self.touched.clear();
    }

    /// Snapshot of the values as a JSON object (all values as strings).
    pub fn values_json(&self) -> JsonValue {
        let map: JsonMap<String, JsonValue> = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), JsonValue::String(v.clone())))
            .collect();
        JsonValue::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_error_is_not_an_error() {
        let mut state = FormState::default();
        state.errors.insert("phone".into(), String::new());
        assert!(!state.has_error("phone"));
        state.errors.insert("phone".into(), "Phone is required".into());
        assert!(state.has_error("phone"));
    }

    #[test]
    fn untouched_by_default() {
        let mut state = FormState::default();
        assert!(!state.is_touched("email"));
        state.touch("email");
        assert!(state.is_touched("email"));
    }

    #[test]
    fn values_serialize_as_object() {
        let mut state = FormState::default();
        state.set_value("firstName", "Ada");
        state.set_value("phone", "03001234567");
        assert_eq!(
            state.values_json(),
            json!({ "firstName": "Ada", "phone": "03001234567" })
        );
    }
}
