//! Per-field view data and the events a bound input emits.

use serde::{Deserialize, Serialize};

/// Input event for a single field, applied via [`FormController::dispatch`].
///
/// [`FormController::dispatch`]: crate::FormController::dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    Change { name: String, value: String },
    Blur { name: String },
}

impl FormEvent {
    /// Field the event is bound to.
    pub fn name(&self) -> &str {
        match self {
            FormEvent::Change { name, .. } | FormEvent::Blur { name } => name,
        }
    }
}

/// Everything an input widget needs to render one field.
///
/// `error` and `helper_text` are gated by the touched flag: an untouched
/// field never shows its message, even if validation produced one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProps {
    pub name: String,
    pub value: String,
    pub error: bool,
    pub helper_text: String,
}

impl FieldProps {
    /// Change event bound to this field.
    pub fn change(&self, value: impl Into<String>) -> FormEvent {
        FormEvent::Change {
            name: self.name.clone(),
            value: value.into(),
        }
    }

    /// Blur event bound to this field.
    pub fn blur(&self) -> FormEvent {
        FormEvent::Blur {
            name: self.name.clone(),
        }
    }
}
