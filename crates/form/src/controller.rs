//! The form controller: values, validation, touched tracking and submission.
//!
//! Lifecycle of one instance (re-entrant, no terminal state):
//!
//! ```text
//! clean -> touched -> validated -> valid:   on_submit(values)
//!                               -> invalid: errors shown
//! any state -> reset() -> clean
//! ```
//!
//! Errors are only recomputed by [`FormController::validate`]. Editing a
//! field that is touched and currently errored blanks that one message
//! instead of re-running its rule; the remaining messages stay until the
//! next validation pass.

use tracing::{debug, trace};

use crate::field::ValidationRule;
use crate::props::{FieldProps, FormEvent};
use crate::schema::ValidationSchema;
use crate::state::{ErrorMap, FormState, FormValues, TouchedSet};

/// Construction options. Both parts default to empty.
#[derive(Debug, Default)]
pub struct FormOptions {
    pub default_values: FormValues,
    pub validation_schema: ValidationSchema,
}

/// Stand-in for the host's submit event.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Submit handler produced by [`FormController::handle_submit`].
///
/// Invoking it validates the form and forwards a snapshot of the values to
/// the wrapped callback only when validation passed.
pub struct SubmitHandler<F> {
    on_submit: F,
}

impl<F> SubmitHandler<F>
where
    F: FnMut(&FormValues),
{
    /// Run one submit action. Returns whether `on_submit` was called.
    pub fn handle(&mut self, form: &mut FormController, event: &mut SubmitEvent) -> bool {
        event.prevent_default();
        form.submit(&mut self.on_submit)
    }
}

/// State and behavior for a single form instance.
#[derive(Debug)]
pub struct FormController {
    defaults: FormValues,
    schema: ValidationSchema,
    state: FormState,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(FormOptions::default())
    }
}

impl FormController {
    /// Create a controller. The default values are owned by the controller,
    /// so `reset` always restores exactly what was passed in here.
    pub fn new(options: FormOptions) -> Self {
        let FormOptions {
            default_values,
            validation_schema,
        } = options;
        Self {
            state: FormState::with_values(default_values.clone()),
            defaults: default_values,
            schema: validation_schema,
        }
    }

    pub fn builder() -> FormControllerBuilder {
        FormControllerBuilder::default()
    }

    // --- Accessors --------------------------------------------------------------------------

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.state.errors
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.state.touched
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn schema(&self) -> &ValidationSchema {
        &self.schema
    }

    pub fn default_values(&self) -> &FormValues {
        &self.defaults
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.state.get_value(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.state.error(name)
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.state.is_touched(name)
    }

    // --- Mutation ---------------------------------------------------------------------------

    /// Set one field's value.
    ///
    /// If the field is touched and currently shows an error, that error is
    /// blanked. No rule is evaluated here.
    pub fn handle_change(&mut self, name: &str, value: impl Into<String>) {
        self.state.set_value(name, value);

        if self.state.is_touched(name) && self.state.has_error(name) {
            trace!(field = name, "clearing error on edit");
            self.state.errors.insert(name.to_string(), String::new());
        }
    }

    /// Mark a field as touched. Values and errors are left alone.
    pub fn handle_blur(&mut self, name: &str) {
        self.state.touch(name);
    }

    /// Apply an event produced by [`FieldProps`].
    pub fn dispatch(&mut self, event: FormEvent) {
        trace!(field = event.name(), ?event, "dispatch");
        match event {
            FormEvent::Change { name, value } => self.handle_change(&name, value),
            FormEvent::Blur { name } => self.handle_blur(&name),
        }
    }

    /// Replace the whole value map (e.g. pre-filling an edit dialog).
    pub fn set_values(&mut self, values: FormValues) {
        self.state.values = values;
    }

    /// Replace the whole error map, e.g. with messages from a server round-trip.
    pub fn set_errors(&mut self, errors: ErrorMap) {
        self.state.errors = errors;
    }

    /// Recompute every error from scratch. Returns true when no field failed.
    pub fn validate(&mut self) -> bool {
        let errors: ErrorMap = self
            .schema
            .iter()
            .filter_map(|(name, rule)| {
                rule.check(name, self.state.get_value(name))
                    .map(|msg| (name.to_string(), msg))
            })
            .collect();

        let valid = errors.is_empty();
        debug!(
            valid,
            failed = errors.len(),
            fields = self.schema.len(),
            "form validated"
        );
        self.state.errors = errors;
        valid
    }

    /// Validate and, if valid, call `on_submit` with the current values.
    ///
    /// Returns whether the callback ran.
    pub fn submit<F>(&mut self, mut on_submit: F) -> bool
    where
        F: FnMut(&FormValues),
    {
        if !self.validate() {
            debug!("submit blocked by validation errors");
            return false;
        }
        let snapshot = self.state.values.clone();
        on_submit(&snapshot);
        true
    }

    /// Wrap `on_submit` into a handler the host binds to its submit action.
    pub fn handle_submit<F>(&self, on_submit: F) -> SubmitHandler<F>
    where
        F: FnMut(&FormValues),
    {
        SubmitHandler { on_submit }
    }

    /// Restore the construction-time defaults and clear errors and touched flags.
    pub fn reset(&mut self) {
        debug!("form reset");
        self.state.values = self.defaults.clone();
        self.state.clear_validation();
    }

    // --- Derived ----------------------------------------------------------------------------

    /// View data for one field, with the error gated by its touched flag.
    pub fn field_props(&self, name: &str) -> FieldProps {
        let touched = self.state.is_touched(name);
        FieldProps {
            name: name.to_string(),
            value: self.state.get_value(name).unwrap_or("").to_string(),
            error: touched && self.state.has_error(name),
            helper_text: if touched {
                self.state.error(name).unwrap_or("").to_string()
            } else {
                String::new()
            },
        }
    }
}

/// Builder for [`FormController`].
#[derive(Debug, Default)]
pub struct FormControllerBuilder {
    options: FormOptions,
}

impl FormControllerBuilder {
    pub fn default_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.default_values.insert(name.into(), value.into());
        self
    }

    pub fn default_values(mut self, values: FormValues) -> Self {
        self.options.default_values = values;
        self
    }

    pub fn schema(mut self, schema: ValidationSchema) -> Self {
        self.options.validation_schema = schema;
        self
    }

    /// Add a single rule to the schema being built.
    pub fn rule(mut self, name: impl Into<String>, rule: ValidationRule) -> Self {
        let schema = std::mem::take(&mut self.options.validation_schema);
        self.options.validation_schema = schema.field(name, rule);
        self
    }

    pub fn build(self) -> FormController {
        FormController::new(self.options)
    }
}
