//! Dialogs and drawers backed by a [`FormController`].
//!
//! Each dialog declares its fields ([`FieldSpec`]), builds its own rules and
//! owns the open flag. Submitting validates through the controller and, when
//! valid, turns the values into an [`Action`](crate::Action) for
//! [`Dispatch`](crate::Dispatch).

pub mod create_employee;
pub mod edit_client;
pub mod voucher_filter;

pub use create_employee::CreateEmployeeDialog;
pub use edit_client::{ClientRecord, EditClientDialog};
pub use voucher_filter::VoucherFilterDrawer;

use form::{FieldProps, FormController, FormError, FormValues, ValidationRule, ValidationSchema};

use crate::config::RuleOverrides;

/// Ids used to look up rule overrides in `forms.json5`.
pub const FORM_IDS: &[&str] = &[
    create_employee::FORM_ID,
    edit_client::FORM_ID,
    voucher_filter::FORM_ID,
];

/// Static description of one input row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    pub secret: bool,
}

impl FieldSpec {
    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder: None,
            secret: false,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.placeholder = Some("Optional");
        self
    }

    pub const fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    /// What the input row shows for `value`: the placeholder while empty,
    /// one bullet per character for secret fields.
    pub fn display(&self, value: &str) -> String {
        if value.is_empty() {
            self.placeholder.unwrap_or_default().to_string()
        } else if self.secret {
            "\u{2022}".repeat(value.chars().count())
        } else {
            value.to_string()
        }
    }
}

/// Shared surface of every form-backed dialog.
pub trait Dialog {
    fn title(&self) -> &'static str;
    fn fields(&self) -> &'static [FieldSpec];
    fn form(&self) -> &FormController;
    fn form_mut(&mut self) -> &mut FormController;
    fn is_open(&self) -> bool;

    /// Props for every declared field, in display order.
    fn field_props(&self) -> Vec<FieldProps> {
        self.fields()
            .iter()
            .map(|f| self.form().field_props(f.name))
            .collect()
    }
}

/// Name and contact rules shared by the employee and client dialogs.
pub(crate) fn person_schema() -> ValidationSchema {
    ValidationSchema::new()
        .field("firstName", ValidationRule::new().required().min_length(2).max_length(50))
        .field("lastName", ValidationRule::new().required().min_length(2).max_length(50))
        .field("username", ValidationRule::new().required().min_length(3).max_length(20))
        .field("phone", ValidationRule::new().required().min_length(10).max_length(15))
}

/// Default values: every declared field starts out empty.
pub(crate) fn empty_values(fields: &[FieldSpec]) -> FormValues {
    fields
        .iter()
        .map(|f| (f.name.to_string(), String::new()))
        .collect()
}

/// Build the controller, layering configured overrides over the coded rules.
pub(crate) fn build_form(
    fields: &[FieldSpec],
    schema: ValidationSchema,
    overrides: Option<&RuleOverrides>,
) -> Result<FormController, FormError> {
    let schema = match overrides {
        Some(o) => schema.apply_overrides(o)?,
        None => schema,
    };
    Ok(FormController::builder()
        .default_values(empty_values(fields))
        .schema(schema)
        .build())
}
