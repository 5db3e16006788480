use form::{FormController, FormError, FormValues, SubmitEvent, ValidationRule};
use tracing::info;

use super::{build_form, person_schema, Dialog, FieldSpec};
use crate::action::{Action, UserAction};
use crate::config::RuleOverrides;
use crate::dispatch::Dispatch;

pub const FORM_ID: &str = "createEmployee";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("firstName", "First Name"),
    FieldSpec::text("lastName", "Last Name"),
    FieldSpec::text("username", "User Name"),
    FieldSpec::text("email", "Email").optional(),
    FieldSpec::text("password", "Password").secret(),
    FieldSpec::text("phone", "Phone"),
];

/// "Add New Employee" dialog.
///
/// Submitting a valid form dispatches [`UserAction::CreateEmployee`], then
/// resets the form and closes. Cancel closes and resets as well.
#[derive(Debug)]
pub struct CreateEmployeeDialog {
    open: bool,
    form: FormController,
}

impl CreateEmployeeDialog {
    pub fn new() -> Self {
        Self::with_overrides(None).expect("built-in employee rules are valid")
    }

    pub fn with_overrides(overrides: Option<&RuleOverrides>) -> Result<Self, FormError> {
        let schema = person_schema()
            .field("password", ValidationRule::new().required().min_length(6).max_length(50));
        Ok(Self {
            open: false,
            form: build_form(FIELDS, schema, overrides)?,
        })
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and reset.
    pub fn close(&mut self) {
        self.open = false;
        self.form.reset();
    }

    /// Submit action. Returns whether an action was dispatched.
    pub fn submit<D: Dispatch>(&mut self, dispatch: &mut D, event: &mut SubmitEvent) -> bool {
        let mut handler = self.form.handle_submit(|values: &FormValues| {
            info!(username = values.get("username").map(String::as_str).unwrap_or(""), "creating employee");
            dispatch.dispatch(Action::User(UserAction::CreateEmployee {
                values: values.clone(),
            }));
        });
        let submitted = handler.handle(&mut self.form, event);
        if submitted {
            self.close();
        }
        submitted
    }
}

impl Default for CreateEmployeeDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialog for CreateEmployeeDialog {
    fn title(&self) -> &'static str {
        "Add New Employee"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        FIELDS
    }

    fn form(&self) -> &FormController {
        &self.form
    }

    fn form_mut(&mut self) -> &mut FormController {
        &mut self.form
    }

    fn is_open(&self) -> bool {
        self.open
    }
}
