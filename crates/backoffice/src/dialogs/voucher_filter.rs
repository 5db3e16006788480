use std::str::FromStr;

use form::{FormController, FormError, FormValues, SubmitEvent, ValidationRule, ValidationSchema};
use tracing::info;

use super::{build_form, Dialog, FieldSpec};
use crate::action::{Action, ApprovalStatus, RefundAction};
use crate::config::RuleOverrides;
use crate::dispatch::Dispatch;

pub const FORM_ID: &str = "voucherFilter";

const FIELDS: &[FieldSpec] = &[FieldSpec::text("approvals", "Approvals")];

/// Right-hand "Filter Items" drawer on the refund voucher list.
///
/// Apply dispatches [`RefundAction::Filter`], clears the filtered flag,
/// resets the filters and closes. Reset only clears the filters.
#[derive(Debug)]
pub struct VoucherFilterDrawer {
    open: bool,
    is_filtered: bool,
    form: FormController,
}

impl VoucherFilterDrawer {
    pub fn new() -> Self {
        Self::with_overrides(None).expect("built-in filter rules are valid")
    }

    pub fn with_overrides(overrides: Option<&RuleOverrides>) -> Result<Self, FormError> {
        let schema = ValidationSchema::new().field(
            "approvals",
            ValidationRule::new().validator(|v| {
                if v.is_empty() || ApprovalStatus::from_str(v).is_ok() {
                    Ok(())
                } else {
                    Err(format!("Unknown approval status: {v}"))
                }
            }),
        );
        Ok(Self {
            open: false,
            is_filtered: false,
            form: build_form(FIELDS, schema, overrides)?,
        })
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_filtered(&self) -> bool {
        self.is_filtered
    }

    pub fn set_filtered(&mut self, filtered: bool) {
        self.is_filtered = filtered;
    }

    /// Select an approval status, or clear the selection with `None`.
    pub fn select(&mut self, status: Option<ApprovalStatus>) {
        let value = status.map(|s| s.to_string()).unwrap_or_default();
        self.form.handle_change("approvals", value);
    }

    pub fn selected(&self) -> Option<ApprovalStatus> {
        self.form
            .value("approvals")
            .and_then(|v| ApprovalStatus::from_str(v).ok())
    }

    /// "Reset" button: drop the current selection.
    pub fn reset_filters(&mut self) {
        self.form.reset();
    }

    /// "Apply Filters" button. Returns whether an action was dispatched.
    pub fn apply<D: Dispatch>(&mut self, dispatch: &mut D, event: &mut SubmitEvent) -> bool {
        let mut handler = self.form.handle_submit(|values: &FormValues| {
            let approvals = values
                .get("approvals")
                .and_then(|v| ApprovalStatus::from_str(v).ok());
            info!(?approvals, "filtering refund vouchers");
            dispatch.dispatch(Action::Refund(RefundAction::Filter { approvals }));
        });
        let applied = handler.handle(&mut self.form, event);
        if applied {
            self.is_filtered = false;
            self.form.reset();
            self.close();
        }
        applied
    }
}

impl Default for VoucherFilterDrawer {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialog for VoucherFilterDrawer {
    fn title(&self) -> &'static str {
        "Filter Items"
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
