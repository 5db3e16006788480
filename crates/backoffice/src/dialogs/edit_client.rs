use form::{FormController, FormError, FormValues, SubmitEvent, ValidationRule};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{build_form, person_schema, Dialog, FieldSpec};
use crate::action::{Action, UserAction};
use crate::cities::is_known_city;
use crate::config::RuleOverrides;
use crate::dispatch::Dispatch;

pub const FORM_ID: &str = "editClient";

const FIELDS: &[FieldSpec] = &[
    FieldSpec::text("firstName", "First Name"),
    FieldSpec::text("lastName", "Last Name"),
    FieldSpec::text("username", "User Name"),
    FieldSpec::text("email", "Email").optional(),
    FieldSpec::text("phone", "Phone"),
    FieldSpec::text("city", "City"),
];

/// The client currently selected for editing, as delivered by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl ClientRecord {
    /// Form values for this record; missing attributes become empty strings.
    pub fn to_values(&self) -> FormValues {
        let field = |v: &Option<String>| v.clone().unwrap_or_default();
        [
            ("firstName", field(&self.first_name)),
            ("lastName", field(&self.last_name)),
            ("username", field(&self.username)),
            ("phone", field(&self.phone)),
            ("email", field(&self.email)),
            ("city", field(&self.city)),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
    }
}

/// "Edit Client" dialog.
///
/// Opening with a client pre-fills the form. Submitting a valid form
/// dispatches [`UserAction::UpdateUser`] for that client and closes; cancel
/// only closes.
#[derive(Debug)]
pub struct EditClientDialog {
    open: bool,
    current: Option<ClientRecord>,
    form: FormController,
}

impl EditClientDialog {
    pub fn new() -> Self {
        Self::with_overrides(None).expect("built-in client rules are valid")
    }

    pub fn with_overrides(overrides: Option<&RuleOverrides>) -> Result<Self, FormError> {
        let schema = person_schema().field(
            "city",
            ValidationRule::new().optional().validator(|v| {
                if v.is_empty() || is_known_city(v) {
                    Ok(())
                } else {
                    Err(format!("Unknown city: {v}"))
                }
            }),
        );
        Ok(Self {
            open: false,
            current: None,
            form: build_form(FIELDS, schema, overrides)?,
        })
    }

    /// Open for `client` and load its attributes into the form.
    pub fn open(&mut self, client: ClientRecord) {
        self.form.set_values(client.to_values());
        self.current = Some(client);
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn current(&self) -> Option<&ClientRecord> {
        self.current.as_ref()
    }

    /// Submit action. Returns whether an action was dispatched.
    pub fn submit<D: Dispatch>(&mut self, dispatch: &mut D, event: &mut SubmitEvent) -> bool {
        let Some(client) = self.current.as_ref() else {
            warn!("edit submitted without a selected client");
            event.prevent_default();
            return false;
        };
        let id = client.id.clone();
        let role = client.role.clone();

        let mut handler = self.form.handle_submit(|values: &FormValues| {
            info!(client = %id, "updating client");
            dispatch.dispatch(Action::User(UserAction::UpdateUser {
                id: id.clone(),
                role: role.clone(),
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

impl Default for EditClientDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialog for EditClientDialog {
    fn title(&self) -> &'static str {
        "Edit Client"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::ActionLog;
    use pretty_assertions::assert_eq;

    fn client() -> ClientRecord {
        ClientRecord {
            id: "c-42".into(),
            role: Some("client".into()),
            first_name: Some("Imran".into()),
            last_name: Some("Khan".into()),
            username: Some("ikhan".into()),
            phone: Some("03211234567".into()),
            email: None,
            city: Some("Lahore".into()),
        }
    }

    #[test]
    fn open_prefills_values() {
        let mut dialog = EditClientDialog::new();
        dialog.open(client());
        assert!(dialog.is_open());
        assert_eq!(dialog.form().value("firstName"), Some("Imran"));
        assert_eq!(dialog.form().value("email"), Some(""));
        assert_eq!(dialog.form().value("city"), Some("Lahore"));
    }

    #[test]
    fn submit_dispatches_update_for_current_client() {
        let mut dialog = EditClientDialog::new();
        dialog.open(client());
        dialog.form_mut().handle_change("city", "Multan");

        let mut log = ActionLog::new();
        assert!(dialog.submit(&mut log, &mut SubmitEvent::new()));
        assert!(!dialog.is_open());
        match log.last() {
            Some(Action::User(UserAction::UpdateUser { id, role, values })) => {
                assert_eq!(id, "c-42");
                assert_eq!(role.as_deref(), Some("client"));
                assert_eq!(values["city"], "Multan");
            }
            other => panic!("unexpected action: {other:?}"),
        }
    }

    #[test]
    fn unknown_city_is_rejected_but_empty_is_fine() {
        let mut dialog = EditClientDialog::new();
        dialog.open(client());
        dialog.form_mut().handle_change("city", "Atlantis");
        let mut log = ActionLog::new();
        assert!(!dialog.submit(&mut log, &mut SubmitEvent::new()));
        assert_eq!(dialog.form().error("city"), Some("Unknown city: Atlantis"));

        dialog.form_mut().handle_change("city", "");
        assert!(dialog.submit(&mut log, &mut SubmitEvent::new()));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn submit_without_client_is_ignored() {
        let mut dialog = EditClientDialog::new();
        let mut log = ActionLog::new();
        let mut event = SubmitEvent::new();
        assert!(!dialog.submit(&mut log, &mut event));
        assert!(event.default_prevented());
        assert!(log.is_empty());
    }

    #[test]
    fn cancel_keeps_edits() {
        let mut dialog = EditClientDialog::new();
        dialog.open(client());
        dialog.form_mut().handle_change("username", "imran");
        dialog.close();
        assert_eq!(dialog.form().value("username"), Some("imran"));
    }

    #[test]
    fn record_accepts_store_ids() {
        let record: ClientRecord =
            serde_json::from_str(r#"{ "_id": "abc", "firstName": "Sana" }"#).unwrap();
        assert_eq!(record.id, "abc");
        assert_eq!(record.first_name.as_deref(), Some("Sana"));
        assert_eq!(record.to_values()["lastName"], "");
    }
}
