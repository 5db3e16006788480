use form::FormValues;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Refund voucher approval states offered by the filter drawer.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ApprovalStatus {
    Accepted,
    UnderProcess,
    Rejected,
}

impl ApprovalStatus {
    /// Label shown next to the option.
    pub fn label(&self) -> &'static str {
        match self {
            ApprovalStatus::Accepted => "Accepted",
            ApprovalStatus::UnderProcess => "Under Process",
            ApprovalStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UserAction {
    CreateEmployee { values: FormValues },
    UpdateUser {
        id: String,
        role: Option<String>,
        values: FormValues,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RefundAction {
    Filter { approvals: Option<ApprovalStatus> },
}

/// Everything a dialog can hand to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    User(UserAction),
    Refund(RefundAction),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn approval_status_round_trips_through_option_values() {
        let names: Vec<String> = ApprovalStatus::iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["accepted", "underProcess", "rejected"]);
        assert_eq!(
            ApprovalStatus::from_str("underProcess").unwrap(),
            ApprovalStatus::UnderProcess
        );
        assert!(ApprovalStatus::from_str("pending").is_err());
    }

    #[test]
    fn approval_labels_are_spaced() {
        let labels: Vec<&str> = ApprovalStatus::iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Accepted", "Under Process", "Rejected"]);
    }

    #[test]
    fn filter_action_serializes_status() {
        let action = Action::Refund(RefundAction::Filter {
            approvals: Some(ApprovalStatus::UnderProcess),
        });
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "refund": { "type": "filter", "approvals": "underProcess" } })
        );
    }

    #[test]
    fn create_employee_carries_values() {
        let mut values = FormValues::new();
        values.insert("username".into(), "ada".into());
        let action = Action::User(UserAction::CreateEmployee { values });
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "user": { "type": "create_employee", "values": { "username": "ada" } } })
        );
    }
}
