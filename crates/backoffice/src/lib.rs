//! Backoffice dialogs built on the `form` controller.
//!
//! Every dialog owns one [`form::FormController`] and talks to the outside
//! world only through [`Dispatch`]: a successful submit turns the form values
//! into an [`Action`] and hands it over.

pub mod action;
pub mod cities;
pub mod config;
pub mod dialogs;
pub mod dispatch;

pub use action::{Action, ApprovalStatus, RefundAction, UserAction};
pub use dialogs::{CreateEmployeeDialog, Dialog, EditClientDialog, FieldSpec, VoucherFilterDrawer};
pub use dispatch::{ActionLog, Dispatch};
