//! Declarative form state for dialog-driven UIs.
//!
//! A [`FormController`] owns the current field values of one form instance,
//! the immutable [`ValidationSchema`] it was built with, the derived error
//! map and the set of touched fields. The hosting UI feeds change / blur
//! events in, binds a [`SubmitHandler`] to its submit action and renders
//! errors through [`FieldProps`].
//!
//! ```
//! use form::{FormController, ValidationRule, ValidationSchema};
//!
//! let schema = ValidationSchema::new()
//!     .field("username", ValidationRule::new().required().min_length(3).max_length(20));
//! let mut form = FormController::builder()
//!     .default_value("username", "")
//!     .schema(schema)
//!     .build();
//!
//! assert!(!form.validate());
//! assert_eq!(form.error("username"), Some("Username is required"));
//!
//! form.handle_change("username", "abc");
//! assert!(form.validate());
//! ```

pub mod controller;
pub mod errors;
pub mod field;
pub mod label;
pub mod props;
pub mod schema;
pub mod state;

pub use controller::{FormController, FormControllerBuilder, FormOptions, SubmitEvent, SubmitHandler};
pub use errors::FormError;
pub use field::{CustomValidator, ValidationRule};
pub use label::format_field_name;
pub use props::{FieldProps, FormEvent};
pub use schema::{RuleConfig, ValidationSchema};
pub use state::{ErrorMap, FormState, FormValues, TouchedSet};
