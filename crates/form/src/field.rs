//! Per-field validation rules.
//!
//! A [`ValidationRule`] is pure configuration: every option is optional and
//! the controller evaluates them in a fixed order (see
//! [`ValidationRule::check`]). Rules are usually built in code:
//!
//! ```
//! use form::ValidationRule;
//!
//! let rule = ValidationRule::new()
//!     .required()
//!     .min_length(10)
//!     .max_length(15)
//!     .validator(|v| {
//!         if v.chars().all(|c| c.is_ascii_digit()) {
//!             Ok(())
//!         } else {
//!             Err("Phone must contain digits only".into())
//!         }
//!     });
//! assert!(rule.is_required());
//! ```

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::label::format_field_name;

/// Custom check receiving the current field value (`""` when unset).
///
/// `Ok(())` accepts the value, `Err(message)` rejects it. An empty message
/// counts as "no error".
pub type CustomValidator = Box<dyn Fn(&str) -> Result<(), String> + Send + Sync>;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9_.\-]+@([A-Za-z0-9_\-]+\.)+[A-Za-z0-9_\-]{2,4}$")
            .expect("email pattern compiles");
}

/// Declarative constraints for a single field.
#[derive(Default)]
pub struct ValidationRule {
    pub required: bool,
    pub email: bool,
    pub pattern: Option<Regex>,
    pub pattern_message: Option<String>,
    pub min_length: Option<usize>,
    pub min_length_message: Option<String>,
    pub max_length: Option<usize>,
    pub max_length_message: Option<String>,
    pub validate: Option<CustomValidator>,
}

impl ValidationRule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject absent or empty values.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Explicitly mark the field optional (the default).
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Require an e-mail shaped value when one is present.
    pub fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub fn pattern(mut self, re: Regex) -> Self {
        self.pattern = Some(re);
        self
    }

    pub fn pattern_message(mut self, msg: impl Into<String>) -> Self {
        self.pattern_message = Some(msg.into());
        self
    }

    pub fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub fn min_length_message(mut self, msg: impl Into<String>) -> Self {
        self.min_length_message = Some(msg.into());
        self
    }

    pub fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub fn max_length_message(mut self, msg: impl Into<String>) -> Self {
        self.max_length_message = Some(msg.into());
        self
    }

    /// Attach a custom validator closure, evaluated after the built-in checks.
    pub fn validator(
        mut self,
        f: impl Fn(&str) -> Result<(), String> + Send + Sync + 'static,
    ) -> Self {
        self.validate = Some(Box::new(f));
        self
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Evaluate the rule against `value` for the field called `name`.
    ///
    /// Checks run in order: required, email, pattern, min length, max length,
    /// custom validator. The first failing check produces the message and the
    /// remaining ones are skipped. Only `required` and the custom validator
    /// look at empty values; everything else treats them as "nothing to check".
    pub fn check(&self, name: &str, value: Option<&str>) -> Option<String> {
        let label = format_field_name(name);
        let present = value.filter(|v| !v.is_empty());

        if self.required && present.is_none() {
            return Some(format!("{label} is required"));
        }

        if let Some(v) = present {
            if self.email && !EMAIL_RE.is_match(v) {
                return Some(format!("Invalid {} format", label.to_lowercase()));
            }

            if let Some(re) = &self.pattern {
                if !re.is_match(v) {
                    return Some(
                        self.pattern_message
                            .clone()
                            .unwrap_or_else(|| format!("Invalid {} format", label.to_lowercase())),
                    );
                }
            }

            // UTF-16 code units, the unit browsers report for input length.
            let len = v.encode_utf16().count();

            // A zero bound counts as unset.
            if let Some(min) = self.min_length.filter(|n| *n > 0) {
                if len < min {
                    return Some(self.min_length_message.clone().unwrap_or_else(|| {
                        format!("{label} must be at least {min} characters")
                    }));
                }
            }

            if let Some(max) = self.max_length.filter(|n| *n > 0) {
                if len > max {
                    return Some(self.max_length_message.clone().unwrap_or_else(|| {
                        format!("{label} must be no more than {max} characters")
                    }));
                }
            }
        }

        if let Some(f) = &self.validate {
            if let Err(msg) = f(value.unwrap_or("")) {
                if !msg.is_empty() {
                    return Some(msg);
                }
            }
        }

        None
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationRule")
            .field("required", &self.required)
            .field("email", &self.email)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("pattern_message", &self.pattern_message)
            .field("min_length", &self.min_length)
            .field("min_length_message", &self.min_length_message)
            .field("max_length", &self.max_length)
            .field("max_length_message", &self.max_length_message)
            .field("validate", &self.validate.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
