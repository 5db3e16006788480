//! Validation schema: field name -> [`ValidationRule`].
//!
//! The schema is handed to the controller once and never changes afterwards.
//! Besides the code builder it can be produced from configuration data
//! through [`RuleConfig`], which mirrors the serializable subset of a rule
//! (everything except custom validator closures):
//!
//! ```
//! use form::ValidationSchema;
//!
//! let schema = ValidationSchema::from_json(r#"{
//!     "username": { "required": true, "minLength": 3, "maxLength": 20 },
//!     "email":    { "email": true }
//! }"#).unwrap();
//! assert_eq!(schema.len(), 2);
//! ```

use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{FormError, Result};
use crate::field::ValidationRule;

/// Ordered mapping of field names to their rules.
#[derive(Debug, Default)]
pub struct ValidationSchema {
    rules: IndexMap<String, ValidationRule>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the rule for `name`.
    pub fn field(mut self, name: impl Into<String>, rule: ValidationRule) -> Self {
        self.rules.insert(name.into(), rule);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ValidationRule> {
        self.rules.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationRule)> {
        self.rules.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Build a schema from configuration entries.
    pub fn from_configs(configs: IndexMap<String, RuleConfig>) -> Result<Self> {
        let mut rules = IndexMap::with_capacity(configs.len());
        for (name, cfg) in configs {
            let rule = cfg.into_rule(&name)?;
            rules.insert(name, rule);
        }
        Ok(Self { rules })
    }

    /// Parse a JSON object of `RuleConfig` entries.
    pub fn from_json(input: &str) -> Result<Self> {
        let configs: IndexMap<String, RuleConfig> = serde_json::from_str(input)?;
        Self::from_configs(configs)
    }

    /// Overlay configured options onto existing rules.
    ///
    /// Options present in a config replace the coded ones; custom validators
    /// survive. Unknown field names add new rules.
    pub fn apply_overrides(mut self, overrides: &IndexMap<String, RuleConfig>) -> Result<Self> {
        for (name, cfg) in overrides {
            let rule = self.rules.shift_remove(name).unwrap_or_default();
            let rule = cfg.apply_to(name, rule)?;
            self.rules.insert(name.clone(), rule);
        }
        Ok(self)
    }
}

/// Serializable form of a [`ValidationRule`] (camelCase keys).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RuleConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length_message: Option<String>,
}

impl RuleConfig {
    pub fn into_rule(&self, field: &str) -> Result<ValidationRule> {
        self.apply_to(field, ValidationRule::default())
    }

    fn apply_to(&self, field: &str, mut rule: ValidationRule) -> Result<ValidationRule> {
        if let Some(required) = self.required {
            rule.required = required;
        }
        if let Some(email) = self.email {
            rule.email = email;
        }
        if let Some(src) = &self.pattern {
            let re = Regex::new(src).map_err(|source| FormError::InvalidPattern {
                field: field.to_string(),
                source,
            })?;
            rule.pattern = Some(re);
        }
        if let Some(msg) = &self.pattern_message {
            rule.pattern_message = Some(msg.clone());
        }
        if let Some(n) = self.min_length {
            rule.min_length = Some(n);
        }
        if let Some(msg) = &self.min_length_message {
            rule.min_length_message = Some(msg.clone());
        }
        if let Some(n) = self.max_length {
            rule.max_length = Some(n);
        }
        if let Some(msg) = &self.max_length_message {
            rule.max_length_message = Some(msg.clone());
        }
        Ok(rule)
    }
}
