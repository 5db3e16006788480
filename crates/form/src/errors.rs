use thiserror::Error;

/// Errors raised while building a schema from configuration data.
///
/// Field validation failures are never reported through this type; they are
/// plain messages in the controller's error map.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("invalid pattern for field `{field}`: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to parse rule configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T, E = FormError> = std::result::Result<T, E>;
