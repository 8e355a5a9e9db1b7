//! Error types for loading icon attributes from configuration.

use thiserror::Error;

/// Failure raised while building [`crate::IconAttributes`] from external input.
///
/// Rendering never fails; these errors only surface on the loading path.
#[derive(Debug, Error)]
pub enum AttributeError {
    /// Payload was not valid JSON or was not a JSON object.
    #[error("invalid attribute payload")]
    Json(#[from] serde_json::Error),
    /// Attribute value had a JSON type that cannot be expressed as markup.
    #[error("unsupported value for attribute `{name}`")]
    UnsupportedValue {
        /// Attribute name as supplied by the caller.
        name: String,
        /// JSON kind of the rejected value.
        kind: &'static str,
    },
    /// Attribute name was empty.
    #[error("attribute name must not be empty")]
    EmptyName,
}

/// Convenience alias for attribute loading results.
pub type AttributeResult<T> = Result<T, AttributeError>;
