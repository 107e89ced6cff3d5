//! Error types

use crate::field::FieldId;

/// Errors raised by the form controller.
///
/// Rule failures are not errors: they show up as field messages and as
/// [`ValidationResult::Invalid`](crate::validation::ValidationResult).
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Submit was triggered while the submit action is disabled.
    #[error("submit is disabled: {} field(s) invalid ({})", .invalid.len(), join_fields(.invalid))]
    SubmitDisabled { invalid: Vec<FieldId> },

    /// An element id that does not name any form field.
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while loading a [`FormConfig`](crate::config::FormConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse form config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("minimum age must be between 1 and 150, got {0}")]
    InvalidMinAge(u32),
}

fn join_fields(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|field| field.element_id())
        .collect::<Vec<_>>()
        .join(", ")
}
