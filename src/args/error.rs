//! Error taxonomy for option parsing and binding.

use thiserror::Error;

/// Boxed conversion failure carried as the cause of [`ArgsError::InvalidValueFormat`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised while parsing an argument list against a schema.
///
/// Every message starts with the offending flag (or field) name.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// A single-value or list option matched with fewer values than required.
    #[error("{flag}: insufficient arguments")]
    InsufficientArguments { flag: String },

    /// A flag or single-value option received more values than it accepts.
    #[error("{flag}: too many arguments")]
    TooManyArguments { flag: String },

    /// The conversion function rejected a raw token.
    #[error("{flag}: invalid value {raw:?}: {source}")]
    InvalidValueFormat {
        flag: String,
        raw: String,
        #[source]
        source: BoxError,
    },

    /// A schema field was declared without a flag.
    #[error("{field}: no flag declared for field")]
    MissingSchemaAnnotation { field: String },

    /// A schema field declares a flag whose token could be read as a value.
    #[error("{field}: invalid flag name '{flag}'")]
    InvalidFlagName { field: String, flag: String },

    /// A schema field names a kind that has no registered parser.
    #[error("{field}: no parser registered for kind '{kind}'")]
    UnsupportedFieldType { field: String, kind: String },

    /// A bound field was read back as the wrong type, or was never bound.
    #[error("{field}: expected {expected} value")]
    FieldMismatch {
        field: String,
        expected: &'static str,
    },
}

impl ArgsError {
    /// The flag this error refers to, for flag-scoped variants.
    pub fn flag(&self) -> Option<&str> {
        match self {
            ArgsError::InsufficientArguments { flag }
            | ArgsError::TooManyArguments { flag }
            | ArgsError::InvalidValueFormat { flag, .. } => Some(flag),
            ArgsError::MissingSchemaAnnotation { .. }
            | ArgsError::InvalidFlagName { .. }
            | ArgsError::UnsupportedFieldType { .. }
            | ArgsError::FieldMismatch { .. } => None,
        }
    }

    /// Stable identifier for the error kind.
    pub fn error_type(&self) -> &'static str {
        match self {
            ArgsError::InsufficientArguments { .. } => "insufficient_arguments",
            ArgsError::TooManyArguments { .. } => "too_many_arguments",
            ArgsError::InvalidValueFormat { .. } => "invalid_value_format",
            ArgsError::MissingSchemaAnnotation { .. } => "missing_schema_annotation",
            ArgsError::InvalidFlagName { .. } => "invalid_flag_name",
            ArgsError::UnsupportedFieldType { .. } => "unsupported_field_type",
            ArgsError::FieldMismatch { .. } => "field_mismatch",
        }
    }
}
