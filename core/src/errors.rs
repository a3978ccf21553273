use thiserror::Error;

/// **FORM ERROR**
///
/// Every binding or checking failure surfaces as exactly one of these.
/// Traversal stops at the first error, so callers always see the earliest
/// failure in depth-first schema order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Record views disagree with the record's declared schema.
    #[error("SCHEMA ERROR: {message}")]
    Schema { message: String },

    /// Raw input could not be parsed as the field's declared type.
    #[error("FORMAT ERROR: {field} {message}")]
    Format { field: String, message: String },

    /// Parsed value does not fit the field's declared width.
    #[error("RANGE ERROR: {field} {message}")]
    Range { field: String, message: String },

    /// A rule was declared with the wrong arity or an unparsable parameter.
    #[error("RULE PARAMETER ERROR: {rule} - {message}")]
    RuleParameter { rule: String, message: String },

    /// A rule chain names a validator that is not registered.
    #[error("UNKNOWN RULE: {rule} (field {field})")]
    UnknownRule { rule: String, field: String },

    /// A validator rejected the input.
    #[error("{message}")]
    Validation { message: String },
}

impl FormError {
    /// Failure reported by a validator. `message` is shown to end users as-is.
    pub fn invalid(message: impl Into<String>) -> Self {
        FormError::Validation {
            message: message.into(),
        }
    }

    pub fn rule_parameter(rule: impl Into<String>, message: impl Into<String>) -> Self {
        FormError::RuleParameter {
            rule: rule.into(),
            message: message.into(),
        }
    }

    pub fn schema(message: impl Into<String>) -> Self {
        FormError::Schema {
            message: message.into(),
        }
    }

    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            FormError::Schema { .. } => error_codes::SCHEMA_MISMATCH,
            FormError::Format { .. } => error_codes::INVALID_FORMAT,
            FormError::Range { .. } => error_codes::OUT_OF_RANGE,
            FormError::RuleParameter { .. } => error_codes::INVALID_RULE_PARAMETER,
            FormError::UnknownRule { .. } => error_codes::UNKNOWN_RULE,
            FormError::Validation { .. } => error_codes::VALIDATION_FAILED,
        }
    }

    /// True for failures caused by user input rather than by the schema or
    /// the rule declarations.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FormError::Format { .. } | FormError::Range { .. } | FormError::Validation { .. }
        )
    }
}

/// **FORM ERROR CODES**
pub mod error_codes {
    pub const SCHEMA_MISMATCH: &str = "FORM_SCHEMA_MISMATCH";
    pub const INVALID_FORMAT: &str = "FORM_INVALID_FORMAT";
    pub const OUT_OF_RANGE: &str = "FORM_OUT_OF_RANGE";
    pub const INVALID_RULE_PARAMETER: &str = "FORM_INVALID_RULE_PARAMETER";
    pub const UNKNOWN_RULE: &str = "FORM_UNKNOWN_RULE";
    pub const VALIDATION_FAILED: &str = "FORM_VALIDATION_FAILED";
}
