use std::fmt;

use crate::binding::Field;
use crate::request::ValueSource;
use crate::schema::{FieldDescriptor, FieldKind};

/// **VALIDATION CONTEXT**
///
/// Everything a validator sees for one rule on one field. Built fresh for
/// every rule invocation and handed over by value.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    /// Raw input; empty when the source has no value.
    pub input: &'a str,
    /// Display title used in failure messages.
    pub title: &'a str,
    /// Name of the rule being run.
    pub rule: &'a str,
    pub params: &'a [String],
    pub field: &'a FieldDescriptor,
    /// Current field value; `None` for opaque fields.
    pub value: Option<&'a dyn Field>,
    pub source: &'a dyn ValueSource,
}

impl<'a> ValidationContext<'a> {
    pub fn kind(&self) -> FieldKind {
        self.field.kind()
    }

    /// Same context with different parameters.
    pub fn with_params(self, params: &'a [String]) -> Self {
        Self { params, ..self }
    }

    /// The single parameter, or the arity error naming this rule.
    pub fn single_param(&self) -> Result<&'a str, crate::errors::FormError> {
        match self.params {
            [param] => Ok(param.as_str()),
            _ => Err(crate::errors::FormError::rule_parameter(
                self.rule,
                format!("expects 1 parameter, got {}", self.params.len()),
            )),
        }
    }
}

impl fmt::Debug for ValidationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("input", &self.input)
            .field("title", &self.title)
            .field("rule", &self.rule)
            .field("params", &self.params)
            .field("field", &self.field.name())
            .field("value", &self.value)
            .field("source", &"<value source>")
            .finish()
    }
}
