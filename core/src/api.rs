pub use crate::binding::{bind_record, CoerceError, Field, ListElem};
pub use crate::config::FormConfig;
pub use crate::errors::{error_codes, FormError};
pub use crate::form::{add_check_func, bind, check, default_form, Form};
pub use crate::request::{parse_form_body, parse_query_string, QueryValues, ValueSource};
pub use crate::schema::{
    resolve, ElemKind, FieldDescriptor, FieldKind, FieldMut, FieldRef, FloatWidth, IntWidth,
    Record, Schema, SchemaBuilder,
};
pub use crate::validation::predicates;
pub use crate::validation::{check_record, parse_rules, CheckFn, Registry, Rule, ValidationContext};
