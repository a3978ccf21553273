use log::{trace, warn};

use super::context::ValidationContext;
use super::registry::Registry;
use super::rules::parse_rules;
use crate::binding::Field;
use crate::config::FormConfig;
use crate::errors::FormError;
use crate::request::ValueSource;
use crate::schema::descriptor::{ensure_arity, ensure_kind, shape_mismatch};
use crate::schema::{resolve, FieldDescriptor, FieldRef, Record};

/// Walks a record depth-first and runs every field's rule chain against the
/// raw input in `source`.
///
/// The record itself is only inspected, never changed. The first failing
/// rule ends the walk.
pub fn check_record<S>(
    record: &dyn Record,
    source: &S,
    config: &FormConfig,
    registry: &Registry,
) -> Result<(), FormError>
where
    S: ValueSource + ?Sized,
{
    let source: &dyn ValueSource = &source;
    walk(record, source, config, registry)
}

fn walk(
    record: &dyn Record,
    source: &dyn ValueSource,
    config: &FormConfig,
    registry: &Registry,
) -> Result<(), FormError> {
    let schema = record.schema();
    let views = record.fields();
    ensure_arity(schema, views.len())?;

    for (descriptor, view) in schema.fields().iter().zip(views) {
        match view {
            FieldRef::Nested(inner) => {
                if !descriptor.kind().is_nested() {
                    return Err(shape_mismatch(schema, descriptor, "a nested record"));
                }
                walk(inner, source, config, registry)?;
            }
            FieldRef::Leaf(field) => {
                if descriptor.kind().is_nested() {
                    return Err(shape_mismatch(schema, descriptor, "a leaf value"));
                }
                ensure_kind(schema, descriptor, field.kind())?;
                check_field(descriptor, Some(field), source, config, registry)?;
            }
            FieldRef::Opaque => {
                if descriptor.kind().is_nested() {
                    return Err(shape_mismatch(schema, descriptor, "an opaque value"));
                }
                check_field(descriptor, None, source, config, registry)?;
            }
        }
    }
    Ok(())
}

fn check_field(
    descriptor: &FieldDescriptor,
    value: Option<&dyn Field>,
    source: &dyn ValueSource,
    config: &FormConfig,
    registry: &Registry,
) -> Result<(), FormError> {
    let Some(chain) = descriptor.annotation(&config.valid_field) else {
        return Ok(());
    };
    let title = resolve(descriptor, &config.title_fields);
    let key = resolve(descriptor, &config.key_fields);
    let input = source.value(key).unwrap_or("");

    for rule in parse_rules(chain) {
        let Some(check) = registry.get(&rule.name) else {
            warn!("unknown rule '{}' on field {}", rule.name, descriptor.name());
            return Err(FormError::UnknownRule {
                rule: rule.name,
                field: title.to_string(),
            });
        };
        trace!("checking {} with '{}'", descriptor.name(), rule.name);
        check(ValidationContext {
            input,
            title,
            rule: &rule.name,
            params: &rule.params,
            field: descriptor,
            value,
            source,
        })?;
    }
    Ok(())
}
