use log::trace;

use super::coerce::CoerceError;
use crate::config::FormConfig;
use crate::errors::FormError;
use crate::request::ValueSource;
use crate::schema::descriptor::{ensure_arity, ensure_kind, shape_mismatch};
use crate::schema::{resolve, FieldDescriptor, FieldMut, Record};

/// Walks a record depth-first and assigns every writable leaf from `source`.
///
/// Stops at the first failure. Fields assigned before the failure keep
/// their new values.
pub fn bind_record<S>(
    record: &mut dyn Record,
    source: &S,
    config: &FormConfig,
) -> Result<(), FormError>
where
    S: ValueSource + ?Sized,
{
    let schema = record.schema();
    let slots = record.fields_mut();
    ensure_arity(schema, slots.len())?;

    for (descriptor, slot) in schema.fields().iter().zip(slots) {
        match slot {
            FieldMut::Nested(inner) => {
                if !descriptor.kind().is_nested() {
                    return Err(shape_mismatch(schema, descriptor, "a nested record"));
                }
                bind_record(inner, source, config)?;
            }
            FieldMut::Leaf(field) => {
                if descriptor.kind().is_nested() {
                    return Err(shape_mismatch(schema, descriptor, "a leaf value"));
                }
                ensure_kind(schema, descriptor, field.kind())?;
                if !descriptor.is_writable() {
                    continue;
                }
                let Some(input) = input_for(descriptor, source, config) else {
                    continue;
                };
                let title = resolve(descriptor, &config.title_fields);
                trace!("binding {}.{} ({})", schema.name(), descriptor.name(), descriptor.kind());
                field
                    .assign(input)
                    .map_err(|e| coerce_failure(title, e))?;
            }
            FieldMut::Skip => {
                trace!("skipping {}.{}", schema.name(), descriptor.name());
            }
        }
    }
    Ok(())
}

/// Raw input from the source, falling back to the `default` annotation.
fn input_for<'a, S>(
    descriptor: &'a FieldDescriptor,
    source: &'a S,
    config: &FormConfig,
) -> Option<&'a str>
where
    S: ValueSource + ?Sized,
{
    let key = resolve(descriptor, &config.key_fields);
    source
        .value(key)
        .filter(|v| !v.is_empty())
        .or_else(|| descriptor.annotation(&config.default_field))
}

fn coerce_failure(title: &str, err: CoerceError) -> FormError {
    match err {
        CoerceError::Format(message) => FormError::Format {
            field: title.to_string(),
            message,
        },
        CoerceError::Range(message) => FormError::Range {
            field: title.to_string(),
            message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, FieldRef, Schema};
    use chrono::{DateTime, Utc};
    use std::collections::HashMap;

    crate::record! {
        #[derive(Debug, Default, Clone, PartialEq)]
        struct Base {
            base_int: i64,
            base_uint: u8,
        }
    }

    crate::record! {
        #[derive(Debug, Default, Clone, PartialEq)]
        struct Profile {
            base: Base [nested],
            name: String => { "form": "username", "title": "User name" },
            age: i32 => { "json": "age_years" },
            weight: f32,
            is_admin: bool,
            born: DateTime<Utc>,
            tags: Vec<String>,
            scores: Vec<i16>,
            locked: String [readonly],
            greeting: String => { "default": "hello" },
            retries: u32 => { "default": "3" },
        }
    }

    fn source(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn bind(profile: &mut Profile, pairs: &[(&str, &str)]) -> Result<(), FormError> {
        bind_record(profile, &source(pairs), &FormConfig::default())
    }

    #[test]
    fn test_bind_all_kinds() {
        let mut p = Profile::default();
        bind(
            &mut p,
            &[
                ("base_int", "-7"),
                ("base_uint", "200"),
                ("username", "alice"),
                ("age_years", "30"),
                ("weight", "60.5"),
                ("is_admin", "yes"),
                ("born", "2007-12-13"),
                ("tags", "a,b"),
                ("scores", "1,-2"),
                ("locked", "ignored"),
            ],
        )
        .unwrap();

        assert_eq!(p.base, Base { base_int: -7, base_uint: 200 });
        assert_eq!(p.name, "alice");
        assert_eq!(p.age, 30);
        assert_eq!(p.weight, 60.5);
        assert!(p.is_admin);
        assert_eq!(p.born.to_rfc3339(), "2007-12-13T00:00:00+00:00");
        assert_eq!(p.tags, vec!["a", "b"]);
        assert_eq!(p.scores, vec![1, -2]);
        assert_eq!(p.locked, "");
        assert_eq!(p.greeting, "hello");
        assert_eq!(p.retries, 3);
    }

    #[test]
    fn test_absent_values_keep_previous_state() {
        let mut p = Profile {
            name: "kept".to_string(),
            is_admin: true,
            ..Profile::default()
        };
        bind(&mut p, &[("username", "")]).unwrap();
        assert_eq!(p.name, "kept");
        assert!(p.is_admin);
    }

    #[test]
    fn test_source_value_beats_default() {
        let mut p = Profile::default();
        bind(&mut p, &[("greeting", "hi"), ("retries", "5")]).unwrap();
        assert_eq!(p.greeting, "hi");
        assert_eq!(p.retries, 5);
    }

    #[test]
    fn test_field_name_key_ignored_when_annotated() {
        let mut p = Profile::default();
        bind(&mut p, &[("name", "bob"), ("age", "40")]).unwrap();
        assert_eq!(p.name, "");
        assert_eq!(p.age, 0);
    }

    #[test]
    fn test_range_error_carries_title() {
        let mut p = Profile::default();
        let err = bind(&mut p, &[("base_uint", "256")]).unwrap_err();
        assert_eq!(
            err,
            FormError::Range {
                field: "base_uint".to_string(),
                message: "value 256 is out of range".to_string(),
            }
        );
    }

    #[test]
    fn test_partial_application_on_failure() {
        let mut p = Profile::default();
        let err = bind(&mut p, &[("base_int", "9"), ("username", "carol"), ("weight", "heavy")])
            .unwrap_err();
        assert!(matches!(err, FormError::Format { .. }));
        assert_eq!(p.base.base_int, 9);
        assert_eq!(p.name, "carol");
    }

    #[test]
    fn test_bind_twice_is_idempotent() {
        let pairs = [("username", "dave"), ("scores", "3,4"), ("is_admin", "1")];
        let mut once = Profile::default();
        bind(&mut once, &pairs).unwrap();
        let mut twice = once.clone();
        bind(&mut twice, &pairs).unwrap();
        assert_eq!(once, twice);
    }

    // Hand-written record whose views disagree with its schema.
    struct Broken {
        value: u8,
    }

    impl Record for Broken {
        fn schema(&self) -> &'static Schema {
            static SCHEMA: once_cell::sync::Lazy<Schema> = once_cell::sync::Lazy::new(|| {
                Schema::builder("Broken")
                    .field(FieldDescriptor::new("value", FieldKind::Str))
                    .build()
            });
            &SCHEMA
        }

        fn fields(&self) -> Vec<FieldRef<'_>> {
            vec![FieldRef::Leaf(&self.value)]
        }

        fn fields_mut(&mut self) -> Vec<FieldMut<'_>> {
            vec![FieldMut::Leaf(&mut self.value)]
        }
    }

    #[test]
    fn test_kind_mismatch_is_schema_error() {
        let mut broken = Broken { value: 1 };
        let err = bind_record(&mut broken, &source(&[]), &FormConfig::default()).unwrap_err();
        assert!(matches!(err, FormError::Schema { .. }));
        assert_eq!(broken.value, 1);
    }
}
