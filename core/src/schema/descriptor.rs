//! # RECORD SCHEMA
//!
//! A record exposes three things: a static `Schema` of field descriptors,
//! a read-only view of its fields, and a mutable view of its fields. The
//! binder and checker walk the descriptors and the views side by side.

use super::kind::FieldKind;
use crate::binding::Field;
use crate::errors::FormError;

/// Static metadata for one record field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    name: String,
    kind: FieldKind,
    annotations: Vec<(String, String)>,
    writable: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            annotations: Vec::new(),
            writable: true,
        }
    }

    /// Descriptor for an inline-nested record.
    pub fn nested(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Nested)
    }

    /// Descriptor for a field whose type the engine does not understand.
    pub fn opaque(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Other)
    }

    /// Add an annotation. A later value for the same key replaces the
    /// earlier one but keeps its position.
    pub fn annotate(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.annotations.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.annotations.push((key, value)),
        }
        self
    }

    /// Mark the field as not writable; binding skips it.
    pub fn read_only(mut self) -> Self {
        self.writable = false;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn is_writable(&self) -> bool {
        self.writable
    }

    /// Annotation value, `None` when absent or empty.
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .filter(|v| !v.is_empty())
    }

    pub fn annotations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.annotations.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Ordered field descriptors of one record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl Schema {
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

pub struct SchemaBuilder {
    name: String,
    fields: Vec<FieldDescriptor>,
}

impl SchemaBuilder {
    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    pub fn build(self) -> Schema {
        Schema {
            name: self.name,
            fields: self.fields,
        }
    }
}

/// Read-only view of one field.
pub enum FieldRef<'a> {
    Leaf(&'a dyn Field),
    Nested(&'a dyn Record),
    /// A field of a type the engine does not understand.
    Opaque,
}

/// Mutable view of one field.
pub enum FieldMut<'a> {
    Leaf(&'a mut dyn Field),
    Nested(&'a mut dyn Record),
    /// Read-only or opaque field; binding leaves it alone.
    Skip,
}

/// **RECORD**
///
/// A struct-shaped value that can be bound and checked. Usually implemented
/// through the [`record!`](crate::record) macro; a hand-written
/// implementation must return views in the same order as `schema().fields()`.
pub trait Record {
    fn schema(&self) -> &'static Schema;

    fn fields(&self) -> Vec<FieldRef<'_>>;

    fn fields_mut(&mut self) -> Vec<FieldMut<'_>>;
}

/// Checks that a view count matches the schema.
pub(crate) fn ensure_arity(schema: &Schema, views: usize) -> Result<(), FormError> {
    if schema.len() != views {
        return Err(FormError::schema(format!(
            "record {} declares {} fields but exposes {}",
            schema.name(),
            schema.len(),
            views
        )));
    }
    Ok(())
}

/// Checks that a leaf's runtime kind matches its descriptor.
pub(crate) fn ensure_kind(
    schema: &Schema,
    descriptor: &FieldDescriptor,
    actual: FieldKind,
) -> Result<(), FormError> {
    if descriptor.kind() != actual {
        return Err(FormError::schema(format!(
            "field {}.{} is declared {} but holds {}",
            schema.name(),
            descriptor.name(),
            descriptor.kind(),
            actual
        )));
    }
    Ok(())
}

pub(crate) fn shape_mismatch(schema: &Schema, descriptor: &FieldDescriptor, found: &str) -> FormError {
    FormError::schema(format!(
        "field {}.{} is declared {} but exposed as {}",
        schema.name(),
        descriptor.name(),
        descriptor.kind(),
        found
    ))
}
