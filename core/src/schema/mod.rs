pub mod descriptor;
pub mod kind;
pub mod macros;
pub mod resolver;

pub use descriptor::{FieldDescriptor, FieldMut, FieldRef, Record, Schema, SchemaBuilder};
pub use kind::{ElemKind, FieldKind, FloatWidth, IntWidth};
pub use resolver::resolve;
