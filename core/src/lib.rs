//! # FORZIUM FORM LIBRARY
//!
//! **SCHEMA-DRIVEN FORM BINDING AND RULE-CHAIN VALIDATION**
//!
//! **ARCHITECTURE**: Records describe themselves through a static schema; a
//! binder coerces raw request strings into typed fields and a checker runs
//! annotated rule chains through a validator registry
//! **GUARANTEE**: Fail-fast, first error in depth-first field order
//! **COMPATIBILITY**: Any key/value request source via the `ValueSource` trait

pub mod api;
pub mod binding;
pub mod config;
pub mod errors;
pub mod form;
pub mod request;
pub mod schema;

// **VALIDATION MODULE REGISTRATION**
pub mod validation;

// Paths used by the `record!` macro expansion.
pub use binding::Field;
pub use schema::{FieldDescriptor, FieldMut, FieldRef, Record, Schema};

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;
}
