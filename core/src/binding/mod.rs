//! # BINDING
//!
//! Coerces raw string input into typed record fields.

pub mod binder;
pub mod coerce;

pub use binder::bind_record;
pub use coerce::{
    parse_f32, parse_f64, parse_signed, parse_time, parse_unsigned, CoerceError, Field, ListElem,
};
