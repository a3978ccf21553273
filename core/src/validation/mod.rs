//! # FORM VALIDATION
//!
//! **RULE-CHAIN CHECKING AGAINST RAW REQUEST INPUT**
//!
//! A field's `valid` annotation holds a chain such as
//! `required;range:8,16;username`. The checker parses the chain, looks each
//! rule up in a [`Registry`] and runs it with a [`ValidationContext`].
//!
//! ## PIPELINE
//!
//! 1. **RULES** - chain parsing (`rules`)
//! 2. **PREDICATES** - stateless string checks (`predicates`)
//! 3. **VALIDATORS** - built-in rules on top of the predicates (`validators`)
//! 4. **REGISTRY** - name to validator lookup (`registry`)
//! 5. **CHECKER** - record traversal (`checker`)
//!
//! ## USAGE
//!
//! ```rust,ignore
//! use forzium_form::validation::Registry;
//! use forzium_form::errors::FormError;
//!
//! let registry = Registry::builtin().with("hello", |ctx| {
//!     if ctx.input == "hello" {
//!         Ok(())
//!     } else {
//!         Err(FormError::invalid(format!("{} must say hello", ctx.title)))
//!     }
//! });
//! ```

pub mod checker;
pub mod context;
pub mod predicates;
pub mod registry;
pub mod rules;
pub mod validators;

pub use checker::check_record;
pub use context::ValidationContext;
pub use registry::{CheckFn, Registry};
pub use rules::{parse_rules, Rule};
