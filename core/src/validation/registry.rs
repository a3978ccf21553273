//! # VALIDATOR REGISTRY
//!
//! Rule name to validator function. Lookups take a read lock and clone the
//! entry out, so validators run without holding the lock and may register
//! further rules themselves.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use super::context::ValidationContext;
use super::validators;
use crate::errors::FormError;

/// A validator: `Ok(())` to pass, an error to stop the check.
pub type CheckFn = Arc<dyn Fn(ValidationContext<'_>) -> Result<(), FormError> + Send + Sync>;

pub struct Registry {
    checkers: RwLock<HashMap<String, CheckFn>>,
}

impl Registry {
    /// A registry with no rules at all.
    pub fn empty() -> Self {
        Self {
            checkers: RwLock::new(HashMap::new()),
        }
    }

    /// A registry seeded with every built-in rule.
    pub fn builtin() -> Self {
        let registry = Self::empty();
        for (name, check) in validators::BUILTINS {
            registry.insert(name, Arc::new(*check));
        }
        registry
    }

    /// Builder-style registration.
    pub fn with<F>(self, name: impl Into<String>, check: F) -> Self
    where
        F: Fn(ValidationContext<'_>) -> Result<(), FormError> + Send + Sync + 'static,
    {
        self.register(name, check);
        self
    }

    /// Add a rule, replacing any rule already registered under `name`.
    pub fn register<F>(&self, name: impl Into<String>, check: F)
    where
        F: Fn(ValidationContext<'_>) -> Result<(), FormError> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.insert(&name, Arc::new(check)) {
            debug!("validator '{}' overwritten", name);
        } else {
            debug!("validator '{}' registered", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<CheckFn> {
        self.checkers.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.checkers.read().contains_key(name)
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.checkers.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.checkers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkers.read().is_empty()
    }

    /// Returns true when an existing entry was replaced.
    fn insert(&self, name: &str, check: CheckFn) -> bool {
        self.checkers.write().insert(name.to_string(), check).is_some()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry").field("rules", &self.names()).finish()
    }
}
