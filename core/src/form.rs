//! # FORM ENTRY POINTS
//!
//! A [`Form`] pairs a [`FormConfig`] with a validator [`Registry`]. Several
//! forms with different annotation keys can live side by side; the free
//! functions in this module use a process-wide default form.

use std::sync::Arc;

use log::debug;
use once_cell::sync::Lazy;

use crate::binding::bind_record;
use crate::config::FormConfig;
use crate::errors::FormError;
use crate::request::ValueSource;
use crate::schema::Record;
use crate::validation::{check_record, Registry, ValidationContext};

static DEFAULT_FORM: Lazy<Form> = Lazy::new(Form::default);

#[derive(Debug, Clone)]
pub struct Form {
    config: FormConfig,
    registry: Arc<Registry>,
}

impl Form {
    /// A form using `config` and its own registry of built-in rules.
    pub fn new(config: FormConfig) -> Self {
        Self {
            config,
            registry: Arc::new(Registry::builtin()),
        }
    }

    /// Replace the registry, e.g. to share one between forms.
    pub fn with_registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Add or replace a rule in this form's registry. Forms sharing the
    /// registry see the change too.
    pub fn register<F>(&self, name: impl Into<String>, check: F)
    where
        F: Fn(ValidationContext<'_>) -> Result<(), FormError> + Send + Sync + 'static,
    {
        self.registry.register(name, check);
    }

    /// Assign every writable field of `record` from `source`.
    pub fn bind<R, S>(&self, record: &mut R, source: &S) -> Result<(), FormError>
    where
        R: Record,
        S: ValueSource + ?Sized,
    {
        debug!("binding {}", record.schema().name());
        bind_record(record, source, &self.config)
    }

    /// Run every field's rule chain against `source`.
    pub fn check<R, S>(&self, record: &R, source: &S) -> Result<(), FormError>
    where
        R: Record,
        S: ValueSource + ?Sized,
    {
        debug!("checking {}", record.schema().name());
        check_record(record, source, &self.config, &self.registry)
    }

    /// `bind` followed by `check`; the check only runs when binding succeeded.
    pub fn bind_and_check<R, S>(&self, record: &mut R, source: &S) -> Result<(), FormError>
    where
        R: Record,
        S: ValueSource + ?Sized,
    {
        self.bind(record, source)?;
        self.check(record, source)
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

/// The process-wide form behind [`bind`], [`check`] and [`add_check_func`].
pub fn default_form() -> &'static Form {
    &DEFAULT_FORM
}

/// Bind with the default form.
pub fn bind<R, S>(record: &mut R, source: &S) -> Result<(), FormError>
where
    R: Record,
    S: ValueSource + ?Sized,
{
    DEFAULT_FORM.bind(record, source)
}

/// Check with the default form.
pub fn check<R, S>(record: &R, source: &S) -> Result<(), FormError>
where
    R: Record,
    S: ValueSource + ?Sized,
{
    DEFAULT_FORM.check(record, source)
}

/// Register a rule on the default form. Later checks use it immediately.
pub fn add_check_func<F>(name: impl Into<String>, check: F)
where
    F: Fn(ValidationContext<'_>) -> Result<(), FormError> + Send + Sync + 'static,
{
    DEFAULT_FORM.register(name, check);
}
