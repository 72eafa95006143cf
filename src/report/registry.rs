//! Name to report lookup
//!
//! The registry is an ordinary value built by the caller, one per
//! invocation, so tests can register their own reports without leaking
//! state into each other.

use super::{AveragePerformanceReport, Report};
use crate::error::{ReportError, ReportResult};
use indexmap::IndexMap;

/// Builds a fresh report instance on every lookup
pub type ReportFactory = fn() -> Box<dyn Report>;

fn build<R: Report + Default + 'static>() -> Box<dyn Report> {
    Box::new(R::default())
}

#[derive(Clone, Default)]
pub struct ReportRegistry {
    reports: IndexMap<String, ReportFactory>,
}

impl ReportRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in report
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register::<AveragePerformanceReport>("performance");
        registry
    }

    /// Register a report type under `name`. An existing entry is replaced.
    pub fn register<R: Report + Default + 'static>(&mut self, name: impl Into<String>) -> &mut Self {
        self.register_factory(name, build::<R>)
    }

    pub fn register_factory(&mut self, name: impl Into<String>, factory: ReportFactory) -> &mut Self {
        let name = name.into();
        if self.reports.insert(name.clone(), factory).is_some() {
            tracing::debug!(report = %name, "Replaced existing report registration");
        }
        self
    }

    /// Construct a new instance of the report registered under `name`
    pub fn get(&self, name: &str) -> ReportResult<Box<dyn Report>> {
        self.reports
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| {
                ReportError::NotFound(format!(
                    "Report '{}' isn't found. Available reports: {}",
                    name,
                    self.available().join(", ")
                ))
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.reports.contains_key(name)
    }

    /// Registered names in registration order
    pub fn available(&self) -> Vec<&str> {
        self.reports.keys().map(String::as_str).collect()
    }
}
