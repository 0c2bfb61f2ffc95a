//! Registry of compatibility sniffs

use phpcompat_core::{CompatibilityRange, Finding, Occurrence, Reporter};
use rayon::prelude::*;
use std::collections::HashSet;

use crate::catalog::{builtin_catalogs, LoadError};
use crate::logging;
use crate::sniff::{CatalogSniff, Sniff};

/// Registry of all available sniffs
#[derive(Default)]
pub struct SniffRegistry {
    sniffs: Vec<Box<dyn Sniff>>,
}

impl SniffRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with one sniff per built-in catalog
    pub fn with_builtin_sniffs() -> Result<Self, LoadError> {
        let mut registry = Self::new();

        for catalog in builtin_catalogs()? {
            registry.register(Box::new(CatalogSniff::from_catalog(&catalog)?));
        }

        Ok(registry)
    }

    /// Register a new sniff
    pub fn register(&mut self, sniff: Box<dyn Sniff>) {
        self.sniffs.push(sniff);
    }

    /// Get all sniff names
    pub fn all_names(&self) -> Vec<&str> {
        self.sniffs.iter().map(|s| s.name()).collect()
    }

    /// Get a sniff by name
    pub fn get(&self, name: &str) -> Option<&dyn Sniff> {
        self.sniffs
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }

    /// Get sniffs filtered by enabled names
    pub fn get_enabled(&self, enabled: &HashSet<String>) -> Vec<&dyn Sniff> {
        self.sniffs
            .iter()
            .filter(|s| enabled.contains(s.name()))
            .map(|s| s.as_ref())
            .collect()
    }

    /// Get all sniffs with their descriptions
    pub fn list_sniffs(&self) -> Vec<(&str, &str)> {
        self.sniffs
            .iter()
            .map(|s| (s.name(), s.description()))
            .collect()
    }

    /// Run the enabled sniffs over one file's occurrences, reporting into `reporter`
    ///
    /// Each occurrence goes to every enabled sniff handling its kind.
    pub fn report_all<P, R>(
        &self,
        occurrences: &[Occurrence<P>],
        range: &CompatibilityRange,
        enabled: &HashSet<String>,
        reporter: &mut R,
    ) where
        R: Reporter<P> + ?Sized,
    {
        let sniffs = self.get_enabled(enabled);
        for occurrence in occurrences {
            for sniff in sniffs.iter().filter(|s| s.handles(occurrence.kind)) {
                if let Some(diagnostic) = sniff.check(&occurrence.name, range) {
                    reporter.report(&occurrence.position, diagnostic);
                }
            }
        }
    }

    /// Run the enabled sniffs over one file's occurrences
    pub fn check_all<P: Clone>(
        &self,
        occurrences: &[Occurrence<P>],
        range: &CompatibilityRange,
        enabled: &HashSet<String>,
    ) -> Vec<Finding<P>> {
        let mut findings = Vec::new();
        self.report_all(occurrences, range, enabled, &mut findings);
        findings
    }

    /// Check many files in parallel against the same sniffs and range
    ///
    /// Results keep the order of `files`.
    pub fn check_files<F, P>(
        &self,
        files: &[(F, Vec<Occurrence<P>>)],
        range: &CompatibilityRange,
        enabled: &HashSet<String>,
    ) -> Vec<(F, Vec<Finding<P>>)>
    where
        F: Clone + Send + Sync + std::fmt::Display,
        P: Clone + Send + Sync,
    {
        let results: Vec<_> = files
            .par_iter()
            .map(|(file, occurrences)| {
                let findings = self.check_all(occurrences, range, enabled);
                (file.clone(), findings)
            })
            .collect();

        if logging::is_enabled() {
            for ((file, occurrences), (_, findings)) in files.iter().zip(&results) {
                logging::log_check_summary(&file.to_string(), occurrences.len(), findings.len());
            }
        }

        results
    }
}
