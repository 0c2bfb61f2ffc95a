//! The seam between a host tool and the classifier
//!
//! The host scans source and hands over occurrences with an opaque
//! position (a token index, a span, a line/column pair). Diagnostics come
//! back through a [`Reporter`] keyed by that same position.

use serde::Serialize;

use crate::{classify, CompatibilityRange, Diagnostic, FeatureKind, FeatureRegistry};

/// A candidate feature use found by the host's scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence<P> {
    pub name: String,
    pub kind: FeatureKind,
    pub position: P,
}

impl<P> Occurrence<P> {
    pub fn new(name: impl Into<String>, kind: FeatureKind, position: P) -> Self {
        Self {
            name: name.into(),
            kind,
            position,
        }
    }
}

/// Sink for diagnostics, supplied by the host
pub trait Reporter<P> {
    fn report(&mut self, position: &P, diagnostic: Diagnostic);
}

/// A diagnostic tied to where it was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding<P> {
    pub position: P,
    pub diagnostic: Diagnostic,
}

impl<P: Clone> Reporter<P> for Vec<Finding<P>> {
    fn report(&mut self, position: &P, diagnostic: Diagnostic) {
        self.push(Finding {
            position: position.clone(),
            diagnostic,
        });
    }
}

/// A registry paired with the range of one analysis run
#[derive(Debug, Clone, Copy)]
pub struct Checker<'r> {
    registry: &'r FeatureRegistry,
    range: CompatibilityRange,
}

impl<'r> Checker<'r> {
    pub fn new(registry: &'r FeatureRegistry, range: CompatibilityRange) -> Self {
        Self { registry, range }
    }

    pub fn range(&self) -> &CompatibilityRange {
        &self.range
    }

    /// Look up and classify a feature name
    pub fn check(&self, name: &str) -> Option<Diagnostic> {
        self.registry
            .lookup(name)
            .and_then(|record| classify(record, &self.range))
    }

    /// Classify one occurrence and report it; returns whether anything was reported
    pub fn check_occurrence<P, R>(&self, name: &str, position: &P, reporter: &mut R) -> bool
    where
        R: Reporter<P> + ?Sized,
    {
        match self.check(name) {
            Some(diagnostic) => {
                reporter.report(position, diagnostic);
                true
            }
            None => false,
        }
    }
}
