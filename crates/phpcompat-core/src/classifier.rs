//! Classification of a feature against a compatibility range
//!
//! At most one diagnostic comes out of each call, picked in this order:
//!
//! 1. Not yet present: some `Absent` boundary is reachable from the range
//!    (error, quoting the newest reachable boundary)
//! 2. Removed: the removal version is reachable (error, also quoting the
//!    deprecation version when there is one)
//! 3. Deprecated: the deprecation version is reachable (warning)

use serde::Serialize;
use std::fmt;

use crate::{CompatibilityRange, FeatureRecord, Status};

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Deprecated, still works
    Warning,
    /// Not available in part of the range
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A finding for one occurrence of a feature
///
/// `template` holds `%s` placeholders filled from `args` in order; hosts
/// can render it themselves or use [`Diagnostic::render`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub template: String,
    pub args: Vec<String>,
    /// Stable code for suppression (e.g. `arrayobjectFound`)
    pub code: String,
}

impl Diagnostic {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Substitute the args into the template
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.template.len() + 16);
        let mut args = self.args.iter();
        let mut pieces = self.template.split("%s");

        if let Some(first) = pieces.next() {
            out.push_str(first);
        }
        for piece in pieces {
            match args.next() {
                Some(arg) => out.push_str(arg),
                None => out.push_str("%s"),
            }
            out.push_str(piece);
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.severity, self.render(), self.code)
    }
}

/// Classify `record` against `range`
pub fn classify(record: &FeatureRecord, range: &CompatibilityRange) -> Option<Diagnostic> {
    not_present(record, range).or_else(|| retired(record, range))
}

fn not_present(record: &FeatureRecord, range: &CompatibilityRange) -> Option<Diagnostic> {
    let boundary = record
        .timeline()
        .versions_with(Status::Absent)
        .filter(|v| range.includes_or_below(*v))
        .max()?;

    Some(Diagnostic {
        severity: Severity::Error,
        template: format!(
            "{} is not present in PHP version %s or earlier",
            record.kind().subject_template()
        ),
        args: vec![record.name().to_string(), boundary.to_string()],
        code: format!("{}Found", error_code(record.name())),
    })
}

fn retired(record: &FeatureRecord, range: &CompatibilityRange) -> Option<Diagnostic> {
    let timeline = record.timeline();
    let deprecated = timeline
        .deprecated_at()
        .filter(|v| range.includes_or_above(*v));
    let removed = timeline.removed_at().filter(|v| range.includes_or_above(*v));

    let subject = record.kind().subject_template();
    let mut args = vec![record.name().to_string()];

    let (severity, mut template, suffix) = match (deprecated, removed) {
        (Some(deprecated), Some(removed)) => {
            args.push(deprecated.to_string());
            args.push(removed.to_string());
            (
                Severity::Error,
                format!("{} is deprecated since PHP %s and removed since PHP %s", subject),
                "DeprecatedRemoved",
            )
        }
        (None, Some(removed)) => {
            args.push(removed.to_string());
            (
                Severity::Error,
                format!("{} is removed since PHP %s", subject),
                "Removed",
            )
        }
        (Some(deprecated), None) => {
            args.push(deprecated.to_string());
            (
                Severity::Warning,
                format!("{} is deprecated since PHP %s", subject),
                "Deprecated",
            )
        }
        (None, None) => return None,
    };

    if let Some(alternative) = record.alternative() {
        template.push_str("; Use %s instead");
        args.push(alternative.to_string());
    }

    Some(Diagnostic {
        severity,
        template,
        args,
        code: format!("{}{}", error_code(record.name()), suffix),
    })
}

/// Turn a feature name into an error code prefix
///
/// Lowercased, with anything outside `[a-z0-9_]` replaced by `_`.
pub fn error_code(name: &str) -> String {
    name.chars()
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
