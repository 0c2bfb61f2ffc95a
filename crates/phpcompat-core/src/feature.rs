//! Feature records and their version timelines

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{CompatError, Version};

/// What sort of PHP construct a feature is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    Class,
    Interface,
    Function,
    Constant,
    IniDirective,
    Keyword,
    Syntax,
}

impl FeatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureKind::Class => "class",
            FeatureKind::Interface => "interface",
            FeatureKind::Function => "function",
            FeatureKind::Constant => "constant",
            FeatureKind::IniDirective => "ini_directive",
            FeatureKind::Keyword => "keyword",
            FeatureKind::Syntax => "syntax",
        }
    }

    /// Message subject for this kind; `%s` is the feature name
    pub fn subject_template(&self) -> &'static str {
        match self {
            FeatureKind::Class => "The built-in class %s",
            FeatureKind::Interface => "The built-in interface %s",
            FeatureKind::Function => "The function %s()",
            FeatureKind::Constant => "The constant \"%s\"",
            FeatureKind::IniDirective => "The ini directive '%s'",
            FeatureKind::Keyword => "The keyword '%s'",
            FeatureKind::Syntax => "%s",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status a feature enters at a given version
///
/// `Absent` and `Present` make up the existence lifecycle, `Deprecated`
/// and `Removed` the retirement lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Absent,
    Present,
    Deprecated,
    Removed,
}

impl Status {
    pub fn is_existence(&self) -> bool {
        matches!(self, Status::Absent | Status::Present)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Absent => "absent",
            Status::Present => "present",
            Status::Deprecated => "deprecated",
            Status::Removed => "removed",
        };
        f.write_str(s)
    }
}

/// One (version, status) boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub version: Version,
    pub status: Status,
}

impl TimelineEntry {
    pub fn new(version: Version, status: Status) -> Self {
        Self { version, status }
    }
}

/// Validated, version-ordered lifecycle of one feature
///
/// `Absent` entries hold the last versions in which the feature did not
/// exist yet, next to the first `Present` version. Messages quote those
/// boundaries directly; no version is ever decremented.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureTimeline {
    entries: Vec<TimelineEntry>,
}

impl FeatureTimeline {
    /// A feature that always existed and was never retired
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate and order the entries for `feature`
    pub fn new(feature: &str, mut entries: Vec<TimelineEntry>) -> Result<Self, CompatError> {
        let invalid = |reason: String| CompatError::InvalidTimeline {
            feature: feature.to_string(),
            reason,
        };

        entries.sort_by(|a, b| a.version.cmp(&b.version).then(a.status.cmp(&b.status)));

        for pair in entries.windows(2) {
            if pair[0] == pair[1] {
                return Err(invalid(format!(
                    "{} listed twice at {}",
                    pair[0].status, pair[0].version
                )));
            }
        }

        let mut seen_present: Option<Version> = None;
        let mut last_existence: Option<Version> = None;
        for entry in entries.iter().filter(|e| e.status.is_existence()) {
            if last_existence == Some(entry.version) {
                return Err(invalid(format!(
                    "both absent and present at {}",
                    entry.version
                )));
            }
            match (entry.status, seen_present) {
                (Status::Absent, Some(present)) => {
                    return Err(invalid(format!(
                        "absent at {} after becoming present at {}",
                        entry.version, present
                    )));
                }
                (Status::Present, Some(present)) => {
                    return Err(invalid(format!(
                        "present at {} and again at {}",
                        present, entry.version
                    )));
                }
                (Status::Present, None) if last_existence.is_none() => {
                    return Err(invalid(format!(
                        "present at {} without an earlier absent version",
                        entry.version
                    )));
                }
                (Status::Present, None) => seen_present = Some(entry.version),
                _ => {}
            }
            last_existence = Some(entry.version);
        }

        let mut deprecated: Option<Version> = None;
        let mut removed: Option<Version> = None;
        for entry in entries.iter().filter(|e| !e.status.is_existence()) {
            match entry.status {
                Status::Deprecated if deprecated.is_some() => {
                    return Err(invalid("deprecated more than once".to_string()));
                }
                Status::Deprecated if removed.is_some() => {
                    return Err(invalid(format!(
                        "deprecated at {} after removal",
                        entry.version
                    )));
                }
                Status::Deprecated => deprecated = Some(entry.version),
                Status::Removed if removed.is_some() => {
                    return Err(invalid("removed more than once".to_string()));
                }
                _ => removed = Some(entry.version),
            }
        }

        if let (Some(removed), Some(existence)) = (removed, last_existence) {
            if existence >= removed {
                return Err(invalid(format!(
                    "existence boundary {} is not before removal at {}",
                    existence, removed
                )));
            }
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Versions carrying the given status, oldest first
    pub fn versions_with(&self, status: Status) -> impl Iterator<Item = Version> + '_ {
        self.entries
            .iter()
            .filter(move |e| e.status == status)
            .map(|e| e.version)
    }

    pub fn introduced_at(&self) -> Option<Version> {
        self.versions_with(Status::Present).next()
    }

    pub fn deprecated_at(&self) -> Option<Version> {
        self.versions_with(Status::Deprecated).next()
    }

    pub fn removed_at(&self) -> Option<Version> {
        self.versions_with(Status::Removed).next()
    }
}

/// A version-gated feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    name: String,
    kind: FeatureKind,
    timeline: FeatureTimeline,
    extension: Option<String>,
    alternative: Option<String>,
}

impl FeatureRecord {
    pub fn new(name: impl Into<String>, kind: FeatureKind, timeline: FeatureTimeline) -> Self {
        Self {
            name: name.into(),
            kind,
            timeline,
            extension: None,
            alternative: None,
        }
    }

    /// Start building a record whose timeline is validated on `build()`
    pub fn builder(name: impl Into<String>, kind: FeatureKind) -> FeatureRecordBuilder {
        FeatureRecordBuilder {
            name: name.into(),
            kind,
            entries: Vec::new(),
            extension: None,
            alternative: None,
        }
    }

    /// Tag the PHP extension providing this feature
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Name what to use instead once the feature is retired
    pub fn with_alternative(mut self, alternative: impl Into<String>) -> Self {
        self.alternative = Some(alternative.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    pub fn timeline(&self) -> &FeatureTimeline {
        &self.timeline
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn alternative(&self) -> Option<&str> {
        self.alternative.as_deref()
    }
}

/// Builder for [`FeatureRecord`]
#[derive(Debug, Clone)]
pub struct FeatureRecordBuilder {
    name: String,
    kind: FeatureKind,
    entries: Vec<TimelineEntry>,
    extension: Option<String>,
    alternative: Option<String>,
}

impl FeatureRecordBuilder {
    /// Last version (or one of the versions) without the feature
    pub fn absent(mut self, version: Version) -> Self {
        self.entries.push(TimelineEntry::new(version, Status::Absent));
        self
    }

    pub fn present(mut self, version: Version) -> Self {
        self.entries.push(TimelineEntry::new(version, Status::Present));
        self
    }

    pub fn deprecated(mut self, version: Version) -> Self {
        self.entries.push(TimelineEntry::new(version, Status::Deprecated));
        self
    }

    pub fn removed(mut self, version: Version) -> Self {
        self.entries.push(TimelineEntry::new(version, Status::Removed));
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn alternative(mut self, alternative: impl Into<String>) -> Self {
        self.alternative = Some(alternative.into());
        self
    }

    pub fn build(self) -> Result<FeatureRecord, CompatError> {
        let timeline = FeatureTimeline::new(&self.name, self.entries)?;
        Ok(FeatureRecord {
            name: self.name,
            kind: self.kind,
            timeline,
            extension: self.extension,
            alternative: self.alternative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn entry(version: &str, status: Status) -> TimelineEntry {
        TimelineEntry::new(v(version), status)
    }

    #[test]
    fn test_entries_are_sorted() {
        let timeline = FeatureTimeline::new(
            "ArrayObject",
            vec![entry("5.0", Status::Present), entry("4.4", Status::Absent)],
        )
        .unwrap();

        let statuses: Vec<Status> = timeline.entries().iter().map(|e| e.status).collect();
        assert_eq!(statuses, vec![Status::Absent, Status::Present]);
        assert_eq!(timeline.introduced_at(), Some(v("5.0")));
    }

    #[test]
    fn test_deprecated_and_removed_in_same_version() {
        let timeline = FeatureTimeline::new(
            "SQLiteDatabase",
            vec![entry("5.4", Status::Removed), entry("5.4", Status::Deprecated)],
        )
        .unwrap();

        assert_eq!(timeline.deprecated_at(), Some(v("5.4")));
        assert_eq!(timeline.removed_at(), Some(v("5.4")));
        assert_eq!(timeline.entries()[0].status, Status::Deprecated);
    }

    #[test]
    fn test_multiple_absent_versions() {
        let timeline = FeatureTimeline::new(
            "PHP_VERSION_ID",
            vec![
                entry("5.2.6", Status::Absent),
                entry("5.1", Status::Absent),
                entry("5.2.7", Status::Present),
            ],
        )
        .unwrap();

        let absent: Vec<Version> = timeline.versions_with(Status::Absent).collect();
        assert_eq!(absent, vec![v("5.1"), v("5.2.6")]);
    }

    #[test]
    fn test_absent_after_present_rejected() {
        let result = FeatureTimeline::new(
            "Foo",
            vec![entry("5.0", Status::Present), entry("5.1", Status::Absent)],
        );
        assert!(matches!(result, Err(CompatError::InvalidTimeline { .. })));
    }

    #[test]
    fn test_absent_and_present_same_version_rejected() {
        let result = FeatureTimeline::new(
            "Foo",
            vec![entry("5.0", Status::Absent), entry("5.0.0", Status::Present)],
        );
        assert!(matches!(result, Err(CompatError::InvalidTimeline { .. })));
    }

    #[test]
    fn test_present_without_absent_boundary_rejected() {
        let err = FeatureRecord::builder("WeakMap", FeatureKind::Class)
            .present(v("8.0"))
            .build()
            .unwrap_err();

        match err {
            CompatError::InvalidTimeline { feature, reason } => {
                assert_eq!(feature, "WeakMap");
                assert!(reason.contains("8.0"));
            }
            other => panic!("expected InvalidTimeline, got {:?}", other),
        }
    }

    #[test]
    fn test_deprecated_after_removed_rejected() {
        let result = FeatureTimeline::new(
            "ereg",
            vec![entry("7.0", Status::Removed), entry("7.1", Status::Deprecated)],
        );
        assert!(matches!(result, Err(CompatError::InvalidTimeline { .. })));
    }

    #[test]
    fn test_present_after_removal_rejected() {
        let result = FeatureTimeline::new(
            "SQLiteDatabase",
            vec![entry("5.4", Status::Removed), entry("8.0", Status::Present)],
        );
        match result {
            Err(CompatError::InvalidTimeline { feature, .. }) => {
                assert_eq!(feature, "SQLiteDatabase");
            }
            other => panic!("expected InvalidTimeline, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let result = FeatureTimeline::new(
            "Foo",
            vec![entry("7.0", Status::Absent), entry("7.0", Status::Absent)],
        );
        assert!(matches!(result, Err(CompatError::InvalidTimeline { .. })));
    }

    #[test]
    fn test_full_lifecycle() {
        let record = FeatureRecord::builder("create_function", FeatureKind::Function)
            .absent(v("4.0"))
            .present(v("4.0.1"))
            .deprecated(v("7.2"))
            .removed(v("8.0"))
            .alternative("an anonymous function")
            .build()
            .unwrap();

        assert_eq!(record.timeline().entries().len(), 4);
        assert_eq!(record.alternative(), Some("an anonymous function"));
        assert_eq!(record.extension(), None);
    }

    #[test]
    fn test_builder_reports_feature_name() {
        let err = FeatureRecord::builder("each", FeatureKind::Function)
            .removed(v("8.0"))
            .removed(v("8.1"))
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("each"));
    }

    #[test]
    fn test_kind_subjects() {
        assert_eq!(FeatureKind::Function.subject_template(), "The function %s()");
        assert_eq!(FeatureKind::IniDirective.to_string(), "ini_directive");
    }
}
