//! phpcompat-core: Version-gated feature classification
//!
//! This crate provides:
//! - `Version`: A comparable PHP version (major.minor[.patch])
//! - `CompatibilityRange`: The PHP version window a run is checked against
//! - `FeatureRecord` / `FeatureTimeline`: When a feature appeared, got deprecated, got removed
//! - `FeatureRegistry`: Name-indexed feature lookup with per-registry case policy
//! - `classify()`: Decide whether an occurrence of a feature gets a diagnostic
//! - `Checker` / `Reporter`: The seam a host uses to feed occurrences and receive diagnostics

pub mod classifier;
mod error;
pub mod feature;
pub mod host;
pub mod range;
pub mod registry;
mod version;

pub use classifier::{classify, error_code, Diagnostic, Severity};
pub use error::CompatError;
pub use feature::{FeatureKind, FeatureRecord, FeatureRecordBuilder, FeatureTimeline, Status, TimelineEntry};
pub use host::{Checker, Finding, Occurrence, Reporter};
pub use range::CompatibilityRange;
pub use registry::{FeatureRegistry, KeyNormalization};
pub use version::Version;
