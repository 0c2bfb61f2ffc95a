//! Configuration-time errors
//!
//! Everything here is raised while building versions, ranges, timelines or
//! registries. Classification itself never fails.

use thiserror::Error;

/// Errors raised while building the inputs of a compatibility check
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompatError {
    #[error("Invalid version format: {0:?}")]
    InvalidVersionFormat(String),

    #[error("Invalid compatibility range: {0}")]
    InvalidRange(String),

    #[error("Duplicate feature: {0}")]
    DuplicateFeature(String),

    #[error("Invalid timeline for {feature}: {reason}")]
    InvalidTimeline { feature: String, reason: String },
}
