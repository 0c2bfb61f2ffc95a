//! The PHP version window an analysis run is checked against

use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::OnceLock;

use crate::{CompatError, Version};

/// Upper bounds at or above this version mean "latest" and are stored as unbounded
pub const LATEST_SENTINEL: Version = Version::new(99, 0);

/// Configured target PHP versions: a lower bound, an upper bound, or both
///
/// A range with neither bound cannot be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CompatibilityRange {
    lower: Option<Version>,
    upper: Option<Version>,
}

impl CompatibilityRange {
    /// Create a range from optional bounds
    pub fn new(lower: Option<Version>, upper: Option<Version>) -> Result<Self, CompatError> {
        match (lower, upper) {
            (None, None) => Err(CompatError::InvalidRange(
                "at least one bound is required".to_string(),
            )),
            (Some(lower), Some(upper)) if lower > upper => Err(CompatError::InvalidRange(format!(
                "lower bound {} is above upper bound {}",
                lower, upper
            ))),
            _ => Ok(Self { lower, upper }),
        }
    }

    /// Every version from `lower` upward
    pub fn at_least(lower: Version) -> Self {
        Self {
            lower: Some(lower),
            upper: None,
        }
    }

    /// Every version up to and including `upper`
    pub fn at_most(upper: Version) -> Self {
        Self {
            lower: None,
            upper: Some(upper),
        }
    }

    /// Exactly one version
    pub fn exactly(version: Version) -> Self {
        Self {
            lower: Some(version),
            upper: Some(version),
        }
    }

    pub fn between(lower: Version, upper: Version) -> Result<Self, CompatError> {
        Self::new(Some(lower), Some(upper))
    }

    /// Parse a test version string
    ///
    /// Accepted forms: `"7.4"`, `"5.6-"`, `"-7.0"`, `"5.6-8.1"`. An upper
    /// bound of `99.0` or above is treated as unbounded.
    pub fn from_test_version(input: &str) -> Result<Self, CompatError> {
        let invalid = || CompatError::InvalidRange(format!("invalid test version {:?}", input));

        static TEST_VERSION: OnceLock<Regex> = OnceLock::new();
        let regex = TEST_VERSION.get_or_init(|| {
            // "min", "min-", "-max" or "min-max"
            Regex::new(r"^\s*(\d+\.\d+(?:\.\d+)?)?\s*(-)?\s*(\d+\.\d+(?:\.\d+)?)?\s*$").unwrap()
        });

        let caps = regex.captures(input).ok_or_else(invalid)?;
        let lower = caps.get(1).map(|m| Version::parse(m.as_str())).transpose()?;
        let upper = caps.get(3).map(|m| Version::parse(m.as_str())).transpose()?;

        if caps.get(2).is_none() {
            // A single version without a dash pins both bounds
            return match (lower, upper) {
                (Some(version), None) => Ok(Self::exactly(version)),
                _ => Err(invalid()),
            };
        }

        // Check the written bounds before the sentinel drops the upper one
        Self::new(lower, upper)?;
        Self::new(lower, upper.filter(|v| *v < LATEST_SENTINEL))
    }

    pub fn lower(&self) -> Option<Version> {
        self.lower
    }

    pub fn upper(&self) -> Option<Version> {
        self.upper
    }

    /// Whether the range can select `version` or something older
    pub fn includes_or_below(&self, version: Version) -> bool {
        self.lower.map_or(true, |lower| lower <= version)
    }

    /// Whether the range can select `version` or something newer
    pub fn includes_or_above(&self, version: Version) -> bool {
        self.upper.map_or(true, |upper| upper >= version)
    }

    /// Whether `version` lies inside the range
    pub fn spans(&self, version: Version) -> bool {
        self.includes_or_below(version) && self.includes_or_above(version)
    }
}

impl fmt::Display for CompatibilityRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) if lower == upper => write!(f, "{}", lower),
            (Some(lower), Some(upper)) => write!(f, "{}-{}", lower, upper),
            (Some(lower), None) => write!(f, "{}-", lower),
            (None, Some(upper)) => write!(f, "-{}", upper),
            (None, None) => write!(f, "-"),
        }
    }
}
