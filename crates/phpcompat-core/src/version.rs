//! PHP version values

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::CompatError;

/// A PHP release version such as `5.3` or `5.2.7`
///
/// A missing patch component orders and compares as `0`, so `5.0 == 5.0.0`.
/// Display keeps the form the version was written in.
#[derive(Debug, Clone, Copy)]
pub struct Version {
    major: u32,
    minor: u32,
    patch: Option<u32>,
}

impl Version {
    /// Create a `major.minor` version
    pub const fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Create a `major.minor.patch` version
    pub const fn with_patch(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch: Some(patch),
        }
    }

    /// Parse a dotted version string (`"7.4"`, `"5.2.7"`)
    pub fn parse(input: &str) -> Result<Self, CompatError> {
        let invalid = || CompatError::InvalidVersionFormat(input.to_string());

        let mut parts = input.trim().split('.');
        let mut component = || -> Result<Option<u32>, CompatError> {
            match parts.next() {
                None => Ok(None),
                Some(part) if !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()) => {
                    part.parse::<u32>().map(Some).map_err(|_| invalid())
                }
                Some(_) => Err(invalid()),
            }
        };

        let major = component()?.ok_or_else(invalid)?;
        let minor = component()?.ok_or_else(invalid)?;
        let patch = component()?;

        // Anything past the patch component
        if component()?.is_some() {
            return Err(invalid());
        }

        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Patch component, `0` when it was omitted
    pub fn patch(&self) -> u32 {
        self.patch.unwrap_or(0)
    }

    /// Whether the patch component was written explicitly
    pub fn has_patch(&self) -> bool {
        self.patch.is_some()
    }

    fn key(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.patch())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Version {}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl FromStr for Version {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
