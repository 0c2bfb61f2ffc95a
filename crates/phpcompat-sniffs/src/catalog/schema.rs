//! Catalog schema definitions
//!
//! Deserialized from YAML with serde; version strings stay raw until
//! [`CatalogEntry::to_record`] so errors can name the offending feature.

use phpcompat_core::{CompatError, FeatureKind, FeatureRecord, KeyNormalization, Version};
use serde::{Deserialize, Serialize};

/// A named table of version-gated features
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Catalog {
    /// Catalog identifier, also used as the sniff name (e.g. "new_classes")
    pub name: String,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Kind of every feature that does not override it
    pub kind: FeatureKind,

    /// How names are matched
    #[serde(default)]
    pub normalization: KeyNormalization,

    #[serde(default)]
    pub features: Vec<CatalogEntry>,
}

/// One feature row
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogEntry {
    pub name: String,

    /// Overrides the catalog kind (an interface in a class catalog)
    #[serde(default)]
    pub kind: Option<FeatureKind>,

    /// Versions in which the feature did not exist yet
    #[serde(default)]
    pub absent: Vec<String>,

    /// First version with the feature
    #[serde(default)]
    pub present: Option<String>,

    #[serde(default)]
    pub deprecated: Option<String>,

    #[serde(default)]
    pub removed: Option<String>,

    /// PHP extension providing the feature
    #[serde(default)]
    pub extension: Option<String>,

    /// Replacement to suggest once retired
    #[serde(default)]
    pub alternative: Option<String>,
}

impl Catalog {
    /// Check the parts of a catalog that serde cannot
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Catalog name cannot be empty".to_string());
        }

        for (index, entry) in self.features.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(format!(
                    "Feature #{} in catalog '{}' has an empty name",
                    index + 1,
                    self.name
                ));
            }
        }

        Ok(())
    }

    /// Kinds this catalog can produce records for
    pub fn kinds(&self) -> Vec<FeatureKind> {
        let mut kinds = vec![self.kind];
        for kind in self.features.iter().filter_map(|e| e.kind) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }
}

impl CatalogEntry {
    /// Parse versions and build a validated record
    pub fn to_record(&self, default_kind: FeatureKind) -> Result<FeatureRecord, CompatError> {
        let mut builder = FeatureRecord::builder(&self.name, self.kind.unwrap_or(default_kind));

        for version in &self.absent {
            builder = builder.absent(Version::parse(version)?);
        }
        if let Some(version) = &self.present {
            builder = builder.present(Version::parse(version)?);
        }
        if let Some(version) = &self.deprecated {
            builder = builder.deprecated(Version::parse(version)?);
        }
        if let Some(version) = &self.removed {
            builder = builder.removed(Version::parse(version)?);
        }
        if let Some(extension) = &self.extension {
            builder = builder.extension(extension);
        }
        if let Some(alternative) = &self.alternative {
            builder = builder.alternative(alternative);
        }

        builder.build()
    }
}
