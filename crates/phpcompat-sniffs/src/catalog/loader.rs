//! Catalog loader
//!
//! Load catalogs from files or strings and turn them into registries.

use phpcompat_core::{CompatError, FeatureRegistry};
use std::fs;
use std::path::Path;
use thiserror::Error;

use super::schema::Catalog;
use crate::logging;

/// Errors that can occur when loading catalogs
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Validation(String),

    #[error("Catalog '{catalog}', feature '{feature}': {source}")]
    Feature {
        catalog: String,
        feature: String,
        #[source]
        source: CompatError,
    },
}

/// Load a catalog from a YAML string
pub fn load_catalog_from_string(yaml: &str) -> Result<Catalog, LoadError> {
    let catalog: Catalog = serde_yaml::from_str(yaml)?;
    catalog.validate().map_err(LoadError::Validation)?;
    Ok(catalog)
}

/// Load a catalog from a YAML file
pub fn load_catalog_from_file(path: &Path) -> Result<Catalog, LoadError> {
    let content = fs::read_to_string(path)?;
    load_catalog_from_string(&content)
}

/// Build the registry for a catalog
///
/// Fails on the first malformed version, invalid timeline or duplicate
/// name, so bad data is caught before any scanning starts.
pub fn build_registry(catalog: &Catalog) -> Result<FeatureRegistry, LoadError> {
    let mut registry = FeatureRegistry::new(catalog.normalization);

    for entry in &catalog.features {
        let feature_error = |source: CompatError| LoadError::Feature {
            catalog: catalog.name.clone(),
            feature: entry.name.clone(),
            source,
        };

        let record = entry.to_record(catalog.kind).map_err(feature_error)?;
        registry.register(record).map_err(feature_error)?;
    }

    logging::log_catalog_loaded(&catalog.name, registry.len());
    Ok(registry)
}
