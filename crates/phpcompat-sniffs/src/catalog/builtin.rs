//! Catalogs shipped with the crate

use super::loader::{load_catalog_from_string, LoadError};
use super::schema::Catalog;

/// Embedded catalog sources as (name, YAML) pairs
pub const BUILTIN_CATALOGS: &[(&str, &str)] = &[
    ("new_classes", include_str!("../../data/new_classes.yaml")),
    ("new_functions", include_str!("../../data/new_functions.yaml")),
    ("new_constants", include_str!("../../data/new_constants.yaml")),
    ("new_ini_directives", include_str!("../../data/new_ini_directives.yaml")),
    ("removed_classes", include_str!("../../data/removed_classes.yaml")),
    ("removed_functions", include_str!("../../data/removed_functions.yaml")),
    ("removed_constants", include_str!("../../data/removed_constants.yaml")),
    ("removed_ini_directives", include_str!("../../data/removed_ini_directives.yaml")),
];

/// Parse every embedded catalog
pub fn builtin_catalogs() -> Result<Vec<Catalog>, LoadError> {
    BUILTIN_CATALOGS
        .iter()
        .map(|(name, yaml)| {
            let catalog = load_catalog_from_string(yaml)?;
            if catalog.name != *name {
                return Err(LoadError::Validation(format!(
                    "Embedded catalog '{}' declares name '{}'",
                    name, catalog.name
                )));
            }
            Ok(catalog)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_registry;

    #[test]
    fn test_all_builtin_catalogs_load() {
        let catalogs = builtin_catalogs().unwrap();
        assert_eq!(catalogs.len(), BUILTIN_CATALOGS.len());

        for catalog in &catalogs {
            let registry = build_registry(catalog)
                .unwrap_or_else(|e| panic!("catalog {} failed: {}", catalog.name, e));
            assert_eq!(registry.len(), catalog.features.len(), "{}", catalog.name);
            assert!(!catalog.description.is_empty(), "{}", catalog.name);
        }
    }
}
