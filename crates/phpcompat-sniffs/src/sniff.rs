//! Sniff trait and the catalog-backed sniff

use phpcompat_core::{
    classify, CompatibilityRange, Diagnostic, FeatureKind, FeatureRegistry,
};

use crate::catalog::{build_registry, Catalog, LoadError};

/// A compatibility check over one family of features
pub trait Sniff: Send + Sync {
    /// The unique identifier for this sniff (e.g., "new_classes")
    fn name(&self) -> &str;

    /// A short description of what this sniff reports
    fn description(&self) -> &str;

    /// Whether occurrences of this kind are routed to this sniff
    fn handles(&self, kind: FeatureKind) -> bool;

    /// The features this sniff knows about
    fn registry(&self) -> &FeatureRegistry;

    /// Classify one occurrence by name
    fn check(&self, name: &str, range: &CompatibilityRange) -> Option<Diagnostic> {
        self.registry()
            .lookup(name)
            .and_then(|record| classify(record, range))
    }
}

/// A sniff whose features come from a [`Catalog`]
#[derive(Debug)]
pub struct CatalogSniff {
    name: String,
    description: String,
    kinds: Vec<FeatureKind>,
    registry: FeatureRegistry,
}

impl CatalogSniff {
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, LoadError> {
        Ok(Self {
            name: catalog.name.clone(),
            description: catalog.description.clone(),
            kinds: catalog.kinds(),
            registry: build_registry(catalog)?,
        })
    }

    pub fn kinds(&self) -> &[FeatureKind] {
        &self.kinds
    }
}

impl Sniff for CatalogSniff {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn handles(&self, kind: FeatureKind) -> bool {
        self.kinds.contains(&kind)
    }

    fn registry(&self) -> &FeatureRegistry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::load_catalog_from_string;
    use phpcompat_core::{Severity, Version};

    fn sniff() -> CatalogSniff {
        let catalog = load_catalog_from_string(
            r#"
name: new_classes
description: New classes
kind: class
normalization: case_insensitive
features:
  - { name: WeakMap, absent: ["7.4"], present: "8.0" }
  - { name: Stringable, kind: interface, absent: ["7.4"], present: "8.0" }
"#,
        )
        .unwrap();
        CatalogSniff::from_catalog(&catalog).unwrap()
    }

    #[test]
    fn test_handles_catalog_kinds() {
        let sniff = sniff();
        assert!(sniff.handles(FeatureKind::Class));
        assert!(sniff.handles(FeatureKind::Interface));
        assert!(!sniff.handles(FeatureKind::Function));
        assert_eq!(sniff.name(), "new_classes");
    }

    #[test]
    fn test_check_by_name() {
        let sniff = sniff();
        let range = CompatibilityRange::at_least(Version::new(7, 3));

        let diag = sniff.check("weakmap", &range).unwrap();
        assert_eq!(diag.severity, Severity::Error);
        assert_eq!(
            diag.render(),
            "The built-in class WeakMap is not present in PHP version 7.4 or earlier"
        );

        let diag = sniff.check("Stringable", &range).unwrap();
        assert!(diag.render().starts_with("The built-in interface Stringable"));

        assert!(sniff.check("ArrayObject", &range).is_none());
    }
}
