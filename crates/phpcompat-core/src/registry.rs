//! Name-indexed feature lookup

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;

use crate::{CompatError, FeatureRecord};

/// How feature names are turned into registry keys
///
/// A leading namespace separator is always dropped, so `\ArrayObject`
/// and `ArrayObject` share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyNormalization {
    /// Names match byte for byte (global constants)
    #[default]
    CaseSensitive,
    /// Names match ignoring ASCII case (classes, functions, ini directives)
    CaseInsensitive,
}

impl KeyNormalization {
    pub fn normalize<'a>(&self, name: &'a str) -> Cow<'a, str> {
        let name = name.trim_start_matches('\\');
        match self {
            KeyNormalization::CaseSensitive => Cow::Borrowed(name),
            KeyNormalization::CaseInsensitive => {
                if name.bytes().any(|b| b.is_ascii_uppercase()) {
                    Cow::Owned(name.to_ascii_lowercase())
                } else {
                    Cow::Borrowed(name)
                }
            }
        }
    }
}

/// Registry of feature records
///
/// Built once with `register()`, then only read. Lookups take `&self`, so a
/// finished registry can be shared between threads (e.g. in an `Arc`).
#[derive(Debug, Clone, Default)]
pub struct FeatureRegistry {
    normalization: KeyNormalization,
    features: HashMap<String, FeatureRecord>,
}

impl FeatureRegistry {
    pub fn new(normalization: KeyNormalization) -> Self {
        Self {
            normalization,
            features: HashMap::new(),
        }
    }

    pub fn case_sensitive() -> Self {
        Self::new(KeyNormalization::CaseSensitive)
    }

    pub fn case_insensitive() -> Self {
        Self::new(KeyNormalization::CaseInsensitive)
    }

    /// Build a registry from records, failing on the first duplicate
    pub fn from_records(
        normalization: KeyNormalization,
        records: impl IntoIterator<Item = FeatureRecord>,
    ) -> Result<Self, CompatError> {
        let mut registry = Self::new(normalization);
        for record in records {
            registry.register(record)?;
        }
        Ok(registry)
    }

    /// Add a record
    pub fn register(&mut self, record: FeatureRecord) -> Result<(), CompatError> {
        let key = self.normalization.normalize(record.name()).into_owned();
        if self.features.contains_key(&key) {
            return Err(CompatError::DuplicateFeature(record.name().to_string()));
        }
        self.features.insert(key, record);
        Ok(())
    }

    /// Find the record for `name`; `None` means no rule applies
    pub fn lookup(&self, name: &str) -> Option<&FeatureRecord> {
        self.features.get(self.normalization.normalize(name).as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    pub fn normalization(&self) -> KeyNormalization {
        self.normalization
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// All records, in no particular order
    pub fn records(&self) -> impl Iterator<Item = &FeatureRecord> {
        self.features.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FeatureKind, FeatureTimeline, Version};

    fn class(name: &str) -> FeatureRecord {
        FeatureRecord::builder(name, FeatureKind::Class)
            .absent(Version::new(4, 4))
            .present(Version::new(5, 0))
            .build()
            .unwrap()
    }

    fn constant(name: &str) -> FeatureRecord {
        FeatureRecord::new(name, FeatureKind::Constant, FeatureTimeline::empty())
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let mut registry = FeatureRegistry::case_insensitive();
        registry.register(class("ArrayObject")).unwrap();

        let found = registry.lookup("arrayobject").unwrap();
        assert_eq!(found.name(), "ArrayObject");
        assert!(registry.contains("ARRAYOBJECT"));
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let mut registry = FeatureRegistry::case_sensitive();
        registry.register(constant("E_STRICT")).unwrap();

        assert!(registry.lookup("E_STRICT").is_some());
        assert!(registry.lookup("e_strict").is_none());
    }

    #[test]
    fn test_leading_backslash_ignored() {
        let mut registry = FeatureRegistry::case_insensitive();
        registry.register(class("ArrayObject")).unwrap();

        assert!(registry.contains("\\ArrayObject"));
    }

    #[test]
    fn test_miss_is_none() {
        let registry = FeatureRegistry::case_insensitive();
        assert!(registry.lookup("strlen").is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = FeatureRegistry::case_insensitive();
        registry.register(class("ArrayObject")).unwrap();

        let err = registry.register(class("arrayObject")).unwrap_err();
        assert_eq!(err, CompatError::DuplicateFeature("arrayObject".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_case_sensitive_keeps_distinct_names() {
        let registry = FeatureRegistry::from_records(
            KeyNormalization::CaseSensitive,
            vec![constant("FOO"), constant("foo")],
        )
        .unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_normalize_borrows_when_possible() {
        let norm = KeyNormalization::CaseInsensitive;
        assert!(matches!(norm.normalize("strlen"), Cow::Borrowed(_)));
        assert!(matches!(norm.normalize("StrLen"), Cow::Owned(_)));
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FeatureRegistry>();
    }
}
