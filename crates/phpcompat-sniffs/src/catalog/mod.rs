//! Feature catalogs: version tables kept as YAML data
//!
//! A catalog describes one family of features (new classes, removed
//! functions, ...) and loads into a [`FeatureRegistry`](phpcompat_core::FeatureRegistry).
//!
//! # Example Catalog
//!
//! ```yaml
//! name: new_classes
//! description: Built-in classes not available in older PHP versions
//! kind: class
//! normalization: case_insensitive
//! features:
//!   - { name: ArrayObject, absent: ["4.4"], present: "5.0", extension: spl }
//!   - { name: Stringable, kind: interface, absent: ["7.4"], present: "8.0" }
//! ```
//!
//! Quote versions: a bare 5.10 is a float to most YAML readers.

pub mod builtin;
pub mod loader;
pub mod schema;

pub use builtin::{builtin_catalogs, BUILTIN_CATALOGS};
pub use loader::{build_registry, load_catalog_from_file, load_catalog_from_string, LoadError};
pub use schema::{Catalog, CatalogEntry};
