//! phpcompat-sniffs: PHP compatibility sniffs
//!
//! Each sniff checks one family of features against the configured PHP
//! versions. The feature tables are YAML catalogs embedded in the crate:
//!
//! - new_classes / new_functions / new_constants / new_ini_directives:
//!   report features missing from the oldest targeted versions
//! - removed_classes / removed_functions / removed_constants / removed_ini_directives:
//!   report features deprecated or removed in the newest targeted versions
//!
//! # Example
//!
//! ```no_run
//! use phpcompat_core::{FeatureKind, Occurrence};
//! use phpcompat_sniffs::{Config, SniffRegistry};
//! use std::path::Path;
//!
//! let (config, _) = Config::load_from(Path::new(".")).unwrap().unwrap();
//! let range = config.range(None).unwrap();
//!
//! let registry = SniffRegistry::with_builtin_sniffs().unwrap();
//! let enabled = config.effective_sniffs(&registry.all_names());
//!
//! let occurrences = vec![Occurrence::new("str_contains", FeatureKind::Function, (12, 9))];
//! for finding in registry.check_all(&occurrences, &range, &enabled) {
//!     println!("{:?}: {}", finding.position, finding.diagnostic);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod logging;
pub mod registry;
pub mod sniff;

pub use catalog::{Catalog, CatalogEntry, LoadError};
pub use config::{Config, ConfigError};
pub use registry::SniffRegistry;
pub use sniff::{CatalogSniff, Sniff};
