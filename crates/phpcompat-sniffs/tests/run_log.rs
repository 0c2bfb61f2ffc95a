//! Run log contents for a full check run
//!
//! Kept in its own test binary since the logger is process-wide.

use phpcompat_core::{FeatureKind, Occurrence};
use phpcompat_sniffs::config::{Config, PhpConfig, SniffsConfig};
use phpcompat_sniffs::logging;
use phpcompat_sniffs::SniffRegistry;
use tempfile::TempDir;

#[test]
fn test_run_log_records_each_section() {
    let dir = TempDir::new().unwrap();
    let log_path = dir.path().join("phpcompat.log");

    let path = logging::init_logger(Some(&log_path)).unwrap();
    assert_eq!(path, log_path);
    assert!(logging::is_enabled());

    let registry = SniffRegistry::with_builtin_sniffs().unwrap();
    let config = Config {
        php: PhpConfig {
            test_version: Some("7.0-".to_string()),
        },
        sniffs: SniffsConfig {
            enabled: None,
            disabled: vec!["removed_ini_directives".to_string()],
        },
    };
    let range = config.range(None).unwrap();
    let enabled = config.effective_sniffs(&registry.all_names());

    let files = vec![(
        "src/Helpers.php".to_string(),
        vec![
            Occurrence::new("str_contains", FeatureKind::Function, 3u32),
            Occurrence::new("strlen", FeatureKind::Function, 4),
        ],
    )];
    let results = registry.check_files(&files, &range, &enabled);
    assert_eq!(results[0].1.len(), 1);

    logging::shutdown_logger();
    assert!(!logging::is_enabled());

    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(content.contains("Loaded catalog 'new_functions'"));
    assert!(content.contains("Loaded catalog 'removed_ini_directives'"));
    assert!(content.contains("COMPATIBILITY RANGE"));
    assert!(content.contains("[config] test version = 7.0-"));
    assert!(content.contains("ENABLED SNIFFS"));
    assert!(content.contains("  new_functions"));
    assert!(!content.contains("  removed_ini_directives"));
    assert!(content.contains("[src/Helpers.php] 2 occurrences checked, 1 findings"));

    // Nothing is written after shutdown
    logging::log("after shutdown");
    let content = std::fs::read_to_string(&log_path).unwrap();
    assert!(!content.contains("after shutdown"));
}
