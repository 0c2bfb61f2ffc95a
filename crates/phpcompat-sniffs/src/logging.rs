//! Run log for phpcompat-sniffs
//!
//! Records catalog loading, the configured range, enabled sniffs and check
//! summaries to a file, for debugging why something was or was not
//! reported. Nothing is written until [`init_logger`] is called.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use phpcompat_core::CompatibilityRange;

/// Global logger instance
static LOGGER: Mutex<Option<RunLogger>> = Mutex::new(None);

/// File-backed logger
pub struct RunLogger {
    file: File,
    path: PathBuf,
}

impl RunLogger {
    /// Create a new logger writing to the specified path
    pub fn new(log_path: &Path) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;

        Ok(Self {
            file,
            path: log_path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a log message
    pub fn log(&mut self, message: &str) {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let _ = writeln!(self.file, "[{}] {}", timestamp, message);
        let _ = self.file.flush();
    }

    /// Log a section header
    pub fn section(&mut self, title: &str) {
        let separator = "=".repeat(60);
        self.log(&separator);
        self.log(title);
        self.log(&separator);
    }
}

/// Initialize the global logger
///
/// Without a path, logs go to a timestamped file in the temp directory.
pub fn init_logger(log_path: Option<&Path>) -> std::io::Result<PathBuf> {
    let path = log_path.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        std::env::temp_dir().join(format!("phpcompat-{}.log", timestamp))
    });

    let logger = RunLogger::new(&path)?;

    if let Ok(mut guard) = LOGGER.lock() {
        *guard = Some(logger);
    }

    Ok(path)
}

/// Stop logging and close the file
pub fn shutdown_logger() {
    if let Ok(mut guard) = LOGGER.lock() {
        *guard = None;
    }
}

/// Log a message to the global logger
pub fn log(message: &str) {
    if let Ok(mut guard) = LOGGER.lock() {
        if let Some(ref mut logger) = *guard {
            logger.log(message);
        }
    }
}

/// Log a section header
pub fn section(title: &str) {
    if let Ok(mut guard) = LOGGER.lock() {
        if let Some(ref mut logger) = *guard {
            logger.section(title);
        }
    }
}

/// Check if logging is enabled
pub fn is_enabled() -> bool {
    if let Ok(guard) = LOGGER.lock() {
        guard.is_some()
    } else {
        false
    }
}

/// Log a catalog turned into a registry
pub fn log_catalog_loaded(name: &str, records: usize) {
    log(&format!("Loaded catalog '{}' with {} features", name, records));
}

/// Log the configured range
pub fn log_range(source: &str, range: &CompatibilityRange) {
    section("COMPATIBILITY RANGE");
    log(&format!("[{}] test version = {}", source, range));
}

/// Log which sniffs will run
pub fn log_enabled_sniffs(names: &[&str]) {
    section("ENABLED SNIFFS");
    for name in names {
        log(&format!("  {}", name));
    }
}

/// Log the outcome of checking one batch of occurrences
pub fn log_check_summary(label: &str, occurrences: usize, findings: usize) {
    log(&format!(
        "[{}] {} occurrences checked, {} findings",
        label, occurrences, findings
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_writes_sections() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("run.log");

        let mut logger = RunLogger::new(&path).unwrap();
        logger.section("COMPATIBILITY RANGE");
        logger.log("test version = 7.4-");
        assert_eq!(logger.path(), path.as_path());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("COMPATIBILITY RANGE"));
        assert!(content.contains("test version = 7.4-"));
        assert_eq!(content.lines().count(), 4);
    }
}
