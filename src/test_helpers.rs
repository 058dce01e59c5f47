//! Shared test utilities for the plan-index test suite.
//!
//! Fixture setup plus lookup helpers that panic with the available names on
//! a miss, so a failing assertion says what was there instead.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_plans();
//! let scan = scan(tmp.path(), &IndexConfig::default()).unwrap();
//!
//! let group = find_group(&scan.catalog, "Languages & Paradigms");
//! assert_eq!(entry_titles(group), vec!["elixir and OTP", "Go Internals"]);
//! ```

use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

use crate::catalog::{Catalog, CategoryGroup, Skipped};
use crate::generate::Scan;

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/plans/` to a temp directory and return it.
///
/// The fixture set holds eight valid plans across seven categories, one file
/// without front matter (`draft.md`), one missing its description
/// (`incomplete.md`), and a `CLAUDE.md` with plan-like metadata.
pub fn setup_plans() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/plans");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

/// Write a plan file with double-quoted front matter.
pub fn write_plan(dir: &Path, filename: &str, title: &str, category: &str, description: &str) {
    let content = format!(
        "---\ntitle: \"{title}\"\ncategory: \"{category}\"\ndescription: \"{description}\"\n---\n\n# {title}\n"
    );
    std::fs::write(dir.join(filename), content).unwrap();
}

// =========================================================================
// Log capture
// =========================================================================

/// Shared byte sink for a test subscriber.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Run `f` with warnings captured as bare message lines.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .without_time()
        .with_level(false)
        .with_target(false)
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

/// True when some captured line reads exactly `expected`.
pub fn has_log_line(logs: &str, expected: &str) -> bool {
    logs.lines().any(|line| line.trim() == expected)
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a category group by name. Panics if not found.
pub fn find_group<'a>(catalog: &'a Catalog, name: &str) -> &'a CategoryGroup {
    catalog
        .groups
        .iter()
        .find(|g| g.name == name)
        .unwrap_or_else(|| {
            let names = catalog.category_names();
            panic!("category '{name}' not found. Available: {names:?}")
        })
}

/// Find the skip record for a file. Panics if the file was not skipped.
pub fn find_skipped<'a>(scan: &'a Scan, filename: &str) -> &'a Skipped {
    scan.skipped
        .iter()
        .find(|s| s.filename == filename)
        .unwrap_or_else(|| {
            let files: Vec<&str> = scan.skipped.iter().map(|s| s.filename.as_str()).collect();
            panic!("'{filename}' was not skipped. Skipped: {files:?}")
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// Entry titles of a group, in rendered order.
pub fn entry_titles(group: &CategoryGroup) -> Vec<&str> {
    group.entries.iter().map(|e| e.title.as_str()).collect()
}

/// Every entry filename in the catalog, in rendered order.
pub fn entry_filenames(catalog: &Catalog) -> Vec<&str> {
    catalog
        .groups
        .iter()
        .flat_map(|g| g.entries.iter().map(|e| e.filename.as_str()))
        .collect()
}
