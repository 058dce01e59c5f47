//! Plan file discovery.
//!
//! Lists the markdown files directly inside the plans directory. Hidden files
//! are skipped the way a `*.md` shell glob skips them, and the extension
//! match is case-sensitive for the same reason. Subdirectories are not
//! searched.
//!
//! Entries that cannot be listed, and `.md` files whose name is not valid
//! UTF-8, are left out with a warning.

use crate::generate::SKIP_TARGET;
use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const MARKDOWN_EXTENSION: &str = "md";

/// Return candidate plan files in `dir`, sorted by path.
///
/// Files whose name is in `excluded` are left out. A missing or unreadable
/// directory is an error.
pub fn discover(dir: &Path, excluded: &BTreeSet<String>) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(err) => {
                warn!(target: SKIP_TARGET, "unreadable entry in {}: {err}, skipping", dir.display());
                continue;
            }
        };
        if path.is_file() && is_candidate(&path, excluded) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn is_candidate(path: &Path, excluded: &BTreeSet<String>) -> bool {
    if path.extension() != Some(OsStr::new(MARKDOWN_EXTENSION)) {
        return false;
    }
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        warn!(target: SKIP_TARGET, "{} file name is not valid UTF-8, skipping", path.display());
        return false;
    };
    !name.starts_with('.') && !excluded.contains(name)
}
