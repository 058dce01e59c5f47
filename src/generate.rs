//! The index pipeline.
//!
//! ```text
//! discover  plans/*.md        →  candidate files   (exclusions applied)
//! parse     front matter      →  entries + skips   (per file, recoverable)
//! catalog   group and order   →  Catalog
//! render    text              →  plans/README.md   (overwritten)
//! ```
//!
//! Files without usable front matter are skipped with a warning; they never
//! fail the run. Anything that stops the pipeline itself (missing directory,
//! unreadable plan, unwritable output, bad `index.toml`) is an [`IndexError`].

use crate::catalog::{Catalog, Entry, SkipReason, Skipped};
use crate::config::{ConfigError, IndexConfig};
use crate::discover::discover;
use crate::frontmatter::read_front_matter;
use crate::render::{render, write_index};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Log target of the per-file skip warnings.
///
/// The binary keeps this target at `warn` whatever `RUST_LOG` says.
pub const SKIP_TARGET: &str = "plan_index::skipped";

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Plans directory not found: {0}")]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Catalog plus the files that were left out of it.
#[derive(Debug, Serialize)]
pub struct Scan {
    pub catalog: Catalog,
    pub skipped: Vec<Skipped>,
}

/// Result of writing the index.
#[derive(Debug)]
pub struct Report {
    pub scan: Scan,
    pub output_path: PathBuf,
}

/// How the index on disk compares with a fresh rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

/// Discover and parse every plan in `dir`, and build the catalog.
pub fn scan(dir: &Path, config: &IndexConfig) -> Result<Scan, IndexError> {
    if !dir.is_dir() {
        return Err(IndexError::NotADirectory(dir.to_path_buf()));
    }

    let files = discover(dir, &config.excluded())?;
    debug!(count = files.len(), dir = %dir.display(), "discovered plan files");

    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    for path in &files {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let parsed = match read_front_matter(path)? {
            Some(fm) => Entry::from_front_matter(&filename, &fm),
            None => Err(SkipReason::NoFrontMatter),
        };

        match parsed {
            Ok(entry) => {
                debug!(file = %filename, category = %entry.category, "parsed plan");
                entries.push(entry);
            }
            Err(reason) => {
                warn!(target: SKIP_TARGET, "{filename} {reason}, skipping");
                skipped.push(Skipped { filename, reason });
            }
        }
    }

    let catalog = Catalog::build(entries, &config.category_order);
    Ok(Scan { catalog, skipped })
}

/// Render the index for `dir` and write it to the configured output file.
pub fn generate(dir: &Path, config: &IndexConfig) -> Result<Report, IndexError> {
    let scan = scan(dir, config)?;
    let text = render(&scan.catalog);

    let output_path = dir.join(&config.output);
    write_index(&output_path, &text)?;
    info!(
        plans = scan.catalog.total,
        categories = scan.catalog.groups.len(),
        "wrote {}",
        output_path.display()
    );

    Ok(Report { scan, output_path })
}

/// Compare the index on disk with what [`generate`] would write.
pub fn check(dir: &Path, config: &IndexConfig) -> Result<(Scan, CheckOutcome), IndexError> {
    let scan = scan(dir, config)?;
    let expected = render(&scan.catalog);

    let output_path = dir.join(&config.output);
    let outcome = if !output_path.exists() {
        CheckOutcome::Missing
    } else if fs::read_to_string(&output_path)? == expected {
        CheckOutcome::UpToDate
    } else {
        CheckOutcome::Stale
    };

    Ok((scan, outcome))
}
