//! # plan-index
//!
//! Keeps the `README.md` of a learning-plans directory in sync with the plans
//! themselves. Every plan is a markdown file that opens with front matter:
//!
//! ```text
//! ---
//! title: "Go Internals"
//! category: "Languages & Paradigms"
//! description: "Scheduler, garbage collector, and the runtime"
//! ---
//! ```
//!
//! The README lists every plan under its category, and is regenerated from
//! scratch on each run.
//!
//! # Architecture: Linear Pipeline
//!
//! ```text
//! 1. Discover  plans/*.md     →  candidate files
//! 2. Parse     front matter   →  entries (or skipped files)
//! 3. Catalog   entries        →  ordered category groups
//! 4. Render    catalog        →  README.md
//! ```
//!
//! Each stage is a plain function of its inputs and the [`config::IndexConfig`]
//! passed to it. There is no global state, so two runs over the same directory
//! write byte-identical output.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | Extracts `key: value` pairs from the leading `---` block |
//! | [`discover`] | Lists candidate markdown files, minus exclusions |
//! | [`catalog`] | Required-field gate, grouping, title sort, category order |
//! | [`render`] | README text and the write to disk |
//! | [`generate`] | The pipeline: `scan`, `generate`, `check` |
//! | [`config`] | `index.toml` loading over stock defaults |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Line Matchers, Not YAML
//!
//! Plans only ever carry flat `key: value` metadata, so the front matter block
//! is read line by line with three ordered patterns (double-quoted,
//! single-quoted, bare). Anything else in the block is ignored rather than
//! rejected. Swapping in a real YAML reader only touches [`frontmatter`].
//!
//! ## Skip, Don't Fail
//!
//! A plan without complete front matter is a work in progress, not a broken
//! build. It is left out of the index with a warning on stderr. Only I/O
//! failures and invalid configuration stop a run.
//!
//! ## Raw Interpolation
//!
//! Titles and descriptions are written into the README verbatim. Plan authors
//! write markdown already; escaping would only get in their way.

pub mod catalog;
pub mod config;
pub mod discover;
pub mod frontmatter;
pub mod generate;
pub mod output;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
