//! Index document rendering.
//!
//! Produces the README text from a [`Catalog`]. The document is a fixed
//! frame (title, introduction, overview, usage notes) around the generated
//! "Plans by Category" listing:
//!
//! ```text
//! # Claude Learning Plans
//! ...
//! ## Overview
//!
//! This repository contains 12 self-paced learning plans ...
//!
//! ## Plans by Category
//!
//! ### Languages & Paradigms
//!
//! - [Go Internals](go-internals.md) — Deep dive
//!
//! ## How to Use These Plans
//! ...
//! ```
//!
//! Field values are interpolated as-is. A title containing `]` or a
//! description containing markdown will change how the listing renders.

use crate::catalog::{Catalog, Entry};
use std::fs;
use std::path::Path;

const TITLE: &str = "# Claude Learning Plans";

const INTRO: &str = "Structured, multi-week learning curricula for senior engineers who want \
deep mastery of backend, infrastructure, and systems topics.";

const HOW_TO_USE_LEAD: &str = "Each plan is a standalone Markdown file structured around:";

const HOW_TO_USE_STEPS: [&str; 3] = [
    "1. **Phases** — Progressive stages from foundations to advanced topics, \
typically spanning 12–16 weeks.",
    "2. **Milestones** — Concrete projects and exercises at each phase to \
validate understanding.",
    "3. **Curated Resources** — Books, documentation, talks, and blog posts \
selected for each topic.",
];

const HOW_TO_USE_CLOSING: &str = "Pick a plan that matches your current learning goal, work \
through the phases at your own pace, and use the milestones to gauge progress.";

/// Overview sentence for `total` plans.
pub fn overview_sentence(total: usize) -> String {
    format!(
        "This repository contains {total} self-paced learning plans generated with Claude. \
Each plan follows a phased, project-based format designed for working engineers — \
typically 12–16 weeks of focused study with curated resources, hands-on milestones, \
and progressive complexity. Topics range from Spring Boot internals to Kubernetes, \
Go, and distributed data systems."
    )
}

/// Bullet line for one entry.
pub fn entry_line(entry: &Entry) -> String {
    format!(
        "- [{}]({}) — {}",
        entry.title, entry.filename, entry.description
    )
}

/// Render the document as lines, without separators.
///
/// The last line is empty so that joining with `\n` ends the document with
/// exactly one newline.
pub fn render_lines(catalog: &Catalog) -> Vec<String> {
    let mut lines: Vec<String> = vec![
        TITLE.into(),
        String::new(),
        INTRO.into(),
        String::new(),
        "## Overview".into(),
        String::new(),
        overview_sentence(catalog.total),
        String::new(),
        "## Plans by Category".into(),
    ];

    for group in &catalog.groups {
        lines.push(String::new());
        lines.push(format!("### {}", group.name));
        lines.push(String::new());
        lines.extend(group.entries.iter().map(entry_line));
    }

    lines.push(String::new());
    lines.push("## How to Use These Plans".into());
    lines.push(String::new());
    lines.push(HOW_TO_USE_LEAD.into());
    lines.push(String::new());
    lines.extend(HOW_TO_USE_STEPS.iter().map(|s| s.to_string()));
    lines.push(String::new());
    lines.push(HOW_TO_USE_CLOSING.into());
    lines.push(String::new());

    lines
}

/// Render the full document text.
pub fn render(catalog: &Catalog) -> String {
    render_lines(catalog).join("\n")
}

/// Write the rendered document, replacing any existing file.
pub fn write_index(path: &Path, text: &str) -> std::io::Result<()> {
    fs::write(path, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CategoryGroup;
    use tempfile::TempDir;

    fn entry(title: &str, filename: &str, description: &str) -> Entry {
        Entry {
            title: title.to_string(),
            category: "Languages & Paradigms".to_string(),
            description: description.to_string(),
            filename: filename.to_string(),
        }
    }

    fn single_group_catalog() -> Catalog {
        Catalog {
            groups: vec![CategoryGroup {
                name: "Languages & Paradigms".to_string(),
                entries: vec![entry("Go Internals", "a.md", "Deep dive")],
            }],
            total: 1,
        }
    }

    #[test]
    fn entry_line_format() {
        assert_eq!(
            entry_line(&entry("Go Internals", "a.md", "Deep dive")),
            "- [Go Internals](a.md) — Deep dive"
        );
    }

    #[test]
    fn document_starts_with_title() {
        let text = render(&Catalog::default());
        assert!(text.starts_with("# Claude Learning Plans\n\nStructured, multi-week"));
    }

    #[test]
    fn document_ends_with_single_newline() {
        let text = render(&single_group_catalog());
        assert!(text.ends_with("gauge progress.\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn overview_interpolates_total() {
        let text = render(&single_group_catalog());
        assert!(text.contains("This repository contains 1 self-paced learning plans"));
    }

    #[test]
    fn group_renders_heading_then_bullets() {
        let text = render(&single_group_catalog());
        assert!(text.contains(
            "## Plans by Category\n\n### Languages & Paradigms\n\n- [Go Internals](a.md) — Deep dive\n\n## How to Use These Plans"
        ));
    }

    #[test]
    fn empty_catalog_has_empty_listing() {
        let text = render(&Catalog::default());
        assert!(text.contains("## Plans by Category\n\n## How to Use These Plans"));
        assert!(text.contains("contains 0 self-paced"));
        assert!(!text.contains("###"));
    }

    #[test]
    fn groups_render_in_catalog_order() {
        let catalog = Catalog {
            groups: vec![
                CategoryGroup {
                    name: "APIs & Protocols".to_string(),
                    entries: vec![entry("gRPC", "grpc.md", "RPC")],
                },
                CategoryGroup {
                    name: "ZZZ-Custom".to_string(),
                    entries: vec![entry("Custom", "custom.md", "Misc")],
                },
            ],
            total: 2,
        };
        let text = render(&catalog);
        let apis = text.find("### APIs & Protocols").unwrap();
        let custom = text.find("### ZZZ-Custom").unwrap();
        assert!(apis < custom);
    }

    #[test]
    fn field_values_are_not_escaped() {
        let catalog = Catalog {
            groups: vec![CategoryGroup {
                name: "C++ & <Templates>".to_string(),
                entries: vec![entry("*Bold* [x]", "x.md", "a_b | c")],
            }],
            total: 1,
        };
        let text = render(&catalog);
        assert!(text.contains("### C++ & <Templates>"));
        assert!(text.contains("- [*Bold* [x]](x.md) — a_b | c"));
    }

    #[test]
    fn how_to_use_section_is_static() {
        let lines = render_lines(&Catalog::default());
        let start = lines
            .iter()
            .position(|l| l == "## How to Use These Plans")
            .unwrap();
        assert_eq!(lines[start + 2], HOW_TO_USE_LEAD);
        assert!(lines[start + 4].starts_with("1. **Phases**"));
        assert!(lines[start + 5].starts_with("2. **Milestones**"));
        assert!(lines[start + 6].starts_with("3. **Curated Resources**"));
        assert_eq!(lines.last().map(String::as_str), Some(""));
    }

    #[test]
    fn write_index_overwrites_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("README.md");
        fs::write(&path, "old content that is much longer than the new content").unwrap();
        write_index(&path, "new\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }
}
