//! Front matter extraction.
//!
//! A plan file may open with a metadata block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: "Go Internals"
//! category: 'Languages & Paradigms'
//! description: Deep dive into the runtime
//! ---
//! # Body (ignored)
//! ```
//!
//! This is not a YAML parser. Each line of the block is tried against an
//! ordered list of [`LineMatcher`]s and the first one that matches supplies
//! the key and value. Lines no matcher accepts (comments, lists, nested
//! mappings) are ignored. Duplicate keys keep the last value.
//!
//! The block must start on the first byte of the file, and the closing fence
//! must be followed by a newline. A file without such a block has no front
//! matter at all (`None`), which callers treat differently from a block that
//! yielded no keys (`Some` of an empty map).

use regex::Regex;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Key/value pairs from a front matter block.
pub type FrontMatter = BTreeMap<String, String>;

static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\s*\n(.*?\n)---\s*\n").expect("front matter block pattern must compile")
});

static DOUBLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\w+)\s*:\s*"(.+)"$"#).expect("double-quoted pattern must compile")
});

static SINGLE_QUOTED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+)\s*:\s*'(.+)'$").expect("single-quoted pattern must compile")
});

static BARE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+)\s*:\s*(.+)$").expect("bare pattern must compile"));

/// One way of reading a `key: value` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatcher {
    /// `key: "value"`
    DoubleQuoted,
    /// `key: 'value'`
    SingleQuoted,
    /// `key: value`
    Bare,
}

impl LineMatcher {
    /// Matchers in precedence order.
    pub const PRECEDENCE: [LineMatcher; 3] = [
        LineMatcher::DoubleQuoted,
        LineMatcher::SingleQuoted,
        LineMatcher::Bare,
    ];

    fn pattern(self) -> &'static Regex {
        match self {
            LineMatcher::DoubleQuoted => &DOUBLE_QUOTED,
            LineMatcher::SingleQuoted => &SINGLE_QUOTED,
            LineMatcher::Bare => &BARE,
        }
    }

    /// Extract `(key, value)` from a line, value trimmed.
    pub fn capture(self, line: &str) -> Option<(&str, &str)> {
        let caps = self.pattern().captures(line)?;
        let key = caps.get(1)?.as_str();
        let value = caps.get(2)?.as_str().trim();
        Some((key, value))
    }
}

/// Parse one front matter line with the first matcher that accepts it.
pub fn parse_line(line: &str) -> Option<(LineMatcher, &str, &str)> {
    LineMatcher::PRECEDENCE.iter().find_map(|&matcher| {
        matcher
            .capture(line)
            .map(|(key, value)| (matcher, key, value))
    })
}

/// Parse the front matter block at the start of `content`.
///
/// Returns `None` when the content does not open with a fenced block.
pub fn parse_front_matter(content: &str) -> Option<FrontMatter> {
    let block = BLOCK.captures(content)?.get(1)?.as_str();

    let mut front_matter = FrontMatter::new();
    for line in block.lines() {
        if let Some((_, key, value)) = parse_line(line) {
            front_matter.insert(key.to_string(), value.to_string());
        }
    }
    Some(front_matter)
}

/// Read a file and parse its front matter.
///
/// Read and UTF-8 decode failures are returned as errors; a missing block
/// is `Ok(None)`.
pub fn read_front_matter(path: &Path) -> std::io::Result<Option<FrontMatter>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_front_matter(&content))
}
