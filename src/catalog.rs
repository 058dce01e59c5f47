//! Grouping and ordering of plan entries.
//!
//! Turns the flat list of parsed plans into the structure the index renders:
//! categories in display order, each holding its plans sorted by title.
//!
//! ## Ordering rules
//!
//! - **Entries** within a category sort by title, case-insensitively. The sort
//!   is stable, so titles that compare equal keep discovery order.
//! - **Categories** in the preferred list come first, in list order. All other
//!   categories follow in plain string order (`"Zig" < "api"`).
//!
//! Category names are opaque: `"API"` and `"api"` are two categories.

use crate::frontmatter::FrontMatter;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Front matter keys every plan must provide, in reporting order.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "category", "description"];

/// One plan file with complete metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub title: String,
    pub category: String,
    pub description: String,
    /// File name relative to the plans directory, used as the link target.
    pub filename: String,
}

/// Why a markdown file did not become an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "fields", rename_all = "snake_case")]
pub enum SkipReason {
    NoFrontMatter,
    /// Required keys that were absent or empty.
    MissingFields(Vec<&'static str>),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoFrontMatter => write!(f, "has no front matter"),
            SkipReason::MissingFields(fields) => write!(
                f,
                "missing required front matter fields ({})",
                fields.join(", ")
            ),
        }
    }
}

/// A file left out of the index, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    pub filename: String,
    pub reason: SkipReason,
}

impl Entry {
    /// Build an entry if all required fields are present and non-empty.
    pub fn from_front_matter(filename: &str, fm: &FrontMatter) -> Result<Entry, SkipReason> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|key| non_empty(fm, key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(SkipReason::MissingFields(missing));
        }

        let take = |key: &str| non_empty(fm, key).cloned().unwrap_or_default();
        Ok(Entry {
            title: take("title"),
            category: take("category"),
            description: take("description"),
            filename: filename.to_string(),
        })
    }
}

fn non_empty<'a>(fm: &'a FrontMatter, key: &str) -> Option<&'a String> {
    fm.get(key).filter(|v| !v.is_empty())
}

/// Plans sharing one category, sorted by title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub name: String,
    pub entries: Vec<Entry>,
}

/// All plans, grouped and ordered for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    pub groups: Vec<CategoryGroup>,
    /// Number of entries across all groups.
    pub total: usize,
}

impl Catalog {
    /// Group `entries` by category and order them.
    ///
    /// `entries` should be in discovery order; it breaks ties between titles
    /// that compare equal.
    pub fn build(entries: Vec<Entry>, preferred: &[String]) -> Catalog {
        let mut by_category: BTreeMap<String, Vec<Entry>> = BTreeMap::new();
        for entry in entries {
            by_category
                .entry(entry.category.clone())
                .or_default()
                .push(entry);
        }

        for group in by_category.values_mut() {
            group.sort_by_cached_key(|e| e.title.to_lowercase());
        }

        let order = category_order(by_category.keys().map(String::as_str), preferred);

        let groups: Vec<CategoryGroup> = order
            .into_iter()
            .filter_map(|name| {
                by_category
                    .remove(&name)
                    .map(|entries| CategoryGroup { name, entries })
            })
            .collect();
        let total = groups.iter().map(|g| g.entries.len()).sum();

        Catalog { groups, total }
    }

    /// Category names in display order.
    pub fn category_names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Order the `present` categories: preferred ones first in preferred order,
/// the rest sorted alphabetically.
pub fn category_order<'a>(
    present: impl IntoIterator<Item = &'a str>,
    preferred: &[String],
) -> Vec<String> {
    let mut rest: Vec<&str> = present.into_iter().collect();
    rest.sort_unstable();
    rest.dedup();

    let mut ordered: Vec<String> = preferred
        .iter()
        .filter(|p| rest.contains(&p.as_str()))
        .cloned()
        .collect();
    rest.retain(|c| !preferred.iter().any(|p| p.as_str() == *c));
    ordered.extend(rest.into_iter().map(String::from));
    ordered
}
