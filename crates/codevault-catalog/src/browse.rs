//! Read-only catalog queries: category listing, search and "load more" paging.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::model::ProjectRecord;

/// Records revealed per "load more" step.
pub const ITEMS_PER_PAGE: usize = 24;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Matches either `short_category` or the full `category` label.
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, record: &ProjectRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => {
                record.short_category == *name || record.category == *name
            }
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "All" {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(s.to_string())
        })
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Named(name) => f.write_str(name),
        }
    }
}

/// Distinct category keys, sorted. Records with an empty `short_category`
/// contribute their `category` label instead.
pub fn categories(records: &[ProjectRecord]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for record in records {
        if !record.short_category.is_empty() {
            set.insert(record.short_category.as_str());
        } else if !record.category.is_empty() {
            set.insert(record.category.as_str());
        }
    }
    set.into_iter().map(str::to_string).collect()
}

/// Case-insensitive name search combined with a category filter.
pub fn filter<'a>(
    records: &'a [ProjectRecord],
    query: &str,
    category: &CategoryFilter,
) -> Vec<&'a ProjectRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle) && category.matches(r))
        .collect()
}

/// The prefix visible after `pages` "load more" steps (at least one page).
pub fn page<T>(items: &[T], pages: usize) -> &[T] {
    let visible = pages.max(1).saturating_mul(ITEMS_PER_PAGE);
    &items[..visible.min(items.len())]
}
