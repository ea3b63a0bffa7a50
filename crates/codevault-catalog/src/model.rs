//! Catalog record types.

use serde::{Deserialize, Serialize};

/// One synthetic catalog entry, as stored in `data.json`.
///
/// Field order matters: it is the key order of the on-disk objects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectRecord {
    pub id: u64,
    /// Display label, e.g. `01-92套-21-SpringBoot`.
    pub category: String,
    /// Category key, e.g. `SpringBoot`.
    pub short_category: String,
    pub name: String,
    pub tags: Vec<String>,
    pub link: String,
}

/// One row of the category table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategorySpec {
    /// Short key; lowercased into generated names and stored as `short_category`.
    pub key: String,
    pub label: String,
    pub tags: Vec<String>,
    /// Number of records generated for this category.
    pub count: usize,
}

impl CategorySpec {
    pub fn new(key: &str, label: &str, tags: &[&str], count: usize) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            count,
        }
    }

    /// Build a record belonging to this category.
    pub fn record(&self, id: u64, name: String, link: &str) -> ProjectRecord {
        ProjectRecord {
            id,
            category: self.label.clone(),
            short_category: self.key.clone(),
            name,
            tags: self.tags.clone(),
            link: link.to_string(),
        }
    }
}
