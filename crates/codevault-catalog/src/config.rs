//! Catalog configuration.
//!
//! Every field defaults to the built-in tables in [`crate::table`], so a
//! config file only needs to name what it overrides:
//!
//! ```json
//! { "data_path": "/tmp/data.json", "categories": [
//!     { "key": "Go", "label": "15-35套-Go", "tags": ["Go"], "count": 3 } ] }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};
use crate::model::CategorySpec;
use crate::table;

/// Shared target of the generator and the link normalizer.
pub const DEFAULT_DATA_PATH: &str = "/srv/codevault/data.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub data_path: PathBuf,
    pub link: String,
    pub id_base: u64,
    /// Generation order is the order of this list.
    pub categories: Vec<CategorySpec>,
    pub templates: Vec<String>,
    pub prefixes: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            link: table::DEFAULT_LINK.to_string(),
            id_base: table::DEFAULT_ID_BASE,
            categories: table::default_categories(),
            templates: table::PROJECT_TEMPLATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            prefixes: table::NAME_PREFIXES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let config: CatalogConfig =
            serde_json::from_str(&text).map_err(|source| CatalogError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.templates.is_empty() {
            return Err(CatalogError::InvalidConfig(
                "template list is empty".to_string(),
            ));
        }
        if self.prefixes.is_empty() {
            return Err(CatalogError::InvalidConfig(
                "prefix list is empty".to_string(),
            ));
        }
        let mut seen = HashSet::new();
        for category in &self.categories {
            if category.key.is_empty() {
                return Err(CatalogError::InvalidConfig(format!(
                    "category `{}` has an empty key",
                    category.label
                )));
            }
            if !seen.insert(category.key.as_str()) {
                return Err(CatalogError::InvalidConfig(format!(
                    "duplicate category key `{}`",
                    category.key
                )));
            }
        }
        let total = self
            .categories
            .iter()
            .try_fold(0u64, |acc, c| acc.checked_add(c.count as u64))
            .filter(|&total| usize::try_from(total).is_ok())
            .ok_or_else(|| {
                CatalogError::InvalidConfig("category counts overflow".to_string())
            })?;
        if self.id_base.checked_add(total).is_none() {
            return Err(CatalogError::InvalidConfig(format!(
                "id_base {} overflows with {total} records",
                self.id_base
            )));
        }
        Ok(())
    }

    pub fn category(&self, key: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Sum of category counts. Saturates; [`Self::validate`] rejects configs
    /// where it would overflow.
    pub fn total_records(&self) -> usize {
        self.categories
            .iter()
            .fold(0usize, |acc, c| acc.saturating_add(c.count))
    }
}
