//! Synthetic catalog generation.
//!
//! Records are emitted category by category, in table order, with ids handed
//! out sequentially from `id_base`. Within a category the sequence number
//! starts at 1 and is baked into the name as three zero-padded digits.

use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::model::{CategorySpec, ProjectRecord};
use crate::rng::XorShift64;
use crate::table::PREFIX_PLACEHOLDER;

/// `lowercase(key) + index:03 + prefix + template`, with the category key
/// substituted into parameterized prefixes.
pub fn assemble_name(key: &str, index: usize, prefix: &str, template: &str) -> String {
    let prefix = if prefix.contains(PREFIX_PLACEHOLDER) {
        prefix.replace(PREFIX_PLACEHOLDER, key)
    } else {
        prefix.to_string()
    };
    format!("{}{index:03}{prefix}{template}", key.to_lowercase())
}

/// Pick a random prefix and assemble a name around `template`.
pub fn generate_name(
    key: &str,
    index: usize,
    template: &str,
    prefixes: &[String],
    rng: &mut XorShift64,
) -> Result<String> {
    let prefix = rng
        .choose(prefixes)
        .ok_or_else(|| CatalogError::InvalidConfig("prefix list is empty".to_string()))?;
    Ok(assemble_name(key, index, prefix, template))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// `(category key, records generated)` in generation order.
    pub per_category: Vec<(String, usize)>,
    pub total: usize,
}

impl GenerationSummary {
    pub fn category_count(&self) -> usize {
        self.per_category.len()
    }
}

pub struct CatalogGenerator<'a> {
    config: &'a CatalogConfig,
}

impl<'a> CatalogGenerator<'a> {
    pub fn new(config: &'a CatalogConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn generate(&self, rng: &mut XorShift64) -> Result<Vec<ProjectRecord>> {
        self.generate_with(rng, |_| {})
    }

    /// Like [`Self::generate`], calling `on_category` before each category.
    pub fn generate_with(
        &self,
        rng: &mut XorShift64,
        mut on_category: impl FnMut(&CategorySpec),
    ) -> Result<Vec<ProjectRecord>> {
        let config = self.config;
        let mut records = Vec::with_capacity(config.total_records());
        let mut next_id = config.id_base;

        for category in &config.categories {
            on_category(category);
            debug!(category = %category.key, count = category.count, "generating category");
            for index in 1..=category.count {
                let template = rng.choose(&config.templates).ok_or_else(|| {
                    CatalogError::InvalidConfig("template list is empty".to_string())
                })?;
                let name = generate_name(&category.key, index, template, &config.prefixes, rng)?;
                records.push(category.record(next_id, name, &config.link));
                next_id += 1;
            }
        }

        info!(
            records = records.len(),
            categories = config.categories.len(),
            "catalog generated"
        );
        Ok(records)
    }

    pub fn summary(&self, records: &[ProjectRecord]) -> GenerationSummary {
        let per_category = self
            .config
            .categories
            .iter()
            .map(|c| {
                let n = records
                    .iter()
                    .filter(|r| r.short_category == c.key)
                    .count();
                (c.key.clone(), n)
            })
            .collect();
        GenerationSummary {
            per_category,
            total: records.len(),
        }
    }
}
