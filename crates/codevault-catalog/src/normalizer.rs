//! Link normalization.
//!
//! Works on raw JSON rather than [`crate::model::ProjectRecord`] so records
//! with missing or extra keys survive the rewrite untouched.

use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::{CatalogError, Result};
use crate::store;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub total: usize,
    pub updated: usize,
}

impl NormalizeReport {
    pub fn unchanged(&self) -> usize {
        self.total - self.updated
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Set `link` to `target` on every array element that has a differing
/// `link`. Elements without the key, and non-object elements, are left as is.
pub fn normalize_links(data: &mut Value, target: &str) -> Result<NormalizeReport> {
    let items = match data {
        Value::Array(items) => items,
        other => {
            return Err(CatalogError::NotAnArray {
                found: json_kind(other),
            })
        }
    };

    let mut report = NormalizeReport {
        total: items.len(),
        updated: 0,
    };
    for (position, item) in items.iter_mut().enumerate() {
        let object = match item {
            Value::Object(object) => object,
            other => {
                warn!(position, kind = json_kind(other), "skipping non-object record");
                continue;
            }
        };
        if let Some(link) = object.get_mut("link") {
            if link.as_str() != Some(target) {
                *link = Value::String(target.to_string());
                report.updated += 1;
            }
        }
    }
    Ok(report)
}

/// Steps of [`update_links_file_with`], in the order they happen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeStep<'a> {
    Reading(&'a Path),
    /// Number of top-level elements about to be processed.
    Processing(usize),
    Saving(&'a Path),
}

/// Load `path`, normalize every link to `target`, and write the result back.
pub fn update_links_file(path: &Path, target: &str) -> Result<NormalizeReport> {
    update_links_file_with(path, target, |_| {})
}

/// Like [`update_links_file`], calling `on_step` as each stage begins.
pub fn update_links_file_with(
    path: &Path,
    target: &str,
    mut on_step: impl FnMut(NormalizeStep<'_>),
) -> Result<NormalizeReport> {
    on_step(NormalizeStep::Reading(path));
    let mut data = store::read_value(path)?;

    if let Some(items) = data.as_array() {
        on_step(NormalizeStep::Processing(items.len()));
    }
    let report = normalize_links(&mut data, target)?;

    on_step(NormalizeStep::Saving(path));
    store::write_json(path, &data)?;
    info!(
        path = %path.display(),
        total = report.total,
        updated = report.updated,
        "links normalized"
    );
    Ok(report)
}
