//! Consistency checks over a catalog file.

use std::collections::BTreeMap;
use std::fmt;

use crate::config::CatalogConfig;
use crate::model::ProjectRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `id` did not increase relative to the previous record.
    IdOrder { position: usize, id: u64, previous: u64 },
    UnknownCategory { id: u64, short_category: String },
    TagMismatch {
        id: u64,
        expected: Vec<String>,
        found: Vec<String>,
    },
    LinkMismatch { id: u64, found: String },
    CountMismatch {
        short_category: String,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::IdOrder {
                position,
                id,
                previous,
            } => write!(
                f,
                "record #{position}: id {id} does not follow previous id {previous}"
            ),
            Violation::UnknownCategory { id, short_category } => {
                write!(f, "id {id}: unknown category `{short_category}`")
            }
            Violation::TagMismatch {
                id,
                expected,
                found,
            } => write!(f, "id {id}: tags {found:?}, expected {expected:?}"),
            Violation::LinkMismatch { id, found } => write!(f, "id {id}: link `{found}`"),
            Violation::CountMismatch {
                short_category,
                expected,
                found,
            } => write!(
                f,
                "category `{short_category}`: {found} record(s), expected {expected}"
            ),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    pub total: usize,
    pub counts: BTreeMap<String, usize>,
    pub violations: Vec<Violation>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check id ordering, per-category tags and counts, and link uniformity
/// against `config` and the expected `link`.
pub fn audit(records: &[ProjectRecord], config: &CatalogConfig, link: &str) -> AuditReport {
    let mut report = AuditReport {
        total: records.len(),
        ..AuditReport::default()
    };

    let mut previous: Option<u64> = None;
    for (position, record) in records.iter().enumerate() {
        if let Some(prev) = previous {
            if record.id <= prev {
                report.violations.push(Violation::IdOrder {
                    position,
                    id: record.id,
                    previous: prev,
                });
            }
        }
        previous = Some(record.id);

        *report
            .counts
            .entry(record.short_category.clone())
            .or_default() += 1;

        match config.category(&record.short_category) {
            Some(spec) if spec.tags != record.tags => {
                report.violations.push(Violation::TagMismatch {
                    id: record.id,
                    expected: spec.tags.clone(),
                    found: record.tags.clone(),
                });
            }
            Some(_) => {}
            None => report.violations.push(Violation::UnknownCategory {
                id: record.id,
                short_category: record.short_category.clone(),
            }),
        }

        if record.link != link {
            report.violations.push(Violation::LinkMismatch {
                id: record.id,
                found: record.link.clone(),
            });
        }
    }

    for spec in &config.categories {
        let found = report.counts.get(&spec.key).copied().unwrap_or(0);
        if found != spec.count {
            report.violations.push(Violation::CountMismatch {
                short_category: spec.key.clone(),
                expected: spec.count,
                found,
            });
        }
    }

    report
}
