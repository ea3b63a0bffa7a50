//! Codevault catalog library
//!
//! Two batch jobs share one JSON file (`data.json`):
//!
//! - the **generator** builds a synthetic project catalog from a category
//!   table, name templates and name prefixes;
//! - the **normalizer** rewrites every record's `link` to one canonical value.
//!
//! On top of that the crate offers read-only [`browse`] queries and an
//! [`audit`] of a catalog file against its configuration.

pub mod audit;
pub mod browse;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod normalizer;
pub mod rng;
pub mod store;
pub mod table;

pub use audit::{audit, AuditReport, Violation};
pub use browse::{CategoryFilter, ITEMS_PER_PAGE};
pub use config::{CatalogConfig, DEFAULT_DATA_PATH};
pub use error::{CatalogError, Result};
pub use generator::{assemble_name, CatalogGenerator, GenerationSummary};
pub use model::{CategorySpec, ProjectRecord};
pub use normalizer::{
    normalize_links, update_links_file, update_links_file_with, NormalizeReport, NormalizeStep,
};
pub use rng::XorShift64;
