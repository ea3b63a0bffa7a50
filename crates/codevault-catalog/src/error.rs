use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("expected a JSON array of records, found {found}")]
    NotAnArray { found: &'static str },
    #[error("invalid catalog config: {0}")]
    InvalidConfig(String),
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CatalogError {
    /// Map an I/O failure on `path`, splitting out the missing-file case.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound { path }
        } else {
            CatalogError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
