//! Ingestion error types.
//!
//! Row-level problems are deliberately NOT here: a bad row is logged and
//! skipped, not an error. These variants mean the file itself is unusable.

use thiserror::Error;

/// Inventory file failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The file could not be opened or read.
    #[error("failed to read inventory file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not parseable CSV, or the header row is missing a
    /// required column.
    #[error("inventory sheet is malformed: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results with CatalogError.
pub type CatalogResult<T> = Result<T, CatalogError>;
