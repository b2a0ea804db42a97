//! Typed errors for the snow depth pipeline.

use thiserror::Error;

/// Upstream feed failures.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upstream returned HTTP {0}")]
    Status(u16),
    #[error("no <pre> data block in upstream response")]
    MissingPreBlock,
    #[error("unreadable row in upstream data: {0}")]
    Row(#[from] csv::Error),
}

/// Historical table could not be read.
#[derive(Debug, Error)]
pub enum StoreReadError {
    #[error("failed to read historical table: {0}")]
    Io(#[from] std::io::Error),
    #[error("historical table is not valid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("historical table has no header row")]
    MissingHeader,
}

/// The historical table has no rows to reconcile against.
#[derive(Debug, Error)]
#[error("historical table is empty")]
pub struct MissingHistoryError;

/// Historical table could not be written.
#[derive(Debug, Error)]
pub enum StoreWriteError {
    #[error("failed to write historical table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialise historical table: {0}")]
    Csv(#[from] csv::Error),
    #[error("refusing to serialise an empty table")]
    EmptyTable,
}
