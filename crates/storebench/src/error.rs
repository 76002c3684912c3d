//! Benchmark error types.

use thiserror::Error;

/// Errors surfaced by the benchmark harness.
///
/// Driver failures are wrapped, never retried: a connection refusal, a
/// malformed query, or a missing table aborts the run with the underlying
/// error intact.
#[derive(Debug, Error)]
pub enum Error {
    /// Document store driver error.
    #[error("document store error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// Relational store driver error.
    #[error("relational store error: {0}")]
    Sql(#[from] sqlx::Error),

    /// Chart rendering error.
    #[error("chart rendering error: {0}")]
    Chart(String),

    /// Chart output directory could not be created.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The two duration sequences cannot be paired into a report.
    #[error("mismatched report: {0}")]
    MismatchedReport(String),
}

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
