//! Error types for the endereco-core library.

use std::time::Duration;

use thiserror::Error;

/// Main error type for the endereco library.
#[derive(Error, Debug)]
pub enum EnderecoError {
    /// Reading the address source failed.
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    /// CSV output error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to reading address rows from a workbook or CSV file.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Failed to open or parse the workbook.
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),

    /// The workbook has no worksheet at the requested index.
    #[error("worksheet {0} not found")]
    MissingSheet(usize),

    /// Failed to read a CSV file.
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The file extension is not a supported input format.
    #[error("unsupported input format: {0}")]
    UnsupportedFormat(String),
}

/// Errors raised by a postal-code lookup.
///
/// None of these abort a batch: the pipeline records them as
/// `EnrichmentStatus::Failed` and keeps the record's placeholders.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The HTTP request failed (connection, TLS, body decoding).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("service returned HTTP {0}")]
    Status(u16),

    /// The service has no address for this postal code.
    #[error("postal code {0} not found")]
    NotFound(String),

    /// The postal code does not have 8 digits.
    #[error("invalid postal code: {0}")]
    InvalidPostalCode(String),

    /// The lookup did not finish in time.
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Result type for the endereco library.
pub type Result<T> = std::result::Result<T, EnderecoError>;
