//! Error types for the gsheet_tools crate.

use thiserror::Error;

/// Errors that can occur when resolving, fetching, or tabulating sheet data.
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("no data rows remain after discarding empty rows")]
    BlankTable,

    #[error("header row contains an empty column name")]
    MissingColumnName,

    #[error("data row {row} has {width} cells but the header defines {columns} columns")]
    RowWiderThanHeader {
        row: usize,
        width: usize,
        columns: usize,
    },

    #[error("sheet not found in spreadsheet: {0}")]
    SheetNotFound(String),

    #[error("Failed to read credentials file: {0}")]
    CredentialsFileError(#[from] std::io::Error),

    #[error("Failed to parse credentials JSON: {0}")]
    CredentialsParseError(#[from] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("JWT encoding error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),

    #[error("Token refresh failed: {0}")]
    TokenRefreshError(String),
}

/// Result type alias for SheetError.
pub type Result<T> = std::result::Result<T, SheetError>;
