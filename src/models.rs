//! Data models for Google Sheets and Drive API responses.

use serde::Deserialize;
use serde_json::Value;

/// Properties of a single sheet (tab) inside a spreadsheet.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SheetProperties {
    pub sheet_id: i64,
    pub title: String,
    pub index: usize,
}

/// One entry of the spreadsheet metadata `sheets` list.
#[derive(Debug, Clone, Deserialize)]
pub struct Sheet {
    pub properties: SheetProperties,
}

/// Spreadsheet metadata restricted to `fields=sheets.properties`.
///
/// A spreadsheet with no sheets deserializes to an empty list (the API omits
/// the `sheets` key entirely in that case).
#[derive(Debug, Clone, Deserialize)]
pub struct SpreadsheetMetadata {
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl SpreadsheetMetadata {
    /// Build metadata directly from sheet properties, mainly for test doubles.
    pub fn from_properties(properties: Vec<SheetProperties>) -> Self {
        Self {
            sheets: properties.into_iter().map(|p| Sheet { properties: p }).collect(),
        }
    }
}

/// Response from the values.get API endpoint.
///
/// The `values` key is omitted for an empty range; it deserializes to an
/// empty row sequence.
#[derive(Debug, Clone, Deserialize)]
pub struct ValueRange {
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

/// File metadata from the Drive API, restricted to
/// `fields=mimeType,originalFilename`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    pub mime_type: String,
    #[serde(default)]
    pub original_filename: Option<String>,
}

/// Google API error response.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub code: u16,
    pub message: String,
}

/// Service account credentials from JSON file.
#[derive(Debug, Deserialize)]
pub struct ServiceAccountCredentials {
    pub client_email: String,
    pub private_key: String,
    pub token_uri: Option<String>,
}

/// OAuth2 token response.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}
