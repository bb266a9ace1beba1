//! Google Sheets API client and the capability trait it implements.

use reqwest::{Client, Response};
use serde_json::Value;

use crate::auth::Authenticator;
use crate::error::{Result, SheetError};
use crate::models::{ApiErrorResponse, FileInfo, SpreadsheetMetadata, ValueRange};

/// Base URL for the Google Sheets API v4.
const SHEETS_API_BASE: &str = "https://sheets.googleapis.com/v4";

/// Base URL for the Google Drive API v3 (file metadata lookups).
const DRIVE_API_BASE: &str = "https://www.googleapis.com/drive/v3";

/// Capability interface over the remote spreadsheet API.
///
/// Selection and classification are written against this trait, so callers
/// can substitute an in-memory double for tests or wrap the production
/// client with their own retry or timeout policy.
#[allow(async_fn_in_trait)]
pub trait SheetsApi {
    /// Fetch spreadsheet metadata, restricted to sheet properties.
    async fn spreadsheet_metadata(&self, spreadsheet_id: &str) -> Result<SpreadsheetMetadata>;

    /// Fetch cell values for a range. A range with no data yields an empty
    /// row sequence.
    async fn values(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<Value>>>;

    /// Fetch file metadata (mime type and original filename) for a file id.
    async fn file_info(&self, file_id: &str) -> Result<FileInfo>;
}

/// Client for the Google Sheets and Drive APIs.
pub struct SheetsClient {
    auth: Authenticator,
    http: Client,
    sheets_base: String,
    drive_base: String,
}

impl SheetsClient {
    /// Create a new SheetsClient against the production endpoints.
    pub fn new(auth: Authenticator) -> Self {
        Self::with_base_urls(auth, SHEETS_API_BASE, DRIVE_API_BASE)
    }

    /// Create a client against custom endpoints. Used by HTTP-level tests.
    pub fn with_base_urls(
        auth: Authenticator,
        sheets_base: impl Into<String>,
        drive_base: impl Into<String>,
    ) -> Self {
        Self {
            auth,
            http: Client::new(),
            sheets_base: sheets_base.into(),
            drive_base: drive_base.into(),
        }
    }

    /// Map a non-success response through the Google error envelope.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        if let Ok(api_error) = serde_json::from_str::<ApiErrorResponse>(&error_body) {
            return Err(SheetError::ApiError {
                status: api_error.error.code,
                message: api_error.error.message,
            });
        }
        Err(SheetError::ApiError {
            status: status.as_u16(),
            message: error_body,
        })
    }
}

impl SheetsApi for SheetsClient {
    async fn spreadsheet_metadata(&self, spreadsheet_id: &str) -> Result<SpreadsheetMetadata> {
        let token = self.auth.get_access_token().await?;

        let response = self
            .http
            .get(format!(
                "{}/spreadsheets/{}",
                self.sheets_base, spreadsheet_id
            ))
            .bearer_auth(&token)
            // Request only the properties of each sheet
            .query(&[("fields", "sheets.properties")])
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let metadata: SpreadsheetMetadata = response.json().await?;
        Ok(metadata)
    }

    async fn values(&self, spreadsheet_id: &str, range: &str) -> Result<Vec<Vec<Value>>> {
        let token = self.auth.get_access_token().await?;

        let response = self
            .http
            .get(format!(
                "{}/spreadsheets/{}/values/{}",
                self.sheets_base, spreadsheet_id, range
            ))
            .bearer_auth(&token)
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let value_range: ValueRange = response.json().await?;
        Ok(value_range.values)
    }

    async fn file_info(&self, file_id: &str) -> Result<FileInfo> {
        let token = self.auth.get_access_token().await?;

        let response = self
            .http
            .get(format!("{}/files/{}", self.drive_base, file_id))
            .bearer_auth(&token)
            .query(&[("fields", "mimeType,originalFilename")])
            .send()
            .await?;

        let response = Self::check_response(response).await?;
        let info: FileInfo = response.json().await?;
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    // Tests are in tests/client_test.rs
}
