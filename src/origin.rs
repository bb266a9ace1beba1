//! Classification of how a sheet file came to exist.

use crate::client::SheetsApi;
use crate::error::Result;
use crate::models::FileInfo;

/// Official sheet mime types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetMimeType {
    /// A native Google spreadsheet.
    GoogleSpreadsheet,
    MicrosoftExcelXlsx,
    MicrosoftExcelXls,
    StandardCsv,
}

impl SheetMimeType {
    pub const fn as_str(self) -> &'static str {
        match self {
            SheetMimeType::GoogleSpreadsheet => "application/vnd.google-apps.spreadsheet",
            SheetMimeType::MicrosoftExcelXlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            SheetMimeType::MicrosoftExcelXls => "application/vnd.ms-excel",
            SheetMimeType::StandardCsv => "text/csv",
        }
    }

    pub fn from_mime_type(value: &str) -> Option<Self> {
        match value {
            "application/vnd.google-apps.spreadsheet" => Some(SheetMimeType::GoogleSpreadsheet),
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet" => {
                Some(SheetMimeType::MicrosoftExcelXlsx)
            }
            "application/vnd.ms-excel" => Some(SheetMimeType::MicrosoftExcelXls),
            "text/csv" => Some(SheetMimeType::StandardCsv),
            _ => None,
        }
    }
}

/// How a sheet file was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetOrigin {
    /// Created natively in Google Sheets.
    GoogleNative,
    /// Uploaded in another format and converted to a native spreadsheet.
    UploadedConverted,
    /// Uploaded and left in its original format.
    UploadedNotConverted,
    Undefined,
}

/// Classification derived from file metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginRecord {
    pub origin: SheetOrigin,
    /// Whether the file can be fetched through the values API.
    pub is_parsable: bool,
    pub original_extension: Option<String>,
    pub original_filename: Option<String>,
    pub mime_type: String,
}

/// Derive the original extension from an uploaded filename.
fn original_extension(filename: &str) -> &'static str {
    let lower = filename.to_lowercase();
    if lower.ends_with(".xlsx") {
        "xlsx"
    } else if lower.ends_with(".xls") {
        "xls"
    } else if lower.ends_with(".csv") {
        "csv"
    } else {
        "unidentified"
    }
}

/// Classify how a sheet file originated and whether it is parsable.
///
/// A native-spreadsheet mime type with an original filename means the file
/// was uploaded and converted; without one it is treated as created
/// natively. Any other mime type is an unconverted upload, not parsable
/// through the values API. The filename may not always be present or
/// reliable for conversion history; an empty filename counts as absent.
pub fn classify(info: &FileInfo) -> OriginRecord {
    let filename = info
        .original_filename
        .as_deref()
        .filter(|name| !name.is_empty());

    let (origin, is_parsable, extension) = match SheetMimeType::from_mime_type(&info.mime_type) {
        Some(SheetMimeType::GoogleSpreadsheet) => match filename {
            Some(name) => (
                SheetOrigin::UploadedConverted,
                true,
                Some(original_extension(name)),
            ),
            None => (SheetOrigin::GoogleNative, true, None),
        },
        Some(SheetMimeType::MicrosoftExcelXlsx) => {
            (SheetOrigin::UploadedNotConverted, false, Some("xlsx"))
        }
        Some(SheetMimeType::MicrosoftExcelXls) => {
            (SheetOrigin::UploadedNotConverted, false, Some("xls"))
        }
        Some(SheetMimeType::StandardCsv) => {
            (SheetOrigin::UploadedNotConverted, false, Some("csv"))
        }
        None => (SheetOrigin::UploadedNotConverted, false, Some("unidentified")),
    };

    OriginRecord {
        origin,
        is_parsable,
        original_extension: extension.map(str::to_string),
        original_filename: filename.map(str::to_string),
        mime_type: info.mime_type.clone(),
    }
}

/// Fetch file metadata and classify it. Exactly one metadata fetch.
pub async fn check_origin<A: SheetsApi>(api: &A, file_id: &str) -> Result<OriginRecord> {
    let info = api.file_info(file_id).await?;
    Ok(classify(&info))
}
