//! Sheet selection inside a spreadsheet, with an ordered fallback chain.

use serde_json::Value;

use crate::client::SheetsApi;
use crate::error::{Result, SheetError};
use crate::models::SheetProperties;
use crate::table::Table;

/// Range appended to the sheet title when the header row is skipped.
const HEADERLESS_RANGE: &str = "A2:Z999999";

/// How to locate a sheet inside a spreadsheet.
///
/// Each variant carries its value as an `Option` so a missing required value
/// is reported as [`SheetError::Argument`] before any API call is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match on the sheet's gid (`sheetId` in metadata).
    ByGid(Option<String>),
    /// Match on the sheet's title.
    ByName(Option<String>),
    /// Match on the sheet's zero-based position.
    ByPosition(Option<usize>),
}

/// Metadata field a selector matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookupField {
    SheetId,
    Title,
    Index,
}

impl Selector {
    /// Resolve the metadata field and the stringified value to match on.
    fn lookup(&self) -> Result<(LookupField, String)> {
        match self {
            Selector::ByGid(Some(gid)) => Ok((LookupField::SheetId, gid.clone())),
            Selector::ByName(Some(name)) => Ok((LookupField::Title, name.clone())),
            Selector::ByPosition(Some(index)) => Ok((LookupField::Index, index.to_string())),
            Selector::ByGid(None) => Err(SheetError::Argument(
                "selecting by gid requires a gid value".to_string(),
            )),
            Selector::ByName(None) => Err(SheetError::Argument(
                "selecting by name requires a sheet name".to_string(),
            )),
            Selector::ByPosition(None) => Err(SheetError::Argument(
                "selecting by position requires a sheet position".to_string(),
            )),
        }
    }
}

/// Matching is string equality on the stringified metadata field, so callers
/// must pass values that stringify identically to stored metadata (numeric
/// gids in decimal form).
fn matches(properties: &SheetProperties, field: LookupField, value: &str) -> bool {
    match field {
        LookupField::SheetId => properties.sheet_id.to_string() == value,
        LookupField::Title => properties.title == value,
        LookupField::Index => properties.index.to_string() == value,
    }
}

/// Options applied to the values fetch once a sheet is located.
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Skip the header row and fetch data rows only.
    pub without_headers: bool,
    /// Custom cell range (e.g. `A1:C10`), appended as `{title}!{range}`.
    /// Takes precedence over `without_headers`.
    pub range: Option<String>,
}

/// Title and raw rows of a fetched sheet. Rows may be ragged.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedSheet {
    pub title: String,
    pub rows: Vec<Vec<Value>>,
}

impl FetchedSheet {
    /// The empty result returned when no sheet could be located.
    pub fn empty() -> Self {
        Self {
            title: String::new(),
            rows: Vec::new(),
        }
    }

    /// Normalize the raw rows into a rectangular [`Table`].
    pub fn into_table(self) -> Result<Table> {
        Table::from_rows(self.rows)
    }
}

/// Locate a sheet and fetch its values.
///
/// The spreadsheet metadata is fetched once; the active selector and then
/// each fallback (in order, each at most once) are matched against it by
/// linear search. A fallback missing its value is skipped. On a match, one
/// values fetch is issued for the range derived from `options`.
///
/// Returns an empty [`FetchedSheet`] when the spreadsheet has no sheets, or
/// when a fallback chain was supplied and exhausted. Fails with
/// [`SheetError::SheetNotFound`] when nothing matched and no fallback chain
/// was defined.
pub async fn select_and_fetch<A: SheetsApi>(
    api: &A,
    file_id: &str,
    selector: &Selector,
    fallbacks: &[Selector],
    options: &FetchOptions,
) -> Result<FetchedSheet> {
    // Argument validation happens before any API access.
    let primary = selector.lookup()?;

    let metadata = api.spreadsheet_metadata(file_id).await?;
    if metadata.sheets.is_empty() {
        return Ok(FetchedSheet::empty());
    }

    let mut lookups = vec![primary];
    lookups.extend(fallbacks.iter().filter_map(|fallback| fallback.lookup().ok()));

    for (field, value) in lookups {
        let found = metadata
            .sheets
            .iter()
            .map(|sheet| &sheet.properties)
            .find(|properties| matches(properties, field, &value));

        if let Some(properties) = found {
            let range = match (&options.range, options.without_headers) {
                (Some(custom), _) => format!("{}!{}", properties.title, custom),
                (None, true) => format!("{}!{}", properties.title, HEADERLESS_RANGE),
                (None, false) => properties.title.clone(),
            };
            let rows = api.values(file_id, &range).await?;
            return Ok(FetchedSheet {
                title: properties.title.clone(),
                rows,
            });
        }
    }

    if fallbacks.is_empty() {
        return Err(SheetError::SheetNotFound(file_id.to_string()));
    }
    Ok(FetchedSheet::empty())
}

/// Fetch the sheet identified by `gid`, or the first sheet when no gid is
/// given. No fallback chain; a gid that matches nothing is an error.
pub async fn fetch_by_gid<A: SheetsApi>(
    api: &A,
    file_id: &str,
    gid: Option<&str>,
    without_headers: bool,
) -> Result<FetchedSheet> {
    let selector = match gid {
        Some(gid) => Selector::ByGid(Some(gid.to_string())),
        None => Selector::ByPosition(Some(0)),
    };
    let options = FetchOptions {
        without_headers,
        range: None,
    };
    select_and_fetch(api, file_id, &selector, &[], &options).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_missing_values() {
        assert!(matches!(
            Selector::ByGid(None).lookup(),
            Err(SheetError::Argument(_))
        ));
        assert!(matches!(
            Selector::ByName(None).lookup(),
            Err(SheetError::Argument(_))
        ));
        assert!(matches!(
            Selector::ByPosition(None).lookup(),
            Err(SheetError::Argument(_))
        ));
    }

    #[test]
    fn test_lookup_stringifies_position() {
        let (field, value) = Selector::ByPosition(Some(3)).lookup().unwrap();
        assert_eq!(field, LookupField::Index);
        assert_eq!(value, "3");
    }

    #[test]
    fn test_matches_on_stringified_gid() {
        let properties = SheetProperties {
            sheet_id: 546508778,
            title: "Scores".to_string(),
            index: 0,
        };
        assert!(matches(&properties, LookupField::SheetId, "546508778"));
        assert!(!matches(&properties, LookupField::SheetId, "0"));
        assert!(matches(&properties, LookupField::Title, "Scores"));
        assert!(matches(&properties, LookupField::Index, "0"));
    }
}
