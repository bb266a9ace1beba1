//! gsheet_tools - Helpers around the Google Sheets and Drive APIs.
//!
//! This library provides functionality to:
//! - Resolve spreadsheet URLs into file and sheet identifiers
//! - Select a sheet by gid, name, or position (with a fallback chain) and fetch its values
//! - Classify how a sheet file originated
//! - Normalize ragged row data into a rectangular table
//!
//! # Example
//!
//! ```no_run
//! use gsheet_tools::{
//!     resolve, select_and_fetch, Authenticator, FetchOptions, Selector, SheetsClient,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let auth = Authenticator::from_file("service-account.json")?;
//!     let client = SheetsClient::new(auth);
//!
//!     let url = resolve("https://docs.google.com/spreadsheets/d/abc123/edit?gid=67890")
//!         .expect("not a spreadsheet URL");
//!
//!     let sheet = select_and_fetch(
//!         &client,
//!         &url.file_id,
//!         &Selector::ByGid(url.gid),
//!         &[Selector::ByPosition(Some(0))],
//!         &FetchOptions::default(),
//!     )
//!     .await?;
//!
//!     let table = sheet.into_table()?;
//!     println!("fetched {} rows", table.len());
//!
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod naming;
pub mod origin;
pub mod selector;
pub mod table;
pub mod url_parser;

// Re-exports for convenience
pub use auth::Authenticator;
pub use client::{SheetsApi, SheetsClient};
pub use error::{Result, SheetError};
pub use naming::to_snake_case;
pub use origin::{check_origin, classify, OriginRecord, SheetMimeType, SheetOrigin};
pub use selector::{fetch_by_gid, select_and_fetch, FetchOptions, FetchedSheet, Selector};
pub use table::Table;
pub use url_parser::{is_valid_url, resolve, ResolvedUrl};
