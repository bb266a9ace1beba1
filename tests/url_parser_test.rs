//! Tests for URL validation and resolution.

use gsheet_tools::url_parser::{is_valid_url, resolve};

mod url_validation {
    use super::*;

    #[test]
    fn https_docs_host_is_valid() {
        assert!(is_valid_url(
            "https://docs.google.com/spreadsheets/d/12345/edit?usp=sharing"
        ));
    }

    #[test]
    fn wrong_host_is_invalid() {
        assert!(!is_valid_url("https://example.com/sheets/d/12345/edit"));
        assert!(!is_valid_url("https://sheets.google.com/spreadsheets/d/12345"));
    }

    #[test]
    fn host_prefix_attack_is_invalid() {
        assert!(!is_valid_url(
            "https://docs.google.com.evil.com/spreadsheets/d/12345"
        ));
    }

    #[test]
    fn wrong_scheme_is_invalid() {
        assert!(!is_valid_url("http://docs.google.com/spreadsheets/d/12345"));
    }

    #[test]
    fn host_with_port_is_invalid() {
        assert!(!is_valid_url("https://docs.google.com:8080/spreadsheets/d/12345"));
    }
}

mod resolution {
    use super::*;

    #[test]
    fn edit_url_with_gid() {
        let resolved =
            resolve("https://docs.google.com/spreadsheets/d/12345/edit?gid=67890").unwrap();
        assert_eq!(resolved.file_id, "12345");
        assert_eq!(resolved.gid.as_deref(), Some("67890"));
    }

    #[test]
    fn edit_url_with_gid_fragment() {
        let resolved = resolve(
            "https://docs.google.com/spreadsheets/d/1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms/edit?gid=546508778#gid=546508778",
        )
        .unwrap();
        assert_eq!(
            resolved.file_id,
            "1BxiMVs0XRA5nFMdKvBdBZjgmUUqptlbs74OgvE2upms"
        );
        assert_eq!(resolved.gid.as_deref(), Some("546508778"));
    }

    #[test]
    fn sharing_url_without_gid() {
        let resolved =
            resolve("https://docs.google.com/spreadsheets/d/12345/edit?usp=sharing").unwrap();
        assert_eq!(resolved.file_id, "12345");
        assert_eq!(resolved.gid, None);
    }

    #[test]
    fn file_id_with_hyphen_and_underscore() {
        let resolved =
            resolve("https://docs.google.com/spreadsheets/d/abc-123_XYZ/edit").unwrap();
        assert_eq!(resolved.file_id, "abc-123_XYZ");
    }

    #[test]
    fn invalid_host_yields_none() {
        assert_eq!(resolve("https://example.com/sheets/d/12345/edit"), None);
    }

    #[test]
    fn non_spreadsheet_path_yields_none() {
        assert_eq!(
            resolve("https://docs.google.com/document/d/12345/edit"),
            None
        );
    }

    #[test]
    fn missing_file_id_yields_none() {
        assert_eq!(resolve("https://docs.google.com/spreadsheets/"), None);
    }
}
