//! Name formatting for sheet titles.

use regex::Regex;
use std::sync::LazyLock;

/// camelCase boundary: a lowercase letter or digit followed by an uppercase letter.
static CAMEL_BOUNDARY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("Invalid camel boundary regex"));

/// Runs of whitespace and hyphens.
static SEPARATOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s-]+").expect("Invalid separator regex"));

/// Convert a display name to snake_case.
///
/// # Examples
///
/// ```
/// use gsheet_tools::naming::to_snake_case;
///
/// assert_eq!(to_snake_case("SheetName"), "sheet_name");
/// assert_eq!(to_snake_case("Sheet Name"), "sheet_name");
/// ```
pub fn to_snake_case(text: &str) -> String {
    let text = CAMEL_BOUNDARY_REGEX.replace_all(text, "${1}_${2}");
    let text = SEPARATOR_REGEX.replace_all(&text, "_");
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_snake_case("SheetName"), "sheet_name");
    }

    #[test]
    fn test_spaces() {
        assert_eq!(to_snake_case("Sheet Name"), "sheet_name");
    }

    #[test]
    fn test_hyphens() {
        assert_eq!(to_snake_case("Sheet-Name"), "sheet_name");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(to_snake_case("My Sheet - 2024"), "my_sheet_2024");
    }

    #[test]
    fn test_digit_boundary() {
        assert_eq!(to_snake_case("sheet2Name"), "sheet2_name");
    }

    #[test]
    fn test_already_snake_case() {
        assert_eq!(to_snake_case("sheet_name"), "sheet_name");
    }
}
