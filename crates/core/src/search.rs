//! Listing helpers: filter sentinels, sort keys and pagination parsing.
//!
//! Query-string values arrive as raw strings. Everything here is lenient:
//! unparseable input falls back to the default rather than failing the
//! request.

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default page size for project listings.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// Default page offset for project listings.
pub const DEFAULT_LIST_OFFSET: usize = 0;

/// Filter value meaning "do not filter on this field".
pub const FILTER_ALL: &str = "all";

// ---------------------------------------------------------------------------
// Sort keys
// ---------------------------------------------------------------------------

/// Ordering applied to a project listing. All orders are descending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Newest first by creation time.
    #[default]
    Recent,
    /// Most viewed first.
    Popular,
    /// Highest average rating first.
    Rating,
    /// Academic year, compared as a string.
    Year,
}

impl SortBy {
    /// Map a `sortBy` query value to a sort key. Unknown or missing values
    /// fall back to [`SortBy::Recent`].
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("popular") => SortBy::Popular,
            Some("rating") => SortBy::Rating,
            Some("year") => SortBy::Year,
            _ => SortBy::Recent,
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing helpers
// ---------------------------------------------------------------------------

/// Parse a `limit` query value, falling back to [`DEFAULT_LIST_LIMIT`].
pub fn parse_limit(value: Option<&str>) -> usize {
    parse_or(value, DEFAULT_LIST_LIMIT)
}

/// Parse an `offset` query value, falling back to [`DEFAULT_LIST_OFFSET`].
pub fn parse_offset(value: Option<&str>) -> usize {
    parse_or(value, DEFAULT_LIST_OFFSET)
}

/// Read the leading run of digits, ignoring anything after it, so `"10abc"`
/// is 10 and `"2.5"` is 2. A leading `-` or no digits at all yields `default`.
fn parse_or(value: Option<&str>, default: usize) -> usize {
    value
        .and_then(leading_digits)
        .and_then(|digits| digits.parse::<usize>().ok())
        .unwrap_or(default)
}

fn leading_digits(value: &str) -> Option<&str> {
    let trimmed = value.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    (end > 0).then(|| &unsigned[..end])
}

/// Return the filter value if it should narrow the listing.
///
/// Absent, blank, and `"all"` values are no-ops.
pub fn active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty() && *v != FILTER_ALL)
}

/// Case-insensitive substring test. `needle_lower` must already be lowercase.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- SortBy ------------------------------------------------------------

    #[test]
    fn sort_by_known_keys() {
        assert_eq!(SortBy::from_param(Some("popular")), SortBy::Popular);
        assert_eq!(SortBy::from_param(Some("rating")), SortBy::Rating);
        assert_eq!(SortBy::from_param(Some("year")), SortBy::Year);
        assert_eq!(SortBy::from_param(Some("recent")), SortBy::Recent);
    }

    #[test]
    fn sort_by_unknown_falls_back_to_recent() {
        assert_eq!(SortBy::from_param(Some("downloads")), SortBy::Recent);
        assert_eq!(SortBy::from_param(None), SortBy::Recent);
    }

    // -- limit / offset ----------------------------------------------------

    #[test]
    fn limit_defaults_when_missing_or_malformed() {
        assert_eq!(parse_limit(None), 20);
        assert_eq!(parse_limit(Some("abc")), 20);
        assert_eq!(parse_limit(Some("-5")), 20);
        assert_eq!(parse_limit(Some("")), 20);
    }

    #[test]
    fn limit_passes_through_valid_value() {
        assert_eq!(parse_limit(Some("5")), 5);
        assert_eq!(parse_limit(Some("0")), 0);
    }

    #[test]
    fn offset_defaults_when_missing_or_malformed() {
        assert_eq!(parse_offset(None), 0);
        assert_eq!(parse_offset(Some("x2")), 0);
        assert_eq!(parse_offset(Some("-1")), 0);
    }

    #[test]
    fn numeric_prefix_is_used_when_trailing_garbage() {
        assert_eq!(parse_limit(Some("10abc")), 10);
        assert_eq!(parse_limit(Some("2.5")), 2);
        assert_eq!(parse_limit(Some(" 7")), 7);
        assert_eq!(parse_limit(Some("+3")), 3);
        assert_eq!(parse_offset(Some("4 ")), 4);
    }

    #[test]
    fn overflowing_value_falls_back() {
        assert_eq!(parse_limit(Some("99999999999999999999999999")), 20);
    }

    #[test]
    fn offset_passes_through_valid_value() {
        assert_eq!(parse_offset(Some("40")), 40);
    }

    // -- filters -----------------------------------------------------------

    #[test]
    fn all_and_blank_filters_are_inactive() {
        assert_eq!(active_filter(None), None);
        assert_eq!(active_filter(Some("")), None);
        assert_eq!(active_filter(Some("all")), None);
        assert_eq!(active_filter(Some("2024")), Some("2024"));
    }

    #[test]
    fn substring_match_ignores_case() {
        assert!(contains_ignore_case(
            "Computer Science Engineering",
            "computer science"
        ));
        assert!(!contains_ignore_case("Civil Engineering", "computer"));
    }
}
