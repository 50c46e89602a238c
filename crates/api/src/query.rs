//! Query parameter types for API handlers.

use projectbank_core::search::{parse_limit, parse_offset, SortBy};
use projectbank_db::models::project::ProjectFilter;

/// Query parameters for `GET /api/projects`.
///
/// Everything is taken as a raw string so malformed numbers fall back to
/// defaults instead of rejecting the request. Keys are camelCase on the wire.
#[derive(Debug, Default)]
pub struct ListProjectsParams {
    pub year: Option<String>,
    pub department: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub limit: Option<String>,
    pub offset: Option<String>,
}

impl ListProjectsParams {
    /// Build from raw query pairs. A repeated key keeps its first value;
    /// unknown keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "year" => &mut params.year,
                "department" => &mut params.department,
                "category" => &mut params.category,
                "search" => &mut params.search,
                "sortBy" => &mut params.sort_by,
                "limit" => &mut params.limit,
                "offset" => &mut params.offset,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        params
    }
}

impl From<ListProjectsParams> for ProjectFilter {
    fn from(params: ListProjectsParams) -> Self {
        ProjectFilter {
            sort_by: SortBy::from_param(params.sort_by.as_deref()),
            limit: parse_limit(params.limit.as_deref()),
            offset: parse_offset(params.offset.as_deref()),
            year: params.year,
            department: params.department,
            category: params.category,
            search: params.search,
        }
    }
}
