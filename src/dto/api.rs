//! DTOs exposed by the sales data API endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::filtering::FilterCriteria;

/// Raw query string of `GET /api/data`.
///
/// Paging values are kept as text so that malformed numbers can be
/// normalized instead of rejected.
#[derive(Debug, Default, Deserialize)]
pub struct SalesRepsQueryParams {
    pub search: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub region: Option<String>,
    pub skills: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

/// Normalized query accepted by [`crate::services::sales_reps::list_sales_reps`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesRepsQuery {
    /// Optional free-form search string applied before the field filters.
    pub search: Option<String>,
    pub criteria: FilterCriteria,
    /// One-based page number, at least 1.
    pub page: usize,
    /// Page size between 1 and the configured maximum.
    pub page_size: usize,
}

impl SalesRepsQueryParams {
    /// Applies paging defaults and bounds.
    ///
    /// `page` falls back to 1 and `page_size` to `default_page_size` when
    /// missing or not an integer. Integers are raised to at least 1 and
    /// `page_size` is capped at `max_page_size`.
    pub fn into_query(self, default_page_size: usize, max_page_size: usize) -> SalesRepsQuery {
        let max_page_size = max_page_size.max(1);

        let page = parse_int(self.page.as_deref()).map_or(1, clamp_positive);
        let page_size = parse_int(self.page_size.as_deref())
            .map_or(default_page_size, clamp_positive)
            .clamp(1, max_page_size);

        SalesRepsQuery {
            search: self.search,
            criteria: FilterCriteria {
                name: self.name,
                role: self.role,
                region: self.region,
                skills: self.skills,
            },
            page,
            page_size,
        }
    }
}

fn parse_int(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse::<i64>().ok())
}

fn clamp_positive(value: i64) -> usize {
    usize::try_from(value.max(1)).unwrap_or(usize::MAX)
}

/// Body of `POST /api/ai`.
#[derive(Debug, Clone, Deserialize)]
pub struct AiQuestion {
    pub question: String,
    /// Optional payload used as context instead of the stored records.
    #[serde(default)]
    pub data: Option<Value>,
}

/// Response of `POST /api/ai`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AiAnswer {
    pub answer: String,
}
