use rust_decimal::Decimal;
use serde::Deserialize;

use super::sort::SortDirection;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_SORT_BY: &str = "createdAt";

/// Raw list query as it arrives on the wire. Every field is an optional
/// string so that malformed input can be coerced rather than rejected.
#[derive(Debug, Default, Deserialize)]
pub struct RawListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub search: Option<String>,
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

/// Parsed list configuration with defaults applied. Parsing is total:
/// unparseable numbers fall back to defaults, they never raise.
#[derive(Debug, Clone)]
pub struct ListParams {
    pub page: i64,
    pub limit: i64,
    pub category: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub search: Option<String>,
    pub sort_by: String,
    pub sort_order: SortDirection,
}

impl ListParams {
    pub fn parse(raw: RawListQuery) -> Self {
        let default_limit = crate::config::CONFIG.pagination.default_limit;

        Self {
            page: parse_positive_int(raw.page.as_deref(), DEFAULT_PAGE),
            limit: apply_limit_cap(parse_positive_int(raw.limit.as_deref(), default_limit)),
            category: non_empty(raw.category),
            min_price: parse_price(raw.min_price.as_deref()),
            max_price: parse_price(raw.max_price.as_deref()),
            search: non_empty(raw.search),
            sort_by: non_empty(raw.sort_by).unwrap_or_else(|| DEFAULT_SORT_BY.to_string()),
            sort_order: SortDirection::from_token(raw.sort_order.as_deref()),
        }
    }
}

fn parse_positive_int(value: Option<&str>, default: i64) -> i64 {
    value
        .and_then(|s| s.trim().parse::<i64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

fn parse_price(value: Option<&str>) -> Option<Decimal> {
    value
        .and_then(|s| s.trim().parse::<Decimal>().ok())
        .filter(|d| !d.is_sign_negative())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn apply_limit_cap(limit: i64) -> i64 {
    let max_limit = crate::config::CONFIG.pagination.max_limit.unwrap_or(i64::MAX);
    if limit > max_limit {
        if crate::config::CONFIG.pagination.debug_logging {
            tracing::warn!("Limit {} exceeds max {}, capping to max", limit, max_limit);
        }
        max_limit
    } else {
        limit
    }
}
