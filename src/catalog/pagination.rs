use serde::Serialize;

/// Skip/limit window over the matching result set. No upper bound is
/// enforced on page: a page past the end returns an empty window.
#[derive(Debug, Clone, Copy)]
pub struct PageWindow {
    pub page: i64,
    pub limit: i64,
}

impl PageWindow {
    pub fn new(page: i64, limit: i64) -> Self {
        Self { page, limit }
    }

    pub fn offset(&self) -> i64 {
        // Saturate so absurdly large pages stay a valid (empty) window
        // instead of overflowing
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Pagination block returned alongside the product list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: i64,
    pub total_pages: i64,
    pub total_items: i64,
    pub items_per_page: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        let total_pages = if total == 0 {
            0
        } else {
            total.saturating_add(limit - 1) / limit
        };
        Self {
            current_page: page,
            total_pages,
            total_items: total,
            items_per_page: limit,
        }
    }
}
