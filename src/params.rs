use serde::Deserialize;

use crate::models::StatusFilter;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<u64>,
    pub per_page: Option<u64>,
}

impl Pagination {
    /// Returns `(page, per_page, offset)`. The offset saturates at
    /// `i64::MAX`, the largest value SQL `OFFSET` accepts.
    pub fn normalize(&self) -> (u64, u64, u64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page).min(i64::MAX as u64);
        (page, per_page, offset)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    #[serde(flatten)]
    pub pagination: Pagination,
    #[serde(default)]
    pub status: StatusFilter,
}

impl ListQuery {
    /// Up to 100 rows of any deletion state, starting from the first.
    pub fn first_hundred() -> Self {
        Self {
            pagination: Pagination {
                page: Some(1),
                per_page: Some(100),
            },
            status: StatusFilter::All,
        }
    }
}

/// One page of a listing plus the unpaged row count.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
}
