//! Pagination envelope used by the list endpoints

use serde::{Deserialize, Serialize};

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub pages: u32,
    pub per_page: u32,
    pub total: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

/// One page of records
///
/// The song list names its items `musicas` and the potpourri list `potpourri`;
/// both deserialize into `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(alias = "musicas", alias = "potpourri")]
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    /// Number of the page that follows, if any
    pub fn next_page(&self) -> Option<u32> {
        self.pagination.has_next.then(|| self.pagination.page + 1)
    }

    /// Number of the page that precedes, if any
    pub fn previous_page(&self) -> Option<u32> {
        self.pagination
            .has_prev
            .then(|| self.pagination.page.saturating_sub(1))
    }
}
