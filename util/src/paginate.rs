//! Page/per_page pagination helper.
//!
//! Query parameters are parsed leniently: anything that is not a positive
//! integer falls back to the default instead of rejecting the request.
//! [`PageInfo::link_header`] renders RFC 5988 `Link` relations so clients
//! can walk the collection without knowing the page arithmetic.

use serde::Deserialize;

pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 50;
/// Highest page number accepted; keeps `page * per_page` within `u64`.
pub const MAX_PAGE: u64 = u64::MAX / MAX_PER_PAGE;

/// Raw `?page=&per_page=` query parameters.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub per_page: Option<String>,
}

/// Normalized, 1-based pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub per_page: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

fn positive(raw: Option<&str>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|n| *n > 0)
}

impl PageParams {
    /// Clamp to sane defaults.
    pub fn normalize(&self) -> Pagination {
        let page = positive(self.page.as_deref()).unwrap_or(1).min(MAX_PAGE);
        let per_page = positive(self.per_page.as_deref())
            .unwrap_or(DEFAULT_PER_PAGE)
            .min(MAX_PER_PAGE);
        Pagination { page, per_page }
    }
}

impl Pagination {
    /// Zero-based page index, as expected by SeaORM's `Paginator::fetch_page`.
    pub fn page_index(&self) -> u64 {
        self.page.saturating_sub(1)
    }
}

/// A fetched page together with the counts needed to describe its neighbours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: u64,
    pub per_page: u64,
    pub total_items: u64,
}

impl PageInfo {
    pub fn new(pagination: Pagination, total_items: u64) -> Self {
        Self {
            page: pagination.page,
            per_page: pagination.per_page,
            total_items,
        }
    }

    /// Number of pages; an empty collection still has one (empty) page.
    pub fn total_pages(&self) -> u64 {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Renders the `Link` header value for the collection at `base_path`.
    pub fn link_header(&self, base_path: &str) -> String {
        let link = |page: u64, rel: &str| {
            format!(
                "<{base_path}?page={page}&per_page={}>; rel=\"{rel}\"",
                self.per_page
            )
        };

        let mut links = vec![link(self.page, "current")];
        if self.has_next() {
            links.push(link(self.page + 1, "next"));
        }
        if self.has_prev() {
            links.push(link(self.page - 1, "prev"));
        }
        links.push(link(1, "first"));
        links.push(link(self.total_pages(), "last"));

        links.join(",")
    }
}
