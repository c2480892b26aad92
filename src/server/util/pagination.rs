//! Page size resolution and page link building for the player list.

/// Page size used when the client doesn't supply `limit`
pub const DEFAULT_PAGE_SIZE: u64 = 20;

/// Largest page size a client may request
pub const MAX_PAGE_SIZE: u64 = 100;

/// A resolved page request. Pages are numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Requested page, 1-based
    pub page: u64,
    /// Number of results per page
    pub page_size: u64,
}

impl PageRequest {
    /// Resolve the `page` and `limit` query parameters.
    ///
    /// A missing or zero `limit` uses [`DEFAULT_PAGE_SIZE`], larger values are capped at
    /// [`MAX_PAGE_SIZE`]. A missing `page` means the first page. `page` 0 is kept as-is so the
    /// caller can reject it.
    pub fn new(page: Option<u64>, limit: Option<u64>) -> Self {
        let page_size = match limit {
            None | Some(0) => DEFAULT_PAGE_SIZE,
            Some(limit) => limit.min(MAX_PAGE_SIZE),
        };

        Self {
            page: page.unwrap_or(1),
            page_size,
        }
    }

    /// Zero-based page index as used by the paginator, `None` for page 0.
    pub fn index(&self) -> Option<u64> {
        self.page.checked_sub(1)
    }
}

/// Build a relative link to `page` that preserves the other query parameters.
///
/// The first page is linked without a `page` parameter.
pub fn page_link(
    path: &str,
    params: &[(&str, String)],
    page: u64,
) -> Result<String, serde_urlencoded::ser::Error> {
    let mut pairs: Vec<(&str, String)> = params.to_vec();
    if page > 1 {
        pairs.push(("page", page.to_string()));
    }

    let query = serde_urlencoded::to_string(&pairs)?;

    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}
