//! Page-number pagination math.
//!
//! List endpoints take a 1-based `?page=` query parameter and return
//! `items`, `num_pages`, and `total`. The page size comes from an explicit
//! [`PageConfig`] rather than process-wide state.

/// Pagination settings, carried inside the server configuration.
#[derive(Debug, Clone)]
pub struct PageConfig {
    /// Maximum items per page.
    pub page_size: i64,
}

/// A resolved page: which rows to fetch and what to report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The 1-based page number actually served (after clamping).
    pub number: i64,
    /// Total number of pages for `total` items.
    pub num_pages: i64,
    /// SQL LIMIT for this page.
    pub limit: i64,
    /// SQL OFFSET for this page.
    pub offset: i64,
}

/// Resolve a requested page number against a total row count.
///
/// `num_pages` is `ceil(total / page_size)`, with a minimum of one page so
/// an empty table still serves page 1. Out-of-range requests clamp to the
/// nearest valid page: missing or `< 1` serves the first page, past the
/// end serves the last.
pub fn paginate(total: i64, requested: Option<i64>, config: &PageConfig) -> Page {
    let page_size = config.page_size.max(1);
    let num_pages = (total.max(0) + page_size - 1) / page_size;
    let num_pages = num_pages.max(1);

    let number = requested.unwrap_or(1).clamp(1, num_pages);

    Page {
        number,
        num_pages,
        limit: page_size,
        offset: (number - 1) * page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(page_size: i64) -> PageConfig {
        PageConfig { page_size }
    }

    #[test]
    fn num_pages_is_ceil_of_total_over_page_size() {
        assert_eq!(paginate(10, None, &config(4)).num_pages, 3);
        assert_eq!(paginate(8, None, &config(4)).num_pages, 2);
        assert_eq!(paginate(1, None, &config(4)).num_pages, 1);
    }

    #[test]
    fn empty_table_still_has_one_page() {
        let page = paginate(0, None, &config(10));
        assert_eq!(page.num_pages, 1);
        assert_eq!(page.number, 1);
        assert_eq!(page.offset, 0);
    }

    #[test]
    fn missing_page_serves_first() {
        let page = paginate(20, None, &config(5));
        assert_eq!(page.number, 1);
        assert_eq!(page.offset, 0);
        assert_eq!(page.limit, 5);
    }

    #[test]
    fn page_past_end_clamps_to_last() {
        let page = paginate(10, Some(99), &config(4));
        assert_eq!(page.number, 3);
        assert_eq!(page.offset, 8);
    }

    #[test]
    fn page_below_one_clamps_to_first() {
        assert_eq!(paginate(10, Some(0), &config(4)).number, 1);
        assert_eq!(paginate(10, Some(-3), &config(4)).number, 1);
    }

    #[test]
    fn offset_advances_by_page_size() {
        let page = paginate(12, Some(2), &config(4));
        assert_eq!(page.offset, 4);
        assert_eq!(page.limit, 4);
    }
}
