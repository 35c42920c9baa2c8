//! Pagination Math
//!
//! Page counts and the window of page buttons shown by the pager.

/// Number of pages needed for `count` items, `limit` per page
pub fn page_count(count: u32, limit: u32) -> u32 {
    if limit == 0 {
        return 0;
    }
    count.div_ceil(limit)
}

/// Up to `width` consecutive page numbers around `current`, clamped to
/// `1..=total`
pub fn page_window(current: u32, total: u32, width: u32) -> Vec<u32> {
    if total == 0 || width == 0 {
        return Vec::new();
    }
    let width = width.min(total);
    let current = current.clamp(1, total);
    let half = width / 2;
    let start = current.saturating_sub(half).max(1).min(total - width + 1);
    (start..start + width).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 6), 0);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_window(1, 0, 5), Vec::<u32>::new());
    }
}
