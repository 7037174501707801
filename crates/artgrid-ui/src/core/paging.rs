//! Page-number parsing and pagination display math.
//!
//! # Design
//! - The URL `page` parameter is untrusted text; anything that is not a
//!   positive integer maps to page 1.
//! - The "showing X to Y of Z" window is clamped to the collection size.

use serde::{Deserialize, Serialize};

/// First page of every listing.
pub const FIRST_PAGE: u32 = 1;

/// Number of numbered page links shown by the pagination control.
pub const PAGE_LINK_SPAN: u32 = 5;

/// Query-string shape of the browse route.
///
/// The raw value is kept as text so malformed input reaches
/// [`parse_page_param`] instead of failing deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Raw `page` query value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
}

impl PageParams {
    /// Query parameters that navigate to `page`.
    #[must_use]
    pub fn for_page(page: u32) -> Self {
        Self {
            page: Some(page.max(FIRST_PAGE).to_string()),
        }
    }

    /// Resolved 1-based page number.
    #[must_use]
    pub fn page_number(&self) -> u32 {
        parse_page_param(self.page.as_deref())
    }
}

/// Translate the URL `page` value into a 1-based page number.
///
/// Absent, empty, non-numeric, zero, negative and fractional values all
/// resolve to [`FIRST_PAGE`].
#[must_use]
pub fn parse_page_param(raw: Option<&str>) -> u32 {
    raw.map(str::trim)
        .and_then(|value| value.parse::<u32>().ok())
        .filter(|page| *page >= FIRST_PAGE)
        .unwrap_or(FIRST_PAGE)
}

/// Number of pages needed for `total` records at `limit` per page; at least 1.
#[must_use]
pub fn total_pages(limit: u32, total: u64) -> u32 {
    if limit == 0 || total == 0 {
        return FIRST_PAGE;
    }
    u32::try_from(total.div_ceil(u64::from(limit))).unwrap_or(u32::MAX)
}

/// Inclusive record range shown for one page, for "showing X to Y of Z".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based index of the first record on the page, or 0 when empty.
    pub start: u64,
    /// 1-based index of the last record on the page, or 0 when empty.
    pub end: u64,
    /// Total records in the collection.
    pub total: u64,
}

impl PageWindow {
    /// Compute the window for `page` at `limit` records per page.
    #[must_use]
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        let page = u64::from(page.max(FIRST_PAGE));
        let limit = u64::from(limit);
        let offset = (page - 1).saturating_mul(limit);
        if limit == 0 || offset >= total {
            return Self {
                start: 0,
                end: 0,
                total,
            };
        }
        Self {
            start: offset + 1,
            end: page.saturating_mul(limit).min(total),
            total,
        }
    }

    /// True when no records fall in the window.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end == 0
    }

    /// Display label, e.g. `Showing 13 to 24 of 50 entries`.
    #[must_use]
    pub fn label(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.start, self.end, self.total
        )
    }
}

/// Centred run of page numbers for the pagination control.
#[must_use]
pub fn page_links(current: u32, total_pages: u32, span: u32) -> Vec<u32> {
    let total_pages = total_pages.max(FIRST_PAGE);
    let span = span.clamp(1, total_pages);
    let current = current.clamp(FIRST_PAGE, total_pages);
    let half = span / 2;
    let start = current
        .saturating_sub(half)
        .max(FIRST_PAGE)
        .min(total_pages - span + 1);
    (start..start + span).collect()
}

/// Reasons a page-jump input is refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PageJumpError {
    /// Input was not a whole number.
    #[error("page must be a whole number")]
    NotANumber,
    /// Input was outside `1..=total_pages`.
    #[error("page must be between 1 and {total_pages}")]
    OutOfRange {
        /// Last valid page.
        total_pages: u32,
    },
}

/// Validate the page-jump input against the known page count.
///
/// # Errors
/// Returns [`PageJumpError::NotANumber`] for non-integers and
/// [`PageJumpError::OutOfRange`] for pages outside `1..=total_pages`.
pub fn parse_page_jump(input: &str, total_pages: u32) -> Result<u32, PageJumpError> {
    let value = input
        .trim()
        .parse::<i64>()
        .map_err(|_| PageJumpError::NotANumber)?;
    let total_pages = total_pages.max(FIRST_PAGE);
    u32::try_from(value)
        .ok()
        .filter(|page| (FIRST_PAGE..=total_pages).contains(page))
        .ok_or(PageJumpError::OutOfRange { total_pages })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_page_params_resolve_to_first_page() {
        for raw in [None, Some(""), Some("abc"), Some("-1"), Some("0"), Some("2.5"), Some(" ")] {
            assert_eq!(parse_page_param(raw), FIRST_PAGE, "{raw:?}");
        }
    }

    #[test]
    fn valid_page_params_parse() {
        assert_eq!(parse_page_param(Some("3")), 3);
        assert_eq!(parse_page_param(Some(" 7 ")), 7);
        assert_eq!(PageParams::for_page(0).page_number(), 1);
        assert_eq!(PageParams::for_page(9).page.as_deref(), Some("9"));
        assert_eq!(PageParams::default().page_number(), 1);
    }

    #[test]
    fn window_clamps_last_page_to_total() {
        let window = PageWindow::new(5, 12, 50);
        assert_eq!((window.start, window.end), (49, 50));
        assert_eq!(window.label(), "Showing 49 to 50 of 50 entries");
    }

    #[test]
    fn window_for_middle_page() {
        let window = PageWindow::new(2, 12, 50);
        assert_eq!((window.start, window.end, window.total), (13, 24, 50));
        assert!(!window.is_empty());
    }

    #[test]
    fn window_past_end_is_empty() {
        assert!(PageWindow::new(9, 12, 50).is_empty());
        assert!(PageWindow::new(1, 12, 0).is_empty());
        assert!(PageWindow::new(1, 0, 50).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(12, 50), 5);
        assert_eq!(total_pages(12, 48), 4);
        assert_eq!(total_pages(12, 0), 1);
        assert_eq!(total_pages(0, 50), 1);
    }

    #[test]
    fn page_links_stay_centred_and_in_range() {
        assert_eq!(page_links(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_links(6, 10, 5), vec![4, 5, 6, 7, 8]);
        assert_eq!(page_links(10, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_links(2, 3, 5), vec![1, 2, 3]);
        assert_eq!(page_links(40, 3, 5), vec![1, 2, 3]);
    }

    #[test]
    fn page_jump_validates_range() {
        assert_eq!(parse_page_jump("4", 5), Ok(4));
        assert_eq!(parse_page_jump("x", 5), Err(PageJumpError::NotANumber));
        assert_eq!(
            parse_page_jump("0", 5),
            Err(PageJumpError::OutOfRange { total_pages: 5 })
        );
        assert_eq!(
            parse_page_jump("-3", 5),
            Err(PageJumpError::OutOfRange { total_pages: 5 })
        );
        assert_eq!(
            parse_page_jump("6", 5),
            Err(PageJumpError::OutOfRange { total_pages: 5 })
        );
    }
}
