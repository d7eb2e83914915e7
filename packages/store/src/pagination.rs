//! # Pagination window
//!
//! Decides which page links the pagination bar renders. A page is shown when it
//! is the first page, the last page, or adjacent to the current page. Hidden runs
//! collapse into a single [`PageItem::Ellipsis`], emitted where the run touches
//! page 2 or the second-to-last page. Hidden runs always start at page 2 or end
//! at `total - 1`, so each run produces exactly one ellipsis.
//!
//! ```text
//! total = 10, current = 5   →   1 … 4 [5] 6 … 10
//! total = 10, current = 1   →  [1] 2 … 10
//! total = 3,  current = 1   →  [1] 2 3
//! ```

/// One slot in the rendered pagination bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageItem {
    Page { number: u32, active: bool },
    Ellipsis,
}

/// Compute the visible page links for `current_page` out of `total_pages`.
///
/// An out-of-range `current_page` is clamped. Zero pages yields no links.
pub fn pagination_window(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = current_page.clamp(1, total_pages);

    let mut items = Vec::new();
    for number in 1..=total_pages {
        let visible = number == 1 || number == total_pages || number.abs_diff(current) <= 1;
        if visible {
            items.push(PageItem::Page {
                number,
                active: number == current,
            });
        } else if number == 2 || number == total_pages - 1 {
            items.push(PageItem::Ellipsis);
        }
    }
    items
}

/// Everything the pagination bar needs for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationControls {
    pub current_page: u32,
    pub total_pages: u32,
    pub items: Vec<PageItem>,
    /// Target of the "previous" control; `None` renders it disabled.
    pub previous: Option<u32>,
    /// Target of the "next" control; `None` renders it disabled.
    pub next: Option<u32>,
}

impl PaginationControls {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        let current = if total_pages == 0 {
            1
        } else {
            current_page.clamp(1, total_pages)
        };
        Self {
            current_page: current,
            total_pages,
            items: pagination_window(current, total_pages),
            previous: (current > 1).then(|| current - 1),
            next: (current < total_pages).then(|| current + 1),
        }
    }

    /// Whether a click on `page` should do anything.
    pub fn accepts(&self, page: u32) -> bool {
        (1..=self.total_pages).contains(&page)
    }
}
