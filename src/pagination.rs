//! Pagination controls rendered under a list: page links, summary line,
//! page-jump input and previous/next availability.

use serde::Serialize;

use crate::list_view::ListView;

/// Records per page when no size is configured.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Page links with `None` marking an elided gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One-based range of visible records, e.g. "Showing 21 to 40 of 45".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PageSummary {
    pub start: usize,
    pub end: usize,
    pub total: usize,
}

impl PageSummary {
    /// Builds the summary from the window start and the filtered count.
    /// The end is clamped to the total; an empty list reports `0 to 0`.
    pub fn new(start_index: usize, page_size: usize, total: usize) -> Self {
        if total == 0 {
            return Self {
                start: 0,
                end: 0,
                total,
            };
        }
        Self {
            start: (start_index + 1).min(total),
            end: (start_index + page_size).min(total),
            total,
        }
    }
}

impl std::fmt::Display for PageSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {} to {} of {}", self.start, self.end, self.total)
    }
}

/// Interprets the page-jump input. Anything but a whole number inside
/// `1..=total_pages` keeps `current_page`.
pub fn parse_page_input(input: &str, current_page: usize, total_pages: usize) -> usize {
    match input.trim().parse::<usize>() {
        Ok(page) if (1..=total_pages).contains(&page) => page,
        _ => current_page,
    }
}

/// Render-ready page of records with its navigation controls.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub summary: PageSummary,
    pub has_previous: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(
        items: Vec<T>,
        current_page: usize,
        total_pages: usize,
        summary: PageSummary,
    ) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page, 2, 2, 4, 2);

        Self {
            items,
            pages,
            page: current_page,
            total_pages,
            summary,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> Paginated<T> {
    /// Copies the current page of `view` into an owned page.
    pub fn from_view(view: &ListView<'_, T>) -> Self {
        let items = view
            .paginated_items()
            .iter()
            .map(|item| (*item).clone())
            .collect();
        let summary = PageSummary::new(
            view.start_index,
            view.page_size.get(),
            view.filtered_count(),
        );
        Self::new(items, view.current_page, view.total_pages, summary)
    }
}
