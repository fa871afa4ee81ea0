//! List-view controller: search filtering and pagination over fetched records.
//!
//! The controller is framework-free. [`derive_view`] is the pure core: given
//! the previous [`ListViewState`] and the current [`ListViewParams`] it
//! returns the [`ListView`] to render together with the reconciled state the
//! caller keeps for the next render. [`ListController`] wraps the same
//! function for callers that prefer an owned, mutable object.
//!
//! Reconciliation rules, applied in order on every derivation:
//! 1. a query different from the one last seen resets the page to 1;
//! 2. the page is clamped into `1..=max(total_pages, 1)`.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::domain::types::TypeConstraintError;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::search::{SearchFilter, SerializedMatch, is_blank};

/// Number of records shown per page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub fn new(value: usize) -> Result<Self, TypeConstraintError> {
        NonZeroUsize::new(value)
            .map(Self)
            .ok_or(TypeConstraintError::InvalidPageSize)
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(NonZeroUsize::new(DEFAULT_ITEMS_PER_PAGE).unwrap_or(NonZeroUsize::MIN))
    }
}

impl TryFrom<usize> for PageSize {
    type Error = TypeConstraintError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Keeps records matching `query`, preserving their original order.
pub fn filter_items<'a, T, F>(items: &'a [T], query: &str, filter: &F) -> Vec<&'a T>
where
    F: SearchFilter<T> + ?Sized,
{
    if is_blank(query) {
        return items.iter().collect();
    }
    items
        .iter()
        .filter(|item| filter.matches(item, query))
        .collect()
}

/// `ceil(filtered_count / page_size)`; zero when nothing matched.
pub fn total_pages(filtered_count: usize, page_size: PageSize) -> usize {
    filtered_count.div_ceil(page_size.get())
}

/// Records on `current_page`; empty when the page lies past the end.
pub fn page_slice<T>(filtered: &[T], current_page: usize, page_size: PageSize) -> &[T] {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size.get());
    let end = start.saturating_add(page_size.get()).min(filtered.len());
    filtered.get(start..end).unwrap_or(&[])
}

/// Brings a page number back into `1..=max(total_pages, 1)`.
pub fn clamp_page(current_page: usize, total_pages: usize) -> usize {
    current_page.clamp(1, total_pages.max(1))
}

/// State owned by a list view between renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListViewState {
    current_page: usize,
    last_query: String,
}

impl Default for ListViewState {
    fn default() -> Self {
        Self {
            current_page: 1,
            last_query: String::new(),
        }
    }
}

impl ListViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Query the page number was last reconciled against.
    pub fn last_query(&self) -> &str {
        &self.last_query
    }

    /// Moves to `page` if it lies in `1..=total_pages`; otherwise leaves the
    /// state untouched. Returns whether the request was accepted.
    pub fn set_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page < 1 || page > total_pages {
            return false;
        }
        self.current_page = page;
        true
    }
}

/// Inputs of one derivation.
pub struct ListViewParams<'a, T, F: ?Sized> {
    pub items: &'a [T],
    pub query: &'a str,
    pub page_size: PageSize,
    pub filter: &'a F,
}

impl<'a, T> ListViewParams<'a, T, SerializedMatch> {
    /// Parameters using the default serialized-text predicate.
    pub fn new(items: &'a [T], query: &'a str, page_size: PageSize) -> Self {
        Self {
            items,
            query,
            page_size,
            filter: &SerializedMatch,
        }
    }
}

impl<'a, T, F: ?Sized> ListViewParams<'a, T, F> {
    pub fn with_filter<G: ?Sized>(self, filter: &'a G) -> ListViewParams<'a, T, G> {
        ListViewParams {
            items: self.items,
            query: self.query,
            page_size: self.page_size,
            filter,
        }
    }
}

/// Derived, render-ready view of a list.
#[derive(Debug)]
pub struct ListView<'a, T> {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: PageSize,
    /// Number of records before filtering.
    pub total_items: usize,
    pub filtered_items: Vec<&'a T>,
    /// First index of the page window into `filtered_items`.
    pub start_index: usize,
    /// Exclusive end of the page window; may exceed `filtered_items.len()`.
    pub end_index: usize,
    state: ListViewState,
}

impl<'a, T> ListView<'a, T> {
    /// Records on the current page.
    pub fn paginated_items(&self) -> &[&'a T] {
        page_slice(&self.filtered_items, self.current_page, self.page_size)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered_items.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Reconciled state to keep for the next derivation.
    pub fn state(&self) -> &ListViewState {
        &self.state
    }

    pub fn into_state(self) -> ListViewState {
        self.state
    }
}

/// Derives the view for `params`, reconciling `state` without mutating it.
pub fn derive_view<'a, T, F>(
    state: &ListViewState,
    params: &ListViewParams<'a, T, F>,
) -> ListView<'a, T>
where
    F: SearchFilter<T> + ?Sized,
{
    let mut current_page = state.current_page;
    if params.query != state.last_query {
        current_page = 1;
    }

    let filtered_items = filter_items(params.items, params.query, params.filter);
    let total_pages = total_pages(filtered_items.len(), params.page_size);
    let current_page = clamp_page(current_page, total_pages);

    let start_index = (current_page - 1) * params.page_size.get();
    let end_index = start_index + params.page_size.get();

    ListView {
        current_page,
        total_pages,
        page_size: params.page_size,
        total_items: params.items.len(),
        filtered_items,
        start_index,
        end_index,
        state: ListViewState {
            current_page,
            last_query: params.query.to_string(),
        },
    }
}

/// Owned controller for a single list view.
///
/// Every mutation re-derives the view and stores the reconciled page, so
/// `current_page` always satisfies the reset and clamp rules.
#[derive(Debug, Clone)]
pub struct ListController<T, F = SerializedMatch> {
    items: Vec<T>,
    query: String,
    page_size: PageSize,
    filter: F,
    state: ListViewState,
}

impl<T: Serialize> ListController<T, SerializedMatch> {
    pub fn new(items: Vec<T>) -> Self {
        Self::with_filter(items, SerializedMatch)
    }
}

impl<T, F> ListController<T, F>
where
    F: SearchFilter<T>,
{
    pub fn with_filter(items: Vec<T>, filter: F) -> Self {
        Self {
            items,
            query: String::new(),
            page_size: PageSize::default(),
            filter,
            state: ListViewState::default(),
        }
    }

    pub fn page_size(mut self, page_size: PageSize) -> Self {
        self.set_page_size(page_size);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn total_pages(&self) -> usize {
        let count = self
            .items
            .iter()
            .filter(|item| self.filter.matches(item, &self.query))
            .count();
        total_pages(count, self.page_size)
    }

    /// Current view of the list.
    pub fn view(&self) -> ListView<'_, T> {
        derive_view(&self.state, &self.params())
    }

    /// Replaces the source records, clamping the page if the list shrank.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.reconcile();
    }

    /// Updates the query; a different query always lands on page 1.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.reconcile();
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.reconcile();
    }

    /// Navigates to `page`; out-of-range requests are ignored.
    pub fn set_page(&mut self, page: usize) -> bool {
        let total_pages = self.total_pages();
        self.state.set_page(page, total_pages)
    }

    pub fn next_page(&mut self) -> bool {
        self.set_page(self.current_page() + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        match self.current_page().checked_sub(1) {
            Some(page) => self.set_page(page),
            None => false,
        }
    }

    /// Applies `edit` to the records in place (e.g. after a delete or an
    /// update returned by the API) and reconciles the page.
    pub fn update_items(&mut self, edit: impl FnOnce(&mut Vec<T>)) {
        edit(&mut self.items);
        self.reconcile();
    }

    fn params(&self) -> ListViewParams<'_, T, F> {
        ListViewParams {
            items: &self.items,
            query: &self.query,
            page_size: self.page_size,
            filter: &self.filter,
        }
    }

    fn reconcile(&mut self) {
        let next = self.view().into_state();
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(value: usize) -> PageSize {
        PageSize::new(value).expect("valid page size")
    }

    #[test]
    fn page_size_rejects_zero() {
        assert_eq!(PageSize::new(0), Err(TypeConstraintError::InvalidPageSize));
        assert_eq!(PageSize::default().get(), 20);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, size(20)), 0);
        assert_eq!(total_pages(1, size(20)), 1);
        assert_eq!(total_pages(20, size(20)), 1);
        assert_eq!(total_pages(21, size(20)), 2);
        assert_eq!(total_pages(45, size(20)), 3);
    }

    #[test]
    fn page_slice_is_empty_past_the_end() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(page_slice(&items, 1, size(2)), &[1, 2]);
        assert_eq!(page_slice(&items, 3, size(2)), &[5]);
        assert!(page_slice(&items, 4, size(2)).is_empty());
        assert!(page_slice(&items, usize::MAX, size(2)).is_empty());
    }

    #[test]
    fn clamp_page_never_returns_zero() {
        assert_eq!(clamp_page(3, 0), 1);
        assert_eq!(clamp_page(0, 4), 1);
        assert_eq!(clamp_page(5, 4), 4);
        assert_eq!(clamp_page(2, 4), 2);
    }

    #[test]
    fn derive_view_resets_page_on_new_query() {
        let items: Vec<i32> = (1..=50).collect();
        let mut state = ListViewState::new();
        assert!(state.set_page(2, 3));

        let params = ListViewParams::new(&items, "", size(20));
        let view = derive_view(&state, &params);
        assert_eq!(view.current_page, 2);

        let params = ListViewParams::new(&items, "1", size(20));
        let view = derive_view(view.state(), &params);
        assert_eq!(view.current_page, 1);
        assert_eq!(view.state().last_query(), "1");
    }

    #[test]
    fn derive_view_does_not_mutate_input_state() {
        let items = vec!["a"; 5];
        let mut state = ListViewState::new();
        assert!(state.set_page(3, 3));
        let params = ListViewParams::new(&items, "", size(2));
        let before = state.clone();
        let view = derive_view(&state, &params);
        assert_eq!(state, before);
        assert_eq!(view.current_page, 3);
        assert_eq!(view.paginated_items(), &[&"a"]);
    }

    #[test]
    fn window_indices_follow_the_page() {
        let items: Vec<i32> = (1..=5).collect();
        let mut controller = ListController::new(items).page_size(size(2));
        assert!(controller.set_page(3));
        let view = controller.view();
        assert_eq!(view.start_index, 4);
        assert_eq!(view.end_index, 6);
        assert_eq!(view.paginated_items(), &[&5]);
        assert!(view.has_previous());
        assert!(!view.has_next());
    }

    #[test]
    fn custom_filter_is_used() {
        let items = vec!["apple", "banana", "cherry"];
        let starts_with = |item: &&str, query: &str| item.starts_with(query);
        let controller = ListController::with_filter(items, starts_with).query("b");
        let view = controller.view();
        assert_eq!(view.filtered_items, vec![&"banana"]);
    }

    #[test]
    fn next_and_previous_stay_in_bounds() {
        let items: Vec<i32> = (1..=3).collect();
        let mut controller = ListController::new(items).page_size(size(2));
        assert!(!controller.previous_page());
        assert!(controller.next_page());
        assert_eq!(controller.current_page(), 2);
        assert!(!controller.next_page());
        assert!(controller.previous_page());
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn update_items_clamps_after_delete() {
        let items: Vec<i32> = (1..=4).collect();
        let mut controller = ListController::new(items).page_size(size(2));
        assert!(controller.set_page(2));
        controller.update_items(|items| items.retain(|value| *value < 3));
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn shrinking_page_size_keeps_page_valid() {
        let items: Vec<i32> = (1..=10).collect();
        let mut controller = ListController::new(items).page_size(size(2));
        assert!(controller.set_page(5));
        controller.set_page_size(size(5));
        assert_eq!(controller.current_page(), 2);
    }
}
