//! Row selection backing the bulk delete action.

use std::collections::BTreeSet;

use crate::domain::Record;

/// Set of selected record ids, kept in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    ids: BTreeSet<i32>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection holding `ids`; repeated ids are kept once.
    pub fn from_ids(ids: impl IntoIterator<Item = i32>) -> Self {
        let mut selection = Self::new();
        for id in ids {
            selection.select(id);
        }
        selection
    }

    /// Replaces the selection with the ids of the visible page.
    pub fn select_page<T: Record>(&mut self, page: &[&T]) {
        self.ids = page.iter().map(|record| record.record_id()).collect();
    }

    /// Adds `id`, keeping it selected when it already is.
    pub fn select(&mut self, id: i32) {
        self.ids.insert(id);
    }

    /// Adds `id` when absent, removes it otherwise. Returns whether it is
    /// selected afterwards.
    pub fn toggle(&mut self, id: i32) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// Header checkbox: selects the page unless every row on it is already
    /// selected, in which case the selection is cleared.
    pub fn toggle_page<T: Record>(&mut self, page: &[&T]) {
        let all_selected =
            !page.is_empty() && page.iter().all(|record| self.contains(record.record_id()));
        if all_selected {
            self.clear();
        } else {
            self.select_page(page);
        }
    }

    pub fn contains(&self, id: i32) -> bool {
        self.ids.contains(&id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Drops ids that no longer exist, e.g. after a delete.
    pub fn remove_all(&mut self, ids: &[i32]) {
        for id in ids {
            self.ids.remove(id);
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<i32> {
        self.ids.iter().copied().collect()
    }

    /// Label of the bulk delete button.
    pub fn delete_label(&self) -> String {
        format!("Delete Selected Items ({})", self.len())
    }
}
