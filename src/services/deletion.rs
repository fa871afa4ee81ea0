//! Confirmed deletion of one record or of the selected records.

use crate::repository::{RecordRemover, Table, TableRecord};
use crate::selection::Selection;
use crate::services::{ServiceError, ServiceResult};

/// What the user asked to delete, pending confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeletionRequest {
    Single {
        table: Table,
        id: i32,
        /// Label shown in the prompt; `None` falls back to "this item".
        name: Option<String>,
    },
    Bulk {
        table: Table,
        ids: Vec<i32>,
    },
}

impl DeletionRequest {
    pub fn single<T: TableRecord>(record: &T) -> Self {
        let name = record.display_name();
        DeletionRequest::Single {
            table: T::TABLE,
            id: record.record_id(),
            name: Some(name).filter(|name| !name.trim().is_empty()),
        }
    }

    /// Bulk request for everything currently selected.
    pub fn selected(table: Table, selection: &Selection) -> Self {
        DeletionRequest::Bulk {
            table,
            ids: selection.ids(),
        }
    }

    pub fn table(&self) -> Table {
        match self {
            DeletionRequest::Single { table, .. } | DeletionRequest::Bulk { table, .. } => *table,
        }
    }

    pub fn ids(&self) -> Vec<i32> {
        match self {
            DeletionRequest::Single { id, .. } => vec![*id],
            DeletionRequest::Bulk { ids, .. } => ids.clone(),
        }
    }

    /// A bulk request without ids never reaches the confirmation step.
    pub fn is_empty(&self) -> bool {
        matches!(self, DeletionRequest::Bulk { ids, .. } if ids.is_empty())
    }

    pub fn title(&self) -> &'static str {
        match self {
            DeletionRequest::Single { .. } => "Delete Item",
            DeletionRequest::Bulk { .. } => "Delete Multiple Items",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            DeletionRequest::Single { .. } => "This will permanently delete this item.",
            DeletionRequest::Bulk { .. } => "This will permanently delete all selected items.",
        }
    }

    /// Question asked before deleting.
    pub fn prompt(&self) -> String {
        let target = match self {
            DeletionRequest::Single { name, .. } => {
                name.clone().unwrap_or_else(|| "this item".to_string())
            }
            DeletionRequest::Bulk { ids, .. } => format!("{} selected item(s)", ids.len()),
        };
        format!("Are you sure you want to delete {target}? This action cannot be undone.")
    }
}

/// Runs `request` once the user confirmed it and drops the removed ids from
/// `selection`. Returns the number of deleted records.
pub fn confirm_deletion<R>(
    repo: &R,
    request: &DeletionRequest,
    confirmed: bool,
    selection: &mut Selection,
) -> ServiceResult<usize>
where
    R: RecordRemover + ?Sized,
{
    if request.is_empty() {
        return Ok(0);
    }
    if !confirmed {
        return Err(ServiceError::ConfirmationRequired);
    }

    let removed = match request {
        DeletionRequest::Single { table, id, .. } => {
            repo.delete_record(*table, *id).map_err(|err| {
                log::error!("Failed to delete {table} record {id}: {err}");
                err
            })?;
            1
        }
        DeletionRequest::Bulk { table, ids } => {
            repo.delete_records(*table, ids).map_err(|err| {
                log::error!("Failed to delete {table} records: {err}");
                err
            })?
        }
    };

    selection.remove_all(&request.ids());
    Ok(removed)
}


#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;

    #[test]
    fn empty_bulk_request_is_a_no_op() {
        let mut repo = MockRepository::new();
        repo.expect_delete_records().times(0);
        let mut selection = Selection::new();
        let request = DeletionRequest::selected(Table::Region, &selection);

        let removed = confirm_deletion(&repo, &request, false, &mut selection).expect("no-op");

        assert_eq!(removed, 0);
    }

    #[test]
    fn unconfirmed_request_is_refused() {
        let mut repo = MockRepository::new();
        repo.expect_delete_record().times(0);
        let request = DeletionRequest::Single {
            table: Table::Region,
            id: 4,
            name: None,
        };

        let result = confirm_deletion(&repo, &request, false, &mut Selection::new());

        assert!(matches!(result, Err(ServiceError::ConfirmationRequired)));
    }

    #[test]
    fn bulk_delete_clears_removed_ids_from_selection() {
        let mut repo = MockRepository::new();
        repo.expect_delete_records()
            .withf(|table, ids| *table == Table::Office && ids.to_vec() == vec![1, 2])
            .times(1)
            .returning(|_, ids| Ok(ids.len()));
        let mut selection = Selection::new();
        selection.toggle(1);
        selection.toggle(2);
        let request = DeletionRequest::selected(Table::Office, &selection);

        let removed = confirm_deletion(&repo, &request, true, &mut selection).expect("deleted");

        assert_eq!(removed, 2);
        assert!(selection.is_empty());
    }

    #[test]
    fn single_delete_keeps_other_selected_ids() {
        let mut repo = MockRepository::new();
        repo.expect_delete_record()
            .withf(|table, id| *table == Table::Region && *id == 4)
            .times(1)
            .returning(|_, _| Ok(()));
        let mut selection = Selection::new();
        selection.toggle(4);
        selection.toggle(5);
        let request = DeletionRequest::Single {
            table: Table::Region,
            id: 4,
            name: Some("Bicol".into()),
        };

        confirm_deletion(&repo, &request, true, &mut selection).expect("deleted");

        assert_eq!(selection.ids(), vec![5]);
    }

    #[test]
    fn missing_record_maps_to_not_found() {
        let mut repo = MockRepository::new();
        repo.expect_delete_record()
            .returning(|_, _| Err(RepositoryError::NotFound));
        let request = DeletionRequest::Single {
            table: Table::Region,
            id: 9,
            name: None,
        };

        let result = confirm_deletion(&repo, &request, true, &mut Selection::new());

        assert!(matches!(result, Err(ServiceError::NotFound)));
    }
}
