use crate::dto::list::{ListPageData, ListQuery};
use crate::list_view::{ListController, PageSize};
use crate::pagination::Paginated;
use crate::repository::{RecordReader, TableRecord};
use crate::search::{FieldMatch, is_blank};
use crate::services::ServiceResult;

/// Loads one page of a table, filtered by the query's search text.
///
/// Out-of-range page requests leave the list on its first page.
pub fn load_list_page<T, R>(
    repo: &R,
    query: ListQuery,
    page_size: PageSize,
) -> ServiceResult<ListPageData<T>>
where
    T: TableRecord,
    R: RecordReader + ?Sized,
{
    let records = repo.list_records::<T>().map_err(|err| {
        log::error!("Failed to load {} records: {err}", T::TABLE);
        err
    })?;

    let search_query = query.search.filter(|term| !is_blank(term));

    let mut controller = ListController::with_filter(records, FieldMatch).page_size(page_size);
    if let Some(term) = &search_query {
        controller.set_query(term.as_str());
    }
    if let Some(page) = query.page {
        if !controller.set_page(page) {
            log::debug!(
                "Ignoring page {page} of {}, {} page(s) available",
                T::TABLE,
                controller.total_pages()
            );
        }
    }

    let view = controller.view();

    Ok(ListPageData {
        title: T::TABLE.title().to_string(),
        headers: T::headers(),
        records: Paginated::from_view(&view),
        search_query,
    })
}

/// Every record of the table matching `search`, unpaginated.
pub fn load_filtered<T, R>(repo: &R, search: Option<&str>) -> ServiceResult<Vec<T>>
where
    T: TableRecord,
    R: RecordReader + ?Sized,
{
    let records = repo.list_records::<T>().map_err(|err| {
        log::error!("Failed to load {} records: {err}", T::TABLE);
        err
    })?;

    let controller =
        ListController::with_filter(records, FieldMatch).query(search.unwrap_or_default());
    let filtered = controller.view().filtered_items.into_iter().cloned().collect();
    Ok(filtered)
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::domain::action_required::ActionRequired;
    use crate::domain::types::{ActionLabel, ActionRequiredId};
    use crate::repository::errors::RepositoryError;
    use crate::repository::mock::MockRepository;
    use crate::services::ServiceError;

    fn action(id: i32, label: &str) -> ActionRequired {
        ActionRequired {
            id: ActionRequiredId::new(id).expect("valid id"),
            action_required: ActionLabel::new(label).expect("valid label"),
        }
    }

    fn actions(count: i32) -> Vec<ActionRequired> {
        (1..=count)
            .map(|id| action(id, &format!("Action {id}")))
            .collect()
    }

    fn size(value: usize) -> PageSize {
        PageSize::new(value).expect("valid page size")
    }

    #[test]
    fn loads_requested_page() {
        let mut repo = MockRepository::new();
        repo.expect_list_records::<ActionRequired>()
            .times(1)
            .returning(|| Ok(actions(45)));

        let data = load_list_page::<ActionRequired, _>(&repo, ListQuery::new().page(3), size(20))
            .expect("page loads");

        assert_eq!(data.title, "Action Required");
        assert_eq!(data.records.page, 3);
        assert_eq!(data.records.items.len(), 5);
        assert_eq!(data.records.summary.to_string(), "Showing 41 to 45 of 45");
        assert_eq!(data.search_query, None);
    }

    #[test]
    fn search_filters_before_paging() {
        let mut repo = MockRepository::new();
        repo.expect_list_records::<ActionRequired>()
            .returning(|| Ok(vec![action(1, "For signature"), action(2, "For filing")]));

        let query = ListQuery::new().search("SIGN").page(2);
        let data = load_list_page::<ActionRequired, _>(&repo, query, size(20)).expect("page loads");

        assert_eq!(data.records.page, 1);
        assert_eq!(data.records.items.len(), 1);
        assert_eq!(data.records.items[0].action_required.as_str(), "For signature");
        assert_eq!(data.search_query.as_deref(), Some("SIGN"));
    }

    #[test]
    fn blank_search_is_dropped() {
        let mut repo = MockRepository::new();
        repo.expect_list_records::<ActionRequired>()
            .returning(|| Ok(actions(3)));

        let query = ListQuery::new().search("   ");
        let data = load_list_page::<ActionRequired, _>(&repo, query, size(20)).expect("page loads");

        assert_eq!(data.records.items.len(), 3);
        assert_eq!(data.search_query, None);
    }

    #[test]
    fn api_failure_is_reported() {
        let mut repo = MockRepository::new();
        repo.expect_list_records::<ActionRequired>()
            .returning(|| Err(RepositoryError::Api("Service unavailable".into())));

        let result = load_list_page::<ActionRequired, _>(&repo, ListQuery::new(), size(20));

        assert!(matches!(
            result,
            Err(ServiceError::Repository(RepositoryError::Api(ref msg)))
                if msg == "Service unavailable"
        ));
    }

    #[test]
    fn load_filtered_returns_every_match() {
        let mut repo = MockRepository::new();
        repo.expect_list_records::<ActionRequired>()
            .returning(|| Ok(actions(30)));

        let all = load_filtered::<ActionRequired, _>(&repo, None).expect("records");
        assert_eq!(all.len(), 30);
    }
}
