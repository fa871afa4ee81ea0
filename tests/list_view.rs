use doctrack::list_view::{ListController, ListViewParams, ListViewState, PageSize, derive_view};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
struct Item {
    name: String,
}

fn items(names: &[&str]) -> Vec<Item> {
    names
        .iter()
        .map(|name| Item {
            name: name.to_string(),
        })
        .collect()
}

fn numbered(count: usize) -> Vec<Item> {
    (1..=count)
        .map(|n| Item {
            name: format!("Item {n}"),
        })
        .collect()
}

fn size(value: usize) -> PageSize {
    PageSize::new(value).expect("positive page size")
}

fn names<'a>(page: &[&'a Item]) -> Vec<&'a str> {
    page.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn alphabet_splits_into_two_pages() {
    let mut controller =
        ListController::new(items(&["Alpha", "Beta", "Gamma"])).page_size(size(2));

    let view = controller.view();
    assert_eq!(view.total_pages, 2);
    assert_eq!(names(view.paginated_items()), vec!["Alpha", "Beta"]);
    assert_eq!((view.start_index, view.end_index), (0, 2));

    assert!(controller.set_page(2));
    let view = controller.view();
    assert_eq!(names(view.paginated_items()), vec!["Gamma"]);
    assert_eq!((view.start_index, view.end_index), (2, 4));
}

#[test]
fn query_filters_and_resets_to_first_page() {
    let mut controller =
        ListController::new(items(&["Alpha", "Beta", "Gamma"])).page_size(size(2));
    controller.set_page(2);

    controller.set_query("al");

    let view = controller.view();
    assert_eq!(names(&view.filtered_items), vec!["Alpha"]);
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
}

#[test]
fn new_query_resets_page_even_when_every_item_still_matches() {
    let mut controller = ListController::new(numbered(50)).page_size(size(20));
    assert!(controller.set_page(3));

    controller.set_query("name");

    let view = controller.view();
    assert_eq!(controller.current_page(), 1);
    assert_eq!(view.filtered_count(), 50);
    assert_eq!(view.total_pages, 3);
}

#[test]
fn blank_query_keeps_every_item() {
    let controller = ListController::new(items(&["Alpha", "Beta"])).query("   ");
    let view = controller.view();
    assert_eq!(view.filtered_count(), 2);
    assert_eq!(view.total_items, 2);
}

#[test]
fn default_filter_is_case_insensitive_and_sees_field_names() {
    let controller = ListController::new(items(&["Alpha", "Beta"])).query("BETA");
    assert_eq!(names(&controller.view().filtered_items), vec!["Beta"]);

    let controller = ListController::new(items(&["Alpha", "Beta"])).query("name");
    assert_eq!(controller.view().filtered_count(), 2);
}

#[test]
fn empty_list_has_no_pages() {
    let mut controller = ListController::new(Vec::<Item>::new());

    let view = controller.view();
    assert_eq!(view.total_pages, 0);
    assert!(view.paginated_items().is_empty());
    assert_eq!(view.current_page, 1);

    assert!(!controller.set_page(1));
    assert_eq!(controller.current_page(), 1);
}

#[test]
fn shrinking_items_clamps_the_page() {
    let mut controller = ListController::new(numbered(45)).page_size(size(20));
    assert!(controller.set_page(3));
    assert_eq!(controller.view().paginated_items().len(), 5);

    controller.set_items(numbered(10));

    let view = controller.view();
    assert_eq!(view.total_pages, 1);
    assert_eq!(view.current_page, 1);
    assert_eq!(view.paginated_items().len(), 10);
}

#[test]
fn deleting_the_last_page_moves_back_one_page() {
    let mut controller = ListController::new(numbered(21)).page_size(size(20));
    controller.set_page(2);

    controller.update_items(|items| {
        items.pop();
    });

    assert_eq!(controller.current_page(), 1);
    assert_eq!(controller.total_pages(), 1);
}

#[test]
fn out_of_range_pages_are_ignored() {
    let mut controller = ListController::new(numbered(30)).page_size(size(10));
    controller.set_page(2);

    assert!(!controller.set_page(0));
    assert!(!controller.set_page(4));
    assert_eq!(controller.current_page(), 2);

    assert!(controller.next_page());
    assert!(!controller.next_page());
    assert_eq!(controller.current_page(), 3);
}

#[test]
fn derive_view_is_pure() {
    let records = numbered(45);
    let mut state = ListViewState::new();
    assert!(state.set_page(3, 3));

    let params = ListViewParams::new(&records, "", size(20));
    let view = derive_view(&state, &params);
    assert_eq!(view.current_page, 3);
    assert_eq!(state.current_page(), 3);

    let shrunk = numbered(10);
    let view = derive_view(&state, &ListViewParams::new(&shrunk, "", size(20)));
    assert_eq!(view.current_page, 1);
    assert_eq!(view.state().current_page(), 1);
    assert_eq!(state.current_page(), 3);
}

#[test]
fn custom_filter_replaces_serialized_match() {
    let by_prefix = |item: &Item, query: &str| item.name.starts_with(query);
    let controller = ListController::with_filter(items(&["Alpha", "Beta", "Alphabet"]), by_prefix)
        .query("Al");

    assert_eq!(names(&controller.view().filtered_items), vec!["Alpha", "Alphabet"]);
}
