use super::*;

fn product(id: i64, name: &str, code: &str, category: &str) -> Product {
    Product {
        id,
        name: name.to_owned(),
        code: code.to_owned(),
        category: category.to_owned(),
        ..Product::default()
    }
}

fn names(products: &[Product]) -> Vec<&str> {
    products.iter().map(|p| p.name.as_str()).collect()
}

fn loaded(products: Vec<Product>) -> CatalogState {
    let mut state = CatalogState::default();
    state.finish_load(Ok(products));
    state
}

// =============================================================
// ProductStore
// =============================================================

#[test]
fn store_indexes_by_id_and_keeps_order() {
    let store = ProductStore::new(vec![product(5, "B", "", ""), product(2, "A", "", "")]);
    assert_eq!(names(store.all()), vec!["B", "A"]);
    assert_eq!(store.get(2).map(|p| p.name.as_str()), Some("A"));
    assert_eq!(store.get(9), None);
    assert_eq!(store.len(), 2);
}

#[test]
fn filter_matches_name_case_insensitively() {
    let store = ProductStore::new(vec![product(1, "Alpha", "", ""), product(2, "Beta", "", "")]);
    assert_eq!(names(&store.filter("al")), vec!["Alpha"]);
    assert_eq!(names(&store.filter("AL")), vec!["Alpha"]);
}

#[test]
fn filter_matches_code_and_category() {
    let store = ProductStore::new(vec![
        product(1, "Mythic", "ML-001", "Mobile Game"),
        product(2, "Office", "OF-002", "Windows"),
    ]);
    assert_eq!(names(&store.filter("ml-0")), vec!["Mythic"]);
    assert_eq!(names(&store.filter("windows")), vec!["Office"]);
}

#[test]
fn blank_query_returns_everything() {
    let store = ProductStore::new(vec![product(1, "Alpha", "", ""), product(2, "Beta", "", "")]);
    assert_eq!(names(&store.filter("")), vec!["Alpha", "Beta"]);
    assert_eq!(names(&store.filter("   ")), vec!["Alpha", "Beta"]);
}

// =============================================================
// CatalogState views
// =============================================================

#[test]
fn view_starts_loading() {
    assert_eq!(CatalogState::default().view(), CatalogView::Loading);
}

#[test]
fn failed_load_shows_error_placeholder() {
    let mut state = CatalogState::default();
    state.finish_load(Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(state.load, LoadState::Failed);
    assert_eq!(state.view(), CatalogView::Failed);
}

#[test]
fn empty_result_shows_empty_state() {
    assert_eq!(loaded(Vec::new()).view(), CatalogView::Empty);
}

#[test]
fn query_without_matches_shows_no_matches() {
    let mut state = loaded(vec![product(1, "Alpha", "", "")]);
    state.set_query("zzz");
    assert_eq!(state.view(), CatalogView::NoMatches);
}

#[test]
fn clearing_query_restores_full_set_after_filtering() {
    let mut state = loaded(vec![product(1, "Alpha", "", ""), product(2, "Beta", "", "")]);
    state.set_query("al");
    let CatalogView::Grid(filtered) = state.view() else { panic!("expected grid") };
    assert_eq!(names(&filtered), vec!["Alpha"]);

    state.set_query("");
    let CatalogView::Grid(all) = state.view() else { panic!("expected grid") };
    assert_eq!(names(&all), vec!["Alpha", "Beta"]);
}

// =============================================================
// Detail overlay
// =============================================================

#[test]
fn opening_second_detail_leaves_single_overlay_for_second_product() {
    let mut state = loaded(vec![product(1, "Alpha", "", ""), product(2, "Beta", "", "")]);
    state.open_detail(1);
    state.open_detail(2);
    let open = state.detail.current().expect("overlay present");
    assert_eq!(open.product.name, "Beta");
    assert!(state.detail.is_open());
}

#[test]
fn unknown_id_opens_empty_product() {
    let mut state = loaded(vec![product(1, "Alpha", "", "")]);
    state.open_detail(404);
    assert_eq!(state.detail.current().map(|o| o.product.clone()), Some(Product::default()));
}

#[test]
fn close_is_two_phase() {
    let mut overlay = DetailOverlay::default();
    overlay.open(product(1, "Alpha", "", ""));
    let instance = overlay.begin_close().expect("open overlay");
    assert!(!overlay.is_open());
    assert!(overlay.current().is_some_and(|o| o.closing));

    overlay.finish_close(instance);
    assert!(overlay.current().is_none());
}

#[test]
fn stale_finish_close_does_not_remove_newer_overlay() {
    let mut overlay = DetailOverlay::default();
    overlay.open(product(1, "Alpha", "", ""));
    let stale = overlay.begin_close().expect("open overlay");
    overlay.open(product(2, "Beta", "", ""));

    overlay.finish_close(stale);
    assert!(overlay.is_open());
    assert_eq!(overlay.current().map(|o| o.product.name.as_str()), Some("Beta"));
}

#[test]
fn begin_close_without_overlay_is_none() {
    assert_eq!(DetailOverlay::default().begin_close(), None);
}
