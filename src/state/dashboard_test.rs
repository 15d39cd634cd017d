use super::*;
use crate::net::session::MemoryTokenStore;
use crate::state::product_form::TextField;

fn product(id: i64, name: &str) -> Product {
    Product { id, name: name.to_owned(), ..Product::default() }
}

fn loaded(products: Vec<Product>) -> DashboardState {
    let mut state = DashboardState::default();
    let ticket = state.begin_reload();
    state.finish_reload(ticket, Ok(products));
    state
}

// =============================================================
// Guard
// =============================================================

#[test]
fn guard_redirects_without_token() {
    let session = Session::in_memory();
    assert_eq!(dashboard_guard(&session), DashboardGuard::Redirect("/admin"));
}

#[test]
fn guard_allows_with_token() {
    let session = Session::new(std::sync::Arc::new(MemoryTokenStore::with_token("tok")));
    assert_eq!(dashboard_guard(&session), DashboardGuard::Allow);
}

// =============================================================
// Reload sequencing
// =============================================================

#[test]
fn initial_view_is_loading() {
    assert_eq!(DashboardState::default().list_view(), ListView::Loading);
}

#[test]
fn empty_result_renders_placeholder() {
    assert_eq!(loaded(Vec::new()).list_view(), ListView::Empty);
}

#[test]
fn rows_follow_load_order() {
    let state = loaded(vec![product(2, "b"), product(1, "a")]);
    let ListView::Rows(rows) = state.list_view() else {
        panic!("expected rows");
    };
    assert_eq!(rows.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn stale_reload_is_discarded() {
    let mut state = DashboardState::default();
    let older = state.begin_reload();
    let newer = state.begin_reload();

    assert_eq!(state.finish_reload(newer, Ok(vec![product(1, "fresh")])), ReloadOutcome::Applied);
    assert_eq!(state.finish_reload(older, Ok(vec![product(9, "stale")])), ReloadOutcome::Stale);

    assert!(state.store.get(1).is_some());
    assert!(state.store.get(9).is_none());
}

#[test]
fn failed_first_load_shows_failure() {
    let mut state = DashboardState::default();
    let ticket = state.begin_reload();
    let outcome = state.finish_reload(ticket, Err(ApiError::Transport("offline".to_owned())));
    assert_eq!(outcome, ReloadOutcome::Failed);
    assert_eq!(state.list_view(), ListView::Failed);
}

#[test]
fn failed_reload_keeps_existing_rows() {
    let mut state = loaded(vec![product(1, "a")]);
    let ticket = state.begin_reload();
    state.finish_reload(ticket, Err(ApiError::Transport("offline".to_owned())));
    assert!(matches!(state.list_view(), ListView::Rows(rows) if rows.len() == 1));
}

// =============================================================
// Editor
// =============================================================

#[test]
fn open_edit_uses_stored_snapshot() {
    let mut state = loaded(vec![product(3, "Stored")]);
    state.open_edit(3);
    let form = state.editor.as_ref().expect("editor open");
    assert_eq!(form.mode, FormMode::Edit(3));
    assert_eq!(form.name, "Stored");
}

#[test]
fn open_edit_unknown_id_opens_empty_product() {
    let mut state = loaded(Vec::new());
    state.open_edit(42);
    let form = state.editor.as_ref().expect("editor open");
    assert_eq!(form.mode, FormMode::Edit(42));
    assert!(form.name.is_empty());
}

#[test]
fn open_create_then_close() {
    let mut state = DashboardState::default();
    state.open_create();
    assert!(state.is_editing());
    state.close_editor();
    assert!(!state.is_editing());
}

#[test]
fn edit_form_requires_open_editor() {
    let mut state = DashboardState::default();
    assert_eq!(state.edit_form(|f| f.set_price_input("12")), None);
    state.open_create();
    assert_eq!(state.edit_form(|f| f.set_price_input("1x2")), Some(()));
    assert_eq!(state.editor.as_ref().map(ProductForm::price), Some("12"));
}

#[test]
fn invalid_submit_does_not_mark_in_flight() {
    let mut state = DashboardState::default();
    state.open_create();
    assert_eq!(state.prepare_submit(), Err(FormError::MissingRequired));
    assert!(!state.submitting);
}

#[test]
fn prepare_submit_without_editor_is_noop() {
    let mut state = DashboardState::default();
    assert_eq!(state.prepare_submit(), Ok(None));
}

#[test]
fn successful_submit_closes_editor() {
    let mut state = DashboardState::default();
    state.open_create();
    let form = state.editor.as_mut().expect("editor open");
    form.set_text(TextField::Name, "n".to_owned());
    form.set_text(TextField::Category, "c".to_owned());
    form.set_text(TextField::Description, "d".to_owned());

    let pending = state.prepare_submit().unwrap().expect("pending submit");
    assert_eq!(pending.mode, FormMode::Create);
    assert_eq!(pending.payload.price, "0");
    assert!(state.submitting);

    state.finish_submit(true);
    assert!(!state.submitting);
    assert!(!state.is_editing());
}

#[test]
fn failed_submit_keeps_editor_open() {
    let mut state = loaded(vec![product(1, "a")]);
    state.open_edit(1);
    state.submitting = true;
    state.finish_submit(false);
    assert!(!state.submitting);
    assert!(state.is_editing());
}
