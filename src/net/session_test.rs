use super::*;

fn session_with(token: &str) -> (Session, Arc<MemoryTokenStore>) {
    let store = Arc::new(MemoryTokenStore::with_token(token));
    (Session::new(store.clone()), store)
}

// =============================================================
// Token lifecycle
// =============================================================

#[test]
fn in_memory_session_starts_signed_out() {
    let session = Session::in_memory();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), None);
}

#[test]
fn sign_in_then_sign_out_round_trips() {
    let session = Session::in_memory();
    session.sign_in("tok-1");
    assert_eq!(session.token(), Some("tok-1".to_owned()));
    session.sign_out();
    assert!(!session.is_authenticated());
}

#[test]
fn empty_token_counts_as_signed_out() {
    let (session, _) = session_with("");
    assert!(!session.is_authenticated());
}

#[test]
fn clones_share_one_store() {
    let session = Session::in_memory();
    let other = session.clone();
    session.sign_in("shared");
    assert_eq!(other.token(), Some("shared".to_owned()));
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn expire_on_admin_route_clears_token_and_redirects_to_login() {
    let (session, store) = session_with("tok");
    assert_eq!(session.expire("/admin/dashboard"), ExpiryAction::RedirectTo("/admin"));
    assert_eq!(store.get(), None);
}

#[test]
fn expire_on_public_route_clears_token_without_redirect() {
    let (session, store) = session_with("tok");
    assert_eq!(session.expire("/"), ExpiryAction::Stay);
    assert_eq!(store.get(), None);
}

#[test]
fn debug_output_never_contains_token() {
    let (session, _) = session_with("secret-token");
    let rendered = format!("{session:?}");
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("authenticated: true"));
}

#[cfg(not(feature = "csr"))]
#[test]
fn browser_store_is_empty_outside_browser() {
    let session = Session::browser("adminSession");
    session.sign_in("tok");
    assert!(!session.is_authenticated());
}
