use std::sync::Arc;

use serde_json::json;

use super::*;
use crate::net::session::{MemoryTokenStore, TokenStore};

fn client_with_token(token: Option<&str>) -> (ApiClient, Arc<MemoryTokenStore>) {
    let store = Arc::new(token.map(MemoryTokenStore::with_token).unwrap_or_default());
    let client = ApiClient::new(Session::new(store.clone()), &SiteConfig::default());
    (client, store)
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn product_endpoint_formats_expected_path() {
    assert_eq!(product_endpoint(42), "/api/products/42");
}

#[test]
fn endpoint_constants_match_backend_routes() {
    assert_eq!(PRODUCTS_ENDPOINT, "/api/products");
    assert_eq!(LOGIN_ENDPOINT, "/api/admin/login");
}

// =============================================================
// interpret_response
// =============================================================

#[test]
fn success_passes_body_through() {
    let body = json!([{ "id": 1 }]);
    assert_eq!(
        interpret_response(200, body.clone(), false, "Request failed"),
        ResponseOutcome::Success(body)
    );
}

#[test]
fn unauthorized_with_token_is_expiry() {
    assert_eq!(
        interpret_response(401, json!({ "error": "Unauthorized" }), true, "Request failed"),
        ResponseOutcome::Expired
    );
}

#[test]
fn unauthorized_without_token_is_ordinary_failure() {
    assert_eq!(
        interpret_response(401, json!({ "error": "Invalid credentials" }), false, "Request failed"),
        ResponseOutcome::Failed { status: 401, message: "Invalid credentials".to_owned() }
    );
}

#[test]
fn failure_without_error_field_uses_fallback() {
    assert_eq!(
        interpret_response(500, json!({}), true, "Request failed"),
        ResponseOutcome::Failed { status: 500, message: "Request failed".to_owned() }
    );
    assert_eq!(
        interpret_response(404, json!({ "error": "" }), false, "fallback"),
        ResponseOutcome::Failed { status: 404, message: "fallback".to_owned() }
    );
}

// =============================================================
// ApiClient::settle
// =============================================================

#[test]
fn settle_on_admin_route_401_clears_stored_token() {
    let (client, store) = client_with_token(Some("tok"));
    let result = client.settle(401, json!({ "error": "Unauthorized" }), true, "/admin/dashboard");
    assert_eq!(
        result,
        Err(ApiError::SessionExpired("로그인이 만료되었습니다. 다시 로그인해 주세요.".to_owned()))
    );
    assert_eq!(store.get(), None);
    assert!(!client.session().is_authenticated());
}

#[test]
fn settle_on_public_route_401_still_clears_token_and_fails() {
    let (client, store) = client_with_token(Some("tok"));
    let result = client.settle(401, json!({}), true, "/");
    assert!(matches!(result, Err(ApiError::SessionExpired(_))));
    assert_eq!(store.get(), None);
}

#[test]
fn settle_never_clears_token_on_other_failures() {
    let (client, store) = client_with_token(Some("tok"));
    let result = client.settle(500, json!({ "error": "Failed to create product" }), true, "/admin/dashboard");
    assert_eq!(
        result,
        Err(ApiError::Backend { status: 500, message: "Failed to create product".to_owned() })
    );
    assert_eq!(store.get(), Some("tok".to_owned()));
}

#[test]
fn settle_401_without_token_keeps_storage_untouched() {
    let (client, store) = client_with_token(None);
    let result = client.settle(401, json!({ "error": "Invalid credentials" }), false, "/admin");
    assert_eq!(
        result,
        Err(ApiError::Backend { status: 401, message: "Invalid credentials".to_owned() })
    );
    assert_eq!(store.get(), None);
}

#[test]
fn settle_success_returns_payload() {
    let (client, _) = client_with_token(Some("tok"));
    assert_eq!(client.settle(200, json!({ "success": true }), true, "/admin/dashboard"), Ok(json!({ "success": true })));
}

// =============================================================
// Decoding helpers
// =============================================================

#[test]
fn decode_product_list() {
    let products: Vec<Product> = decode(json!([{ "id": 1, "name": "A" }])).unwrap();
    assert_eq!(products[0].name, "A");
}

#[test]
fn decode_reports_shape_mismatch() {
    let result: Result<Vec<Product>, ApiError> = decode(json!({ "error": "nope" }));
    assert!(matches!(result, Err(ApiError::Decode(_))));
}
