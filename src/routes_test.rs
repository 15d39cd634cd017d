use super::*;

#[test]
fn resolve_known_paths() {
    assert_eq!(resolve("/"), AppRoute::Catalog);
    assert_eq!(resolve(""), AppRoute::Catalog);
    assert_eq!(resolve("/admin"), AppRoute::AdminLogin);
    assert_eq!(resolve("/admin/dashboard"), AppRoute::AdminDashboard);
    assert_eq!(resolve("/404"), AppRoute::NotFound);
}

#[test]
fn resolve_ignores_single_trailing_slash() {
    assert_eq!(resolve("/admin/"), AppRoute::AdminLogin);
    assert_eq!(resolve("/admin/dashboard/"), AppRoute::AdminDashboard);
}

#[test]
fn resolve_unknown_paths_to_not_found() {
    assert_eq!(resolve("/products/7"), AppRoute::NotFound);
    assert_eq!(resolve("/admin/dashboard/extra"), AppRoute::NotFound);
    assert_eq!(resolve("/ADMIN"), AppRoute::NotFound);
}

#[test]
fn admin_scope_is_prefix_based() {
    assert!(is_admin_scoped("/admin"));
    assert!(is_admin_scoped("/admin/dashboard"));
    assert!(!is_admin_scoped("/"));
    assert!(!is_admin_scoped("/404"));
}
