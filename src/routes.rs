//! Route table for the page-entry dispatcher.
//!
//! Every path the backend serves maps to exactly one page. The root component
//! resolves the current path here on each navigation and mounts that page.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

pub const CATALOG_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/admin";
pub const DASHBOARD_PATH: &str = "/admin/dashboard";
pub const NOT_FOUND_PATH: &str = "/404";

const ADMIN_PREFIX: &str = "/admin";

/// Page selected for the current location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Catalog,
    AdminLogin,
    AdminDashboard,
    NotFound,
}

pub const ROUTES: &[(&str, AppRoute)] = &[
    ("", AppRoute::Catalog),
    (CATALOG_PATH, AppRoute::Catalog),
    (LOGIN_PATH, AppRoute::AdminLogin),
    (DASHBOARD_PATH, AppRoute::AdminDashboard),
    (NOT_FOUND_PATH, AppRoute::NotFound),
];

/// Resolve a pathname; unknown paths resolve to [`AppRoute::NotFound`].
pub fn resolve(path: &str) -> AppRoute {
    let normalized = if path.len() > 1 { path.strip_suffix('/').unwrap_or(path) } else { path };
    let route = ROUTES
        .iter()
        .find(|(candidate, _)| *candidate == normalized)
        .map_or(AppRoute::NotFound, |(_, route)| *route);
    log::debug!("route {path:?} -> {route:?}");
    route
}

/// Admin-scoped routes force a login redirect when the session expires.
pub fn is_admin_scoped(path: &str) -> bool {
    path.starts_with(ADMIN_PREFIX)
}
