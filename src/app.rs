//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::Router;
use leptos_router::hooks::use_location;

use crate::components::sidebar::Sidebar;
use crate::components::toast_host::ToastHost;
use crate::config::SiteConfig;
use crate::net::api::ApiClient;
use crate::net::session::Session;
use crate::pages::{
    catalog::CatalogPage, dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage,
};
use crate::routes::{self, AppRoute};
use crate::state::notify::{Notifier, Toasts};

/// Root application component.
///
/// Loads configuration once, provides the shared session-backed API client
/// and toast handle, and dispatches the current path through the route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    let notifier = RwSignal::new(Notifier::default());
    let toasts = Toasts::new(notifier, config.timings);
    let session = Session::browser(&config.session_storage_key);
    let api = ApiClient::new(session, &config).with_toasts(toasts);

    provide_context(config);
    provide_context(toasts);
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/showcase.css"/>
        <Title text="제품 소개"/>

        <Router>
            <Sidebar/>
            <main class="app-main">
                <RouteOutlet/>
            </main>
            <ToastHost notifier=notifier/>
        </Router>
    }
}

/// Page for the current location; re-dispatches on every navigation.
#[component]
fn RouteOutlet() -> impl IntoView {
    let location = use_location();
    move || match routes::resolve(&location.pathname.get()) {
        AppRoute::Catalog => view! { <CatalogPage/> }.into_any(),
        AppRoute::AdminLogin => view! { <LoginPage/> }.into_any(),
        AppRoute::AdminDashboard => view! { <DashboardPage/> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage/> }.into_any(),
    }
}
