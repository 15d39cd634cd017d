//! Admin dashboard: product table plus the create/edit overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires a stored session; without one the page redirects to the login
//! route before any state exists. Every successful create, update, or delete
//! is followed by a full list reload.

use leptos::prelude::*;

use crate::components::product_form_dialog::ProductFormDialog;
use crate::components::product_table::ProductTable;
use crate::config::{Messages, SiteConfig};
use crate::net::api::ApiClient;
use crate::routes::LOGIN_PATH;
use crate::state::dashboard::{DashboardGuard, DashboardState, ListView, PendingSubmit, dashboard_guard};
use crate::state::notify::Toasts;
use crate::util::dom;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let config = expect_context::<SiteConfig>();
    let toasts = expect_context::<Toasts>();

    if let DashboardGuard::Redirect(target) = dashboard_guard(api.session()) {
        dom::navigate_to(target);
        return view! {
            <div class="dashboard-page">
                <p>"로그인 페이지로 이동 중..."</p>
            </div>
        }
        .into_any();
    }

    let state = RwSignal::new(DashboardState::default());
    let messages = config.messages.clone();
    reload(&api, state, toasts, messages.list_load_failed.clone());

    let on_create = move |_| {
        state.update(DashboardState::open_create);
        dom::scroll_to_top();
    };
    let on_edit = Callback::new(move |id: i64| {
        state.update(|s| s.open_edit(id));
        dom::scroll_to_top();
    });
    let on_close = Callback::new(move |()| state.update(DashboardState::close_editor));

    let on_delete = Callback::new({
        let api = api.clone();
        let messages = messages.clone();
        move |id: i64| {
            if !dom::confirm(&messages.delete_confirm) {
                return;
            }
            delete(&api, state, toasts, &messages, id);
        }
    });

    let on_submit = Callback::new({
        let api = api.clone();
        let messages = messages.clone();
        move |()| {
            let mut prepared = Ok(None);
            state.update(|s| prepared = s.prepare_submit());
            match prepared {
                Ok(Some(pending)) => submit(&api, state, toasts, &messages, pending),
                Ok(None) => {}
                Err(e) => {
                    log::debug!("submit blocked: {e}");
                    toasts.error(messages.required_fields.clone());
                }
            }
        }
    });

    let on_logout = {
        let api = api.clone();
        move |_| {
            api.session().sign_out();
            dom::navigate_to(LOGIN_PATH);
        }
    };

    let list = {
        let messages = messages.clone();
        move || match state.with(DashboardState::list_view) {
            ListView::Loading => view! { <p class="dashboard-page__placeholder">"로딩 중..."</p> }.into_any(),
            ListView::Failed => {
                view! { <p class="dashboard-page__placeholder">{messages.list_load_failed.clone()}</p> }.into_any()
            }
            ListView::Empty => {
                view! { <p class="dashboard-page__placeholder">{messages.dashboard_empty.clone()}</p> }.into_any()
            }
            ListView::Rows(rows) => view! { <ProductTable rows=rows on_edit=on_edit on_delete=on_delete /> }.into_any(),
        }
    };

    let limits = config.limits;
    let image_url_prompt = messages.image_url_prompt;

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"제품 관리"</span>
                <span class="toolbar__spacer"></span>
                <button class="btn btn--primary" on:click=on_create>
                    "+ 제품 추가"
                </button>
                <button class="btn toolbar__logout" on:click=on_logout>
                    "로그아웃"
                </button>
            </header>
            <section class="dashboard-page__list">{list}</section>
            <Show when=move || state.with(DashboardState::is_editing)>
                <ProductFormDialog
                    state=state
                    limits=limits
                    image_url_prompt=image_url_prompt.clone()
                    on_submit=on_submit
                    on_close=on_close
                />
            </Show>
        </div>
    }
    .into_any()
}

/// Start a ticketed list reload; only the newest ticket's result lands.
fn reload(api: &ApiClient, state: RwSignal<DashboardState>, toasts: Toasts, failure: String) {
    let mut ticket = 0;
    state.update(|s| ticket = s.begin_reload());

    #[cfg(feature = "csr")]
    {
        use crate::state::dashboard::ReloadOutcome;

        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.fetch_products().await;
            let expired = result.as_ref().is_err_and(crate::error::ApiError::is_session_expired);
            let mut outcome = ReloadOutcome::Stale;
            state.update(|s| outcome = s.finish_reload(ticket, result));
            if outcome == ReloadOutcome::Failed && !expired {
                toasts.error(failure);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api, toasts, failure, ticket);
    }
}

fn delete(
    api: &ApiClient,
    state: RwSignal<DashboardState>,
    toasts: Toasts,
    messages: &Messages,
    id: i64,
) {
    #[cfg(feature = "csr")]
    {
        let api = api.clone();
        let messages = messages.clone();
        leptos::task::spawn_local(async move {
            match api.delete_product(id).await {
                Ok(()) => {
                    log::info!("deleted product {id}");
                    toasts.success(messages.delete_success.clone());
                    reload(&api, state, toasts, messages.list_load_failed);
                }
                Err(e) if e.is_session_expired() => {}
                Err(e) => {
                    log::warn!("delete of product {id} failed: {e}");
                    toasts.error(messages.delete_failed);
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api, state, toasts, messages, id);
    }
}

fn submit(
    api: &ApiClient,
    state: RwSignal<DashboardState>,
    toasts: Toasts,
    messages: &Messages,
    pending: PendingSubmit,
) {
    #[cfg(feature = "csr")]
    {
        use crate::state::product_form::FormMode;

        let api = api.clone();
        let messages = messages.clone();
        leptos::task::spawn_local(async move {
            let result = match pending.mode {
                FormMode::Create => api.create_product(&pending.payload).await,
                FormMode::Edit(id) => api.update_product(id, &pending.payload).await,
            };
            match result {
                Ok(_) => {
                    log::info!("saved product ({:?})", pending.mode);
                    state.update(|s| s.finish_submit(true));
                    toasts.success(pending.mode.success_message(&messages).to_owned());
                    reload(&api, state, toasts, messages.list_load_failed);
                }
                Err(e) => {
                    state.update(|s| s.finish_submit(false));
                    if !e.is_session_expired() {
                        toasts.error(e.user_message(&messages.submit_failed));
                    }
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (api, toasts, messages, pending);
        state.update(|s| s.finish_submit(false));
    }
}
