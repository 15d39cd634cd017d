//! Public catalog page: product grid, search, and detail overlay.
//!
//! SYSTEM CONTEXT
//! ==============
//! Products are fetched once on entry. Search filters the loaded snapshot on
//! every keystroke and on submit; it never goes back to the network.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::product_dialog::ProductDialog;
use crate::config::SiteConfig;
use crate::net::api::ApiClient;
use crate::state::catalog::{CatalogState, CatalogView};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let api = expect_context::<ApiClient>();
    let state = RwSignal::new(CatalogState::default());
    let search = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = api.fetch_products().await;
        state.update(|s| s.finish_load(result));
    });
    #[cfg(not(feature = "csr"))]
    let _ = api;

    let apply_search = move || state.update(|s| s.set_query(search.get_untracked()));

    let on_open = Callback::new(move |id: i64| {
        state.update(|s| {
            s.open_detail(id);
        });
    });

    let close_ms = config.timings.dialog_close_ms;
    let on_close = Callback::new(move |()| {
        let mut closing = None;
        state.update(|s| closing = s.detail.begin_close());
        let Some(instance) = closing else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(close_ms).await;
            state.update(|s| s.detail.finish_close(instance));
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = close_ms;
            state.update(|s| s.detail.finish_close(instance));
        }
    });

    let messages = config.messages;
    let grid = move || match state.with(CatalogState::view) {
        CatalogView::Loading => view! { <p class="catalog__placeholder">"로딩 중..."</p> }.into_any(),
        CatalogView::Failed => {
            view! { <p class="catalog__placeholder catalog__placeholder--error">{messages.catalog_load_failed.clone()}</p> }
                .into_any()
        }
        CatalogView::Empty => view! { <p class="catalog__placeholder">{messages.catalog_empty.clone()}</p> }.into_any(),
        CatalogView::NoMatches => view! { <p class="catalog__placeholder">{messages.search_empty.clone()}</p> }.into_any(),
        CatalogView::Grid(products) => view! {
            <div class="catalog__grid">
                {products
                    .into_iter()
                    .map(|product| view! { <ProductCard product=product on_open=on_open /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header">
                <h1>"제품 소개"</h1>
                <form
                    class="catalog-search"
                    role="search"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        apply_search();
                    }
                >
                    <input
                        class="catalog-search__input"
                        type="search"
                        placeholder="제품명, 코드, 카테고리 검색"
                        prop:value=move || search.get()
                        on:input=move |ev| {
                            search.set(event_target_value(&ev));
                            apply_search();
                        }
                    />
                    <button class="btn catalog-search__button" type="submit">
                        "검색"
                    </button>
                </form>
            </header>
            {grid}
            {move || {
                state
                    .with(|s| s.detail.current().cloned())
                    .map(|detail| view! { <ProductDialog detail=detail on_close=on_close /> })
            }}
        </div>
    }
}
