//! Product detail overlay for the public catalog.

use leptos::prelude::*;

use crate::components::price_tag::PriceTag;
use crate::state::catalog::OpenDetail;
use crate::util::sanitize::{escape_multiline, safe_image_url, safe_link_url};

/// Full product view. Backdrop and every close control call `on_close`.
#[component]
pub fn ProductDialog(detail: OpenDetail, on_close: Callback<()>) -> impl IntoView {
    let OpenDetail { product, closing, .. } = detail;
    let image = safe_image_url(&product.image).to_owned();
    let download = safe_link_url(&product.download_url);
    // Escaped before the newline-to-<br> step, so safe as inner HTML.
    let body_html = escape_multiline(product.display_description());
    let alt = product.name.clone();
    let features = product.features;

    view! {
        <div
            class="dialog-backdrop product-dialog"
            class:is-closing=closing
            role="dialog"
            aria-modal="true"
            on:click=move |_| on_close.run(())
        >
            <div class="dialog product-dialog__panel" on:click=move |ev| ev.stop_propagation()>
                <button
                    class="product-dialog__close"
                    data-close-dialog=""
                    aria-label="닫기"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
                {(!image.is_empty())
                    .then(|| view! { <img class="product-dialog__image" src=image alt=alt /> })}
                <div class="product-dialog__header">
                    <span class="product-dialog__category">{product.category}</span>
                    <h2 class="product-dialog__name">{product.name}</h2>
                    <span class="product-dialog__code">{product.code}</span>
                </div>
                <div class="product-dialog__description" inner_html=body_html></div>
                {(!features.is_empty())
                    .then(|| {
                        view! {
                            <section class="product-dialog__section">
                                <h3>"주요 기능"</h3>
                                <ul class="product-dialog__features">
                                    {features.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                                </ul>
                            </section>
                        }
                    })}
                <section class="product-dialog__section">
                    <h3>"사양"</h3>
                    <ul class="product-dialog__specs">
                        {product.specs.into_iter().map(|s| view! { <li class="badge">{s}</li> }).collect_view()}
                    </ul>
                </section>
                <div class="product-dialog__footer">
                    <PriceTag price=product.price />
                    {(!download.is_empty())
                        .then(|| {
                            view! {
                                <a
                                    class="btn btn--primary product-dialog__download"
                                    href=download
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "다운로드"
                                </a>
                            }
                        })}
                    <button class="btn" data-close-dialog="" on:click=move |_| on_close.run(())>
                        "닫기"
                    </button>
                </div>
            </div>
        </div>
    }
}
