//! Catalog grid card.
//!
//! Cards only carry the product id; the page resolves the full snapshot from
//! its store when the detail button is clicked.

use leptos::prelude::*;

use crate::components::price_tag::PriceTag;
use crate::net::types::Product;
use crate::util::sanitize::safe_image_url;

const EXCERPT_CHARS: usize = 100;

#[component]
pub fn ProductCard(product: Product, on_open: Callback<i64>) -> impl IntoView {
    let id = product.id;
    let image = safe_image_url(&product.image).to_owned();
    let alt = product.name.clone();
    let excerpt = product.excerpt(EXCERPT_CHARS);
    let padded_id = product.padded_id();

    view! {
        <article class="product-card" data-product-id=id>
            <div class="product-card__media">
                {(!image.is_empty())
                    .then(|| view! { <img class="product-card__image" src=image alt=alt loading="lazy" /> })}
                <span class="product-card__id" aria-hidden="true">{padded_id}</span>
            </div>
            <div class="product-card__body">
                <span class="product-card__code">{product.code}</span>
                <h3 class="product-card__name">{product.name}</h3>
                <span class="product-card__category">{product.category}</span>
                <p class="product-card__description">{excerpt}</p>
                <ul class="product-card__specs">
                    {product
                        .specs
                        .into_iter()
                        .map(|spec| view! { <li class="badge">{spec}</li> })
                        .collect_view()}
                </ul>
                <div class="product-card__footer">
                    <PriceTag price=product.price />
                    <button class="btn btn--primary product-card__more" on:click=move |_| on_open.run(id)>
                        "자세히 보기"
                    </button>
                </div>
            </div>
        </article>
    }
}
