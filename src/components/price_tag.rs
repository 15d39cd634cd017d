#[cfg(test)]
#[path = "price_tag_test.rs"]
mod price_tag_test;

use leptos::prelude::*;
use serde_json::Value;

use crate::util::price::format_price_display;

/// Free/paid price label for a raw stored price.
#[component]
pub fn PriceTag(price: Value) -> impl IntoView {
    let display = format_price_display(&price);
    let class = display.css_class();
    view! { <span class=class>{display.text}</span> }
}
