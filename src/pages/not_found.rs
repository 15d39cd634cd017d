use leptos::prelude::*;

use crate::routes::CATALOG_PATH;

/// Rendered for `/404` and any path outside the route table.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"페이지를 찾을 수 없습니다."</p>
            <a class="btn btn--primary" href=CATALOG_PATH>
                "홈으로"
            </a>
        </div>
    }
}
