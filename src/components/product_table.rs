use leptos::prelude::*;

use crate::net::types::Product;

/// Admin product list. Row actions carry only the product id.
#[component]
pub fn ProductTable(rows: Vec<Product>, on_edit: Callback<i64>, on_delete: Callback<i64>) -> impl IntoView {
    view! {
        <table class="product-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"제품명"</th>
                    <th>"카테고리"</th>
                    <th>"제품 코드"</th>
                    <th>"관리"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|product| {
                        let id = product.id;
                        view! {
                            <tr data-product-id=id>
                                <td>{id}</td>
                                <td>{product.name}</td>
                                <td>{product.category}</td>
                                <td>{product.code}</td>
                                <td class="product-table__actions">
                                    <button class="btn btn--small" on:click=move |_| on_edit.run(id)>
                                        "수정"
                                    </button>
                                    <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(id)>
                                        "삭제"
                                    </button>
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
