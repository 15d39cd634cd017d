//! Route-independent navigation drawer.
//!
//! The toggle, the backdrop, and the drawer share one [`SidebarState`]; every
//! transition is projected onto the document before focus is moved.

use leptos::prelude::*;

use crate::routes::{CATALOG_PATH, LOGIN_PATH};
use crate::state::sidebar::{
    BODY_OPEN_CLASS, FocusReturn, SIDEBAR_ID, SidebarState, TOGGLE_ID, apply_to_document,
};
use crate::util::dom;

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = RwSignal::new(SidebarState::default());

    state.update(|s| s.sync_from_marker(dom::body_has_class(BODY_OPEN_CLASS)));
    Effect::new(move || apply_to_document(state.get_untracked(), FocusReturn::Stay));

    let transition = move |step: fn(&mut SidebarState) -> FocusReturn| {
        let mut focus = FocusReturn::Stay;
        state.update(|s| focus = step(s));
        apply_to_document(state.get_untracked(), focus);
    };

    view! {
        <button
            id=TOGGLE_ID
            class="sidebar-toggle"
            aria-controls=SIDEBAR_ID
            aria-expanded=move || state.get().is_open().to_string()
            aria-label="메뉴"
            on:click=move |_| transition(SidebarState::toggle)
        >
            "☰"
        </button>
        <div class="sidebar-backdrop" on:click=move |_| transition(SidebarState::close)></div>
        <aside id=SIDEBAR_ID class="sidebar" aria-hidden="true">
            <button class="sidebar__close" aria-label="닫기" on:click=move |_| transition(SidebarState::close)>
                "✕"
            </button>
            <nav class="sidebar__nav">
                <a class="sidebar__link" href=CATALOG_PATH>
                    "제품 목록"
                </a>
                <a class="sidebar__link" href=LOGIN_PATH>
                    "관리자"
                </a>
            </nav>
        </aside>
    }
}
