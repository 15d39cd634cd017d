//! Fixed-position stack of transient notifications.

use leptos::prelude::*;

use crate::state::notify::{Notifier, ToastPhase};

#[component]
pub fn ToastHost(notifier: RwSignal<Notifier>) -> impl IntoView {
    view! {
        <div class="toast-host" role="status" aria-live="polite">
            {move || {
                notifier
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let class = toast.class_list();
                        let fading = toast.phase == ToastPhase::Fading;
                        view! {
                            <div
                                class=class
                                class:toast--fading=fading
                                data-toast-id=toast.id
                            >
                                {toast.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
