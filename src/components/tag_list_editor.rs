//! Chip editor for one of the form's tag lists.
//!
//! The chips are a projection of the form's [`TagList`]; nothing is read back
//! from the DOM.
//!
//! [`TagList`]: crate::state::tag_list::TagList

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::state::product_form::TagField;
use crate::state::tag_list::Tag;

#[component]
pub fn TagListEditor(state: RwSignal<DashboardState>, field: TagField, max_len: u32) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let add = Callback::new(move |()| {
        let value = draft.get_untracked();
        let mut added = false;
        state.update(|s| added = s.edit_form(|f| f.tags_mut(field).add(&value)).unwrap_or(false));
        if added {
            draft.set(String::new());
        }
    });
    let remove = move |key: u64| {
        state.update(|s| {
            s.edit_form(|f| f.tags_mut(field).remove(key));
        });
    };
    let chips = move || {
        state.with(|s| s.editor.as_ref().map(|f| f.tags(field).tags().to_vec()).unwrap_or_default())
    };

    view! {
        <div class="tag-editor">
            <span class="dialog__label">{field.label()}</span>
            <div class="tag-editor__input-row">
                <input
                    class="dialog__input"
                    type="text"
                    maxlength=max_len
                    placeholder=field.placeholder()
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            add.run(());
                        }
                    }
                />
                <button class="btn btn--small" type="button" on:click=move |_| add.run(())>
                    "추가"
                </button>
            </div>
            <ul class="tag-editor__chips">
                {move || {
                    chips()
                        .into_iter()
                        .map(|Tag { key, text }| {
                            view! {
                                <li class="chip">
                                    <span class="chip__text">{text}</span>
                                    <button
                                        class="chip__remove"
                                        type="button"
                                        aria-label="삭제"
                                        on:click=move |_| remove(key)
                                    >
                                        "✕"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}
