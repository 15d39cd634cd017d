//! Create/edit overlay for the admin dashboard.
//!
//! DESIGN
//! ======
//! Renders whatever [`ProductForm`] the dashboard holds; every input writes
//! back through [`DashboardState::edit_form`]. Validation and the request
//! itself stay with the page via `on_submit`.

use leptos::prelude::*;

use crate::components::image_picker::ImagePicker;
use crate::components::tag_list_editor::TagListEditor;
use crate::config::FieldLimits;
use crate::state::dashboard::DashboardState;
use crate::state::product_form::{ProductForm, TagField, TextField};

#[component]
pub fn ProductFormDialog(
    state: RwSignal<DashboardState>,
    limits: FieldLimits,
    image_url_prompt: String,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let form_value = move |read: fn(&ProductForm) -> String| {
        state.with(|s| s.editor.as_ref().map(read).unwrap_or_default())
    };
    let title = move || form_value(|f| f.title().to_owned());
    let submit_label = move || form_value(|f| f.submit_label().to_owned());
    let price = move || form_value(|f| f.price().to_owned());
    let submitting = move || state.with(|s| s.submitting);

    let text_inputs = TextField::ALL
        .into_iter()
        .map(|field| {
            let value = move || state.with(|s| s.editor.as_ref().map(|f| f.text(field).to_owned()).unwrap_or_default());
            let on_input = move |ev: leptos::ev::Event| {
                let next = event_target_value(&ev);
                state.update(|s| {
                    s.edit_form(|f| f.set_text(field, next));
                });
            };
            let max_len = field.max_len(&limits);
            let input = if field.is_multiline() {
                view! {
                    <textarea
                        class="dialog__input dialog__textarea"
                        name=field.key()
                        maxlength=max_len
                        prop:value=value
                        on:input=on_input
                    ></textarea>
                }
                .into_any()
            } else {
                view! {
                    <input
                        class="dialog__input"
                        type="text"
                        name=field.key()
                        maxlength=max_len
                        prop:value=value
                        on:input=on_input
                    />
                }
                .into_any()
            };
            view! {
                <label class="dialog__label">
                    {field.label()}
                    {input}
                </label>
            }
        })
        .collect_view();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog product-form" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <form
                    class="product-form__fields"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_submit.run(());
                    }
                >
                    {text_inputs}
                    <label class="dialog__label">
                        "가격"
                        <input
                            class="dialog__input"
                            type="text"
                            name="price"
                            inputmode="numeric"
                            placeholder="0 = 무료"
                            prop:value=price
                            on:input=move |ev| {
                                let raw = event_target_value(&ev);
                                state.update(|s| {
                                    s.edit_form(|f| f.set_price_input(&raw));
                                });
                            }
                        />
                    </label>
                    <TagListEditor state=state field=TagField::Specs max_len=limits.tag_item />
                    <TagListEditor state=state field=TagField::Features max_len=limits.tag_item />
                    <ImagePicker state=state url_prompt=image_url_prompt />
                    <div class="dialog__actions">
                        <button class="btn" type="button" data-close-dialog="" on:click=move |_| on_close.run(())>
                            "취소"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=submitting>
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
