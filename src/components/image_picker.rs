//! Image slot for the product form: drag-and-drop, file picker, or URL.
//!
//! All three inputs write the form's [`ImageSource`]; the latest one wins.
//! Files are read client-side into `data:` URLs.
//!
//! [`ImageSource`]: crate::state::image_source::ImageSource

use leptos::prelude::*;

use crate::state::dashboard::DashboardState;
use crate::state::image_source::ImageInput;
#[cfg(feature = "csr")]
use crate::state::image_source::ImageSource;
use crate::util::dom;

#[component]
pub fn ImagePicker(state: RwSignal<DashboardState>, url_prompt: String) -> impl IntoView {
    let dragging = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let set_image = move |input: ImageInput, value: String| {
        state.update(|s| {
            s.edit_form(|f| f.image.set(input, value));
        });
    };
    let preview = move || state.with(|s| s.editor.as_ref().map(|f| f.image.preview().to_owned()).unwrap_or_default());

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        #[cfg(feature = "csr")]
        {
            let Some(file) = ev.data_transfer().and_then(|dt| dt.files()).and_then(|files| files.get(0)) else {
                return;
            };
            if !ImageSource::accepts_dropped_type(&file.type_()) {
                log::debug!("ignoring dropped file of type {:?}", file.type_());
                return;
            }
            read_as_data_url(&file, move |url| set_image(ImageInput::Dropped, url));
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                read_as_data_url(&file, move |url| set_image(ImageInput::Picked, url));
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let on_paste_url = move |_| {
        if let Some(url) = dom::prompt(&url_prompt) {
            set_image(ImageInput::Pasted, url);
        }
    };

    view! {
        <div class="image-picker">
            <span class="dialog__label">"이미지"</span>
            <div
                class="image-picker__zone"
                class:is-dragover=move || dragging.get()
                on:dragover=move |ev: leptos::ev::DragEvent| {
                    ev.prevent_default();
                    dragging.set(true);
                }
                on:dragleave=move |_| dragging.set(false)
                on:drop=on_drop
                on:click=move |_| {
                    if let Some(input) = file_input.get() {
                        input.click();
                    }
                }
            >
                <Show
                    when=move || !preview().is_empty()
                    fallback=|| view! { <p class="image-picker__hint">"이미지를 끌어다 놓거나 클릭하여 선택하세요"</p> }
                >
                    <img class="image-picker__preview" src=preview alt="미리보기" />
                </Show>
            </div>
            <input node_ref=file_input class="image-picker__file" type="file" accept="image/*" style="display: none" on:change=on_file_change />
            <button class="btn btn--small" type="button" on:click=on_paste_url>
                "URL 입력"
            </button>
        </div>
    }
}

/// Read `file` into a `data:` URL and hand it to `on_done`.
#[cfg(feature = "csr")]
fn read_as_data_url(file: &web_sys::File, on_done: impl FnOnce(String) + 'static) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let reader = match web_sys::FileReader::new() {
        Ok(reader) => reader,
        Err(e) => {
            log::warn!("FileReader unavailable: {e:?}");
            return;
        }
    };
    let loaded = reader.clone();
    let onload = Closure::once_into_js(move || {
        if let Some(url) = loaded.result().ok().and_then(|v| v.as_string()) {
            on_done(url);
        }
    });
    reader.set_onload(Some(onload.unchecked_ref()));
    if let Err(e) = reader.read_as_data_url(file) {
        log::warn!("failed to read image file: {e:?}");
    }
}
