//! Browser DOM helpers for effects that live outside the component tree.
//!
//! The body marker class, `aria-hidden` flags, focus moves, native
//! confirm/prompt dialogs, and full-page navigation all touch `document` or
//! `window` directly. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Non-browser builds get inert fallbacks so state logic that calls into here
//! stays testable natively.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "csr")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Add or remove a marker class on `<body>`.
pub fn set_body_class(class: &str, on: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = document().and_then(|d| d.body()) {
            let list = body.class_list();
            let _ = if on { list.add_1(class) } else { list.remove_1(class) };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (class, on);
    }
}

/// Whether `<body>` currently carries the marker class.
pub fn body_has_class(class: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        document()
            .and_then(|d| d.body())
            .is_some_and(|body| body.class_list().contains(class))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = class;
        false
    }
}

/// Set `aria-hidden` on the element with the given id.
pub fn set_aria_hidden(element_id: &str, hidden: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(element_id)) {
            let _ = el.set_attribute("aria-hidden", if hidden { "true" } else { "false" });
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (element_id, hidden);
    }
}

/// Move keyboard focus to the element with the given id.
pub fn focus_element(element_id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast as _;
        if let Some(el) = document()
            .and_then(|d| d.get_element_by_id(element_id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = element_id;
    }
}

/// Native confirmation dialog. Outside a browser nothing is confirmed.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Native text prompt. `None` when cancelled or left empty.
pub fn prompt(message: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.prompt_with_message(message).ok())
            .flatten()
            .filter(|value| !value.is_empty())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        None
    }
}

/// Full-page navigation; a page entry re-initializes its state from scratch.
pub fn navigate_to(href: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = href;
    }
}

/// Current `location.pathname`, or `/` outside a browser.
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        "/".to_owned()
    }
}

/// Scroll the window back to the top before showing a full-height overlay.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
