//! HTML escaping and URL scheme allow-listing.
//!
//! SECURITY
//! ========
//! Leptos escapes text nodes and attribute values on its own, so these helpers
//! guard the two places the framework cannot: markup fragments assembled by
//! hand (rendered through `inner_html`) and URLs placed in `src`/`href`, where
//! escaping alone does not stop a `javascript:` scheme.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

/// Schemes allowed as an `<img src>`.
const IMAGE_SCHEMES: &[&str] = &["http://", "https://", "data:image/"];

/// Schemes allowed as a followable `<a href>`. No `data:` here.
const LINK_SCHEMES: &[&str] = &["http://", "https://"];

/// Escape `& < > " '` so the value can be embedded in markup as text or as a
/// quoted attribute value.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape a multi-line text block and turn its line breaks into `<br>`.
pub fn escape_multiline(value: &str) -> String {
    escape_html(value).replace("\r\n", "<br>").replace('\n', "<br>")
}

fn has_allowed_scheme(value: &str, schemes: &[&str]) -> bool {
    let lowered = value.trim().to_ascii_lowercase();
    schemes.iter().any(|scheme| lowered.starts_with(scheme))
}

/// True iff the trimmed, lower-cased value starts with `http://`, `https://`
/// or `data:image/`.
pub fn is_valid_image_url(value: &str) -> bool {
    has_allowed_scheme(value, IMAGE_SCHEMES)
}

/// The original value when it is a valid image URL, otherwise `""`.
pub fn safe_image_url(value: &str) -> &str {
    if is_valid_image_url(value) { value } else { "" }
}

/// The trimmed value when it is an `http(s)` URL, otherwise `""`.
pub fn safe_link_url(value: &str) -> String {
    if has_allowed_scheme(value, LINK_SCHEMES) {
        value.trim().to_owned()
    } else {
        String::new()
    }
}
