//! Single preview slot for the product image.
//!
//! Drop, file picker, and pasted URL all write the same slot and the latest
//! one wins. Input is lenient: whatever arrives is previewed. The scheme
//! allow-list is applied only when the form is submitted.

#[cfg(test)]
#[path = "image_source_test.rs"]
mod image_source_test;

use crate::util::sanitize::{is_valid_image_url, safe_image_url};

/// Which control delivered a new image value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageInput {
    Dropped,
    Picked,
    Pasted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageSource {
    preview: String,
}

impl ImageSource {
    /// Seed from a stored product image; unsafe stored values start empty.
    pub fn from_existing(image: &str) -> Self {
        Self { preview: safe_image_url(image).to_owned() }
    }

    /// Dropped files must declare an `image/*` MIME type.
    pub fn accepts_dropped_type(mime: &str) -> bool {
        mime.starts_with("image/")
    }

    /// Overwrite the slot. Empty values are ignored.
    pub fn set(&mut self, input: ImageInput, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        log::debug!("image replaced via {input:?}");
        self.preview = value;
    }

    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn has_preview(&self) -> bool {
        !self.preview.is_empty()
    }

    /// Value to submit: the preview if it passes the allow-list, else `""`.
    pub fn submission_value(&self) -> String {
        if is_valid_image_url(&self.preview) { self.preview.clone() } else { String::new() }
    }
}
