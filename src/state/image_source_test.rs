use super::*;

#[test]
fn from_existing_keeps_safe_urls_only() {
    let src = ImageSource::from_existing("https://x/a.png");
    assert_eq!(src.preview(), "https://x/a.png");

    let unsafe_src = ImageSource::from_existing("javascript:alert(1)");
    assert!(!unsafe_src.has_preview());
    assert_eq!(unsafe_src.preview(), "");
}

#[test]
fn latest_input_method_overwrites_preview() {
    let mut src = ImageSource::from_existing("https://x/old.png");
    src.set(ImageInput::Dropped, "data:image/png;base64,AA");
    assert_eq!(src.preview(), "data:image/png;base64,AA");
    src.set(ImageInput::Pasted, "https://x/new.png");
    assert_eq!(src.preview(), "https://x/new.png");
    src.set(ImageInput::Picked, "data:image/jpeg;base64,BB");
    assert_eq!(src.preview(), "data:image/jpeg;base64,BB");
}

#[test]
fn empty_value_does_not_clear_slot() {
    let mut src = ImageSource::default();
    src.set(ImageInput::Pasted, "https://x/a.png");
    src.set(ImageInput::Pasted, "");
    assert_eq!(src.preview(), "https://x/a.png");
}

#[test]
fn pasted_invalid_url_is_previewed_but_dropped_on_submit() {
    let mut src = ImageSource::default();
    src.set(ImageInput::Pasted, "javascript:alert(1)");
    assert!(src.has_preview());
    assert_eq!(src.submission_value(), "");
}

#[test]
fn valid_preview_is_submitted_verbatim() {
    let mut src = ImageSource::default();
    src.set(ImageInput::Dropped, "data:image/png;base64,AA");
    assert_eq!(src.submission_value(), "data:image/png;base64,AA");
}

#[test]
fn drop_accepts_image_mime_types_only() {
    assert!(ImageSource::accepts_dropped_type("image/png"));
    assert!(ImageSource::accepts_dropped_type("image/webp"));
    assert!(!ImageSource::accepts_dropped_type("text/html"));
    assert!(!ImageSource::accepts_dropped_type(""));
}
