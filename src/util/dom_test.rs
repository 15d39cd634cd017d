#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn confirm_is_false_outside_browser() {
    assert!(!confirm("delete?"));
}

#[test]
fn prompt_is_none_outside_browser() {
    assert_eq!(prompt("url?"), None);
}

#[test]
fn current_path_defaults_to_root() {
    assert_eq!(current_path(), "/");
}

#[test]
fn body_class_helpers_are_noops_but_callable() {
    set_body_class("sidebar-open", true);
    assert!(!body_has_class("sidebar-open"));
    set_aria_hidden("app-sidebar", true);
    focus_element("sidebar-toggle");
    navigate_to("/admin");
    scroll_to_top();
}
