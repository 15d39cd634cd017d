//! Navigation drawer open/closed state.
//!
//! The drawer is route-independent. Its state is mirrored onto the document
//! as a `<body>` marker class plus the drawer's `aria-hidden` flag so CSS and
//! assistive tech see the same thing.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use crate::util::dom;

pub const BODY_OPEN_CLASS: &str = "sidebar-open";
pub const SIDEBAR_ID: &str = "app-sidebar";
pub const TOGGLE_ID: &str = "sidebar-toggle";

/// Where keyboard focus should go after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusReturn {
    Toggle,
    Stay,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SidebarState {
    open: bool,
}

impl SidebarState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) -> FocusReturn {
        self.open = true;
        FocusReturn::Stay
    }

    /// Closing always hands focus back to the toggle button.
    pub fn close(&mut self) -> FocusReturn {
        self.open = false;
        FocusReturn::Toggle
    }

    pub fn toggle(&mut self) -> FocusReturn {
        if self.open { self.close() } else { self.open() }
    }

    /// Adopt the marker already on `<body>`, e.g. after a full-page load.
    pub fn sync_from_marker(&mut self, body_has_marker: bool) {
        self.open = body_has_marker;
    }
}

/// One document mutation made when the drawer changes state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentStep {
    FocusToggle,
    BodyMarker(bool),
    AriaHidden(bool),
}

/// Ordered mutations for a transition. Focus leaves the drawer before it is
/// hidden, so `aria-hidden` never lands on a focused subtree.
pub fn document_steps(state: SidebarState, focus: FocusReturn) -> Vec<DocumentStep> {
    let mut steps = Vec::with_capacity(3);
    if focus == FocusReturn::Toggle {
        steps.push(DocumentStep::FocusToggle);
    }
    steps.push(DocumentStep::BodyMarker(state.is_open()));
    steps.push(DocumentStep::AriaHidden(!state.is_open()));
    steps
}

/// Project the state onto `<body>` and the drawer element.
pub fn apply_to_document(state: SidebarState, focus: FocusReturn) {
    for step in document_steps(state, focus) {
        match step {
            DocumentStep::FocusToggle => dom::focus_element(TOGGLE_ID),
            DocumentStep::BodyMarker(on) => dom::set_body_class(BODY_OPEN_CLASS, on),
            DocumentStep::AriaHidden(hidden) => dom::set_aria_hidden(SIDEBAR_ID, hidden),
        }
    }
}
