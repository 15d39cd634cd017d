//! Transient status notifications (toasts).
//!
//! DESIGN
//! ======
//! `Notifier` is the plain list the `ToastHost` renders. `Toasts` is the
//! context handle components call; it pushes into the signal and schedules the
//! visible -> fading -> removed lifecycle. Toasts coexist freely: no
//! de-duplication and no queueing.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use leptos::prelude::*;

use crate::config::Timings;

/// Severity, doubling as the CSS modifier class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastLevel {
    #[default]
    Success,
    Error,
}

impl ToastLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    Fading,
}

pub type ToastId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub level: ToastLevel,
    pub phase: ToastPhase,
}

impl Toast {
    /// Base class plus the bare severity class, e.g. `toast error`.
    pub fn class_list(&self) -> String {
        format!("toast {}", self.level.css_class())
    }
}

/// Ordered set of live toasts.
#[derive(Clone, Debug, Default)]
pub struct Notifier {
    pub items: Vec<Toast>,
    next_id: ToastId,
}

impl Notifier {
    pub fn push(&mut self, message: impl Into<String>, level: ToastLevel) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message: message.into(), level, phase: ToastPhase::Visible });
        id
    }

    pub fn begin_fade(&mut self, id: ToastId) {
        if let Some(toast) = self.items.iter_mut().find(|t| t.id == id) {
            toast.phase = ToastPhase::Fading;
        }
    }

    pub fn remove(&mut self, id: ToastId) {
        self.items.retain(|t| t.id != id);
    }
}

/// Context handle for raising toasts from anywhere in the tree.
#[derive(Clone, Copy, Debug)]
pub struct Toasts {
    state: RwSignal<Notifier>,
    timings: Timings,
}

impl Toasts {
    pub fn new(state: RwSignal<Notifier>, timings: Timings) -> Self {
        Self { state, timings }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(message.into(), ToastLevel::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(message.into(), ToastLevel::Error);
    }

    fn show(&self, message: String, level: ToastLevel) {
        let mut id = 0;
        self.state.update(|n| id = n.push(message, level));

        #[cfg(feature = "csr")]
        {
            let state = self.state;
            let Timings { toast_visible_ms, toast_fade_ms, .. } = self.timings;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(toast_visible_ms).await;
                state.update(|n| n.begin_fade(id));
                gloo_timers::future::TimeoutFuture::new(toast_fade_ms).await;
                state.update(|n| n.remove(id));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, self.timings);
        }
    }
}
