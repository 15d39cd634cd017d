//! Admin dashboard state: guard, sequenced list reloads, and the editor.
//!
//! DESIGN
//! ======
//! Every successful mutation triggers a full list reload. Reloads are
//! ticketed so a slow response from an older reload can never overwrite a
//! newer one.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::error::ApiError;
use crate::net::session::Session;
use crate::net::types::{Product, ProductPayload};
use crate::routes::LOGIN_PATH;
use crate::state::catalog::{LoadState, ProductStore};
use crate::state::product_form::{FormError, FormMode, ProductForm};

/// Entry decision for the dashboard route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardGuard {
    Allow,
    Redirect(&'static str),
}

/// Without a stored token the dashboard is never initialized.
pub fn dashboard_guard(session: &Session) -> DashboardGuard {
    if session.is_authenticated() {
        DashboardGuard::Allow
    } else {
        DashboardGuard::Redirect(LOGIN_PATH)
    }
}

pub type ReloadTicket = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReloadOutcome {
    Applied,
    /// A newer reload was issued after this one; its result was discarded.
    Stale,
    Failed,
}

/// What the product table should show.
#[derive(Clone, Debug, PartialEq)]
pub enum ListView {
    Loading,
    Failed,
    Empty,
    Rows(Vec<Product>),
}

/// A validated submission ready to be sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmit {
    pub mode: FormMode,
    pub payload: ProductPayload,
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub load: LoadState,
    pub store: ProductStore,
    /// Open create/edit overlay.
    pub editor: Option<ProductForm>,
    pub submitting: bool,
    latest_ticket: ReloadTicket,
}

impl DashboardState {
    pub fn begin_reload(&mut self) -> ReloadTicket {
        self.latest_ticket += 1;
        log::debug!("dashboard reload #{}", self.latest_ticket);
        self.latest_ticket
    }

    pub fn finish_reload(
        &mut self,
        ticket: ReloadTicket,
        result: Result<Vec<Product>, ApiError>,
    ) -> ReloadOutcome {
        if ticket != self.latest_ticket {
            log::debug!("dashboard reload #{ticket} superseded by #{}", self.latest_ticket);
            return ReloadOutcome::Stale;
        }
        match result {
            Ok(products) => {
                self.store = ProductStore::new(products);
                self.load = LoadState::Loaded;
                ReloadOutcome::Applied
            }
            Err(e) => {
                log::warn!("dashboard reload #{ticket} failed: {e}");
                // Keep whatever rows were already shown.
                if self.load == LoadState::Loading {
                    self.load = LoadState::Failed;
                }
                ReloadOutcome::Failed
            }
        }
    }

    pub fn list_view(&self) -> ListView {
        match self.load {
            LoadState::Loading => ListView::Loading,
            LoadState::Failed => ListView::Failed,
            LoadState::Loaded if self.store.is_empty() => ListView::Empty,
            LoadState::Loaded => ListView::Rows(self.store.all().to_vec()),
        }
    }

    pub fn open_create(&mut self) {
        self.editor = Some(ProductForm::for_create());
    }

    /// Open the editor on the stored snapshot for `id`. Unknown ids open an
    /// empty product in edit mode.
    pub fn open_edit(&mut self, id: i64) {
        let form = match self.store.get(id) {
            Some(product) => ProductForm::for_edit(product),
            None => {
                log::warn!("edit requested for unknown product {id}");
                ProductForm::for_edit(&Product { id, ..Product::default() })
            }
        };
        self.editor = Some(form);
    }

    pub fn close_editor(&mut self) {
        self.editor = None;
    }

    /// Apply `edit` to the open form, if any.
    pub fn edit_form<R>(&mut self, edit: impl FnOnce(&mut ProductForm) -> R) -> Option<R> {
        self.editor.as_mut().map(edit)
    }

    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Validate the open form and mark the submission in flight.
    ///
    /// Returns `Ok(None)` when no editor is open.
    ///
    /// # Errors
    ///
    /// Propagates [`FormError`]; nothing is marked in flight in that case.
    pub fn prepare_submit(&mut self) -> Result<Option<PendingSubmit>, FormError> {
        let Some(form) = self.editor.as_ref() else {
            return Ok(None);
        };
        let payload = form.to_payload()?;
        self.submitting = true;
        Ok(Some(PendingSubmit { mode: form.mode, payload }))
    }

    /// Settle an in-flight submission. Success closes the overlay; failure
    /// leaves it open for another attempt.
    pub fn finish_submit(&mut self, succeeded: bool) {
        self.submitting = false;
        if succeeded {
            self.editor = None;
        }
    }
}
