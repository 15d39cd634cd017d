//! Admin session token storage and lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token is the only state shared across requests. It is written once on
//! login, read before every request, and removed exactly once on logout or
//! confirmed expiry. Removal is never speculative.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::routes;

/// Backing storage for the session token.
pub trait TokenStore: Send + Sync {
    fn get(&self) -> Option<String>;
    fn set(&self, token: &str);
    fn remove(&self);
}

/// `localStorage`-backed store; survives reloads, not cleared on tab close.
#[derive(Clone, Debug)]
pub struct BrowserTokenStore {
    key: String,
}

impl BrowserTokenStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[cfg(feature = "csr")]
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl TokenStore for BrowserTokenStore {
    fn get(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            Self::storage().and_then(|s| s.get_item(&self.key).ok().flatten())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn set(&self, token: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.set_item(&self.key, token);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
        }
    }

    fn remove(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = Self::storage() {
                let _ = storage.remove_item(&self.key);
            }
        }
    }
}

/// Process-local store for tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self { token: Mutex::new(Some(token.to_owned())) }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().ok().and_then(|t| t.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = Some(token.to_owned());
        }
    }

    fn remove(&self) {
        if let Ok(mut slot) = self.token.lock() {
            *slot = None;
        }
    }
}

/// What the UI must do after a confirmed expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExpiryAction {
    /// Notify, then navigate to the given login path after a short delay.
    RedirectTo(&'static str),
    /// Not on an admin route: surface the failure only.
    Stay,
}

/// Handle to the admin session, cheap to clone into context.
#[derive(Clone)]
pub struct Session {
    store: Arc<dyn TokenStore>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl Session {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    pub fn browser(storage_key: &str) -> Self {
        Self::new(Arc::new(BrowserTokenStore::new(storage_key)))
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::default()))
    }

    /// Stored token; an empty string counts as absent.
    pub fn token(&self) -> Option<String> {
        self.store.get().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) {
        self.store.set(token);
        log::info!("admin session started");
    }

    pub fn sign_out(&self) {
        self.store.remove();
        log::info!("admin session ended");
    }

    /// Clear the token after a 401 and decide whether to leave the page.
    pub fn expire(&self, current_path: &str) -> ExpiryAction {
        self.store.remove();
        log::warn!("admin session expired on {current_path}");
        if routes::is_admin_scoped(current_path) {
            ExpiryAction::RedirectTo(routes::LOGIN_PATH)
        } else {
            ExpiryAction::Stay
        }
    }
}
