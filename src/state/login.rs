//! Admin login form state.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::LoginRequest;

pub const USERNAME_MAX_CHARS: usize = 64;
pub const PASSWORD_MAX_CHARS: usize = 128;

/// Trim and bound the credentials. Returns `None` if either is empty.
pub fn validate_login_input(username: &str, password: &str) -> Option<LoginRequest> {
    let username: String = username.trim().chars().take(USERNAME_MAX_CHARS).collect();
    let password: String = password.chars().take(PASSWORD_MAX_CHARS).collect();
    if username.is_empty() || password.is_empty() {
        return None;
    }
    Some(LoginRequest { username, password })
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub busy: bool,
    pub error: Option<String>,
}

impl LoginState {
    pub fn button_label(&self) -> &'static str {
        if self.busy { "로그인 중..." } else { "로그인" }
    }

    /// Validate and enter the busy state. `None` means nothing to send; blank
    /// credentials also surface `rejected` inline.
    pub fn begin_submit(&mut self, rejected: &str) -> Option<LoginRequest> {
        if self.busy {
            return None;
        }
        let Some(request) = validate_login_input(&self.username, &self.password) else {
            self.error = Some(rejected.to_owned());
            return None;
        };
        self.busy = true;
        self.error = None;
        Some(request)
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.error = Some(message.into());
    }
}
