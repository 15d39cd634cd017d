//! REST API client for the catalog backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: requests resolve to [`ApiError::Unavailable`] so the state
//! machines above can still be exercised in tests.
//!
//! ERROR HANDLING
//! ==============
//! Every response body is parsed as JSON regardless of status. Status
//! interpretation is the pure [`interpret_response`]; [`ApiClient::settle`]
//! layers session expiry on top. A 401 counts as expiry only when a token was
//! actually sent. Failures are never retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::session::{ExpiryAction, Session};
use super::types::{LoginRequest, LoginResponse, Product, ProductPayload};
use crate::config::SiteConfig;
use crate::error::ApiError;
use crate::state::notify::Toasts;

pub const PRODUCTS_ENDPOINT: &str = "/api/products";
pub const LOGIN_ENDPOINT: &str = "/api/admin/login";

pub fn product_endpoint(id: i64) -> String {
    format!("{PRODUCTS_ENDPOINT}/{id}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// Classified response before any session side effects.
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseOutcome {
    Success(Value),
    Expired,
    Failed { status: u16, message: String },
}

/// Classify a status + parsed body.
pub fn interpret_response(status: u16, body: Value, had_token: bool, fallback: &str) -> ResponseOutcome {
    if status == 401 && had_token {
        return ResponseOutcome::Expired;
    }
    if !(200..300).contains(&status) {
        let message = body
            .get("error")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_owned();
        return ResponseOutcome::Failed { status, message };
    }
    ResponseOutcome::Success(body)
}

/// Authenticated JSON client bound to the current session.
#[derive(Clone, Debug)]
pub struct ApiClient {
    session: Session,
    toasts: Option<Toasts>,
    request_failed: String,
    session_expired: String,
    expiry_redirect_ms: u32,
}

impl ApiClient {
    pub fn new(session: Session, config: &SiteConfig) -> Self {
        Self {
            session,
            toasts: None,
            request_failed: config.messages.request_failed.clone(),
            session_expired: config.messages.session_expired.clone(),
            expiry_redirect_ms: config.timings.expiry_redirect_ms,
        }
    }

    /// Route the session-expired notice through the toast host.
    #[must_use]
    pub fn with_toasts(mut self, toasts: Toasts) -> Self {
        self.toasts = Some(toasts);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Turn a completed response into the caller's result, clearing the
    /// session on confirmed expiry.
    ///
    /// # Errors
    ///
    /// [`ApiError::SessionExpired`] on 401 with a token sent, otherwise
    /// [`ApiError::Backend`] for any non-2xx status.
    pub fn settle(&self, status: u16, body: Value, had_token: bool, current_path: &str) -> Result<Value, ApiError> {
        match interpret_response(status, body, had_token, &self.request_failed) {
            ResponseOutcome::Success(value) => Ok(value),
            ResponseOutcome::Expired => {
                let action = self.session.expire(current_path);
                self.apply_expiry(action);
                Err(ApiError::SessionExpired(self.session_expired.clone()))
            }
            ResponseOutcome::Failed { status, message } => {
                log::warn!("request failed with {status}: {message}");
                Err(ApiError::Backend { status, message })
            }
        }
    }

    fn apply_expiry(&self, action: ExpiryAction) {
        let ExpiryAction::RedirectTo(target) = action else {
            return;
        };
        if let Some(toasts) = self.toasts {
            toasts.error(self.session_expired.clone());
        }
        #[cfg(feature = "csr")]
        {
            let delay = self.expiry_redirect_ms;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(delay).await;
                crate::util::dom::navigate_to(target);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (target, self.expiry_redirect_ms);
        }
    }

    /// Issue one request with JSON headers and the bearer token, if any.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::settle`]; network failures map to
    /// [`ApiError::Transport`].
    pub async fn request(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value, ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::Request;

            let token = self.session.token();
            let mut builder = match method {
                Method::Get => Request::get(path),
                Method::Post => Request::post(path),
                Method::Put => Request::put(path),
                Method::Delete => Request::delete(path),
            }
            .header("Content-Type", "application/json");
            if let Some(token) = &token {
                builder = builder.header("Authorization", &format!("Bearer {token}"));
            }
            let sent = match body {
                Some(body) => builder.json(&body).map_err(|e| ApiError::Transport(e.to_string()))?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(|e| {
                log::warn!("{method:?} {path} failed: {e}");
                ApiError::Transport(e.to_string())
            })?;
            let status = resp.status();
            let parsed = resp
                .json::<Value>()
                .await
                .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));
            self.settle(status, parsed, token.is_some(), &crate::util::dom::current_path())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, path, body);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET /api/products`.
    ///
    /// # Errors
    ///
    /// Any request failure, or [`ApiError::Decode`] if the body is not a list.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let value = self.request(Method::Get, PRODUCTS_ENDPOINT, None).await?;
        decode(value)
    }

    /// `POST /api/admin/login`.
    ///
    /// # Errors
    ///
    /// Any request failure, including rejected credentials.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let value = self.request(Method::Post, LOGIN_ENDPOINT, Some(encode(credentials)?)).await?;
        decode(value)
    }

    /// `POST /api/products`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Value, ApiError> {
        self.request(Method::Post, PRODUCTS_ENDPOINT, Some(encode(payload)?)).await
    }

    /// `PUT /api/products/:id`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn update_product(&self, id: i64, payload: &ProductPayload) -> Result<Value, ApiError> {
        self.request(Method::Put, &product_endpoint(id), Some(encode(payload)?)).await
    }

    /// `DELETE /api/products/:id`.
    ///
    /// # Errors
    ///
    /// Any request failure.
    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.request(Method::Delete, &product_endpoint(id), None).await.map(|_| ())
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
