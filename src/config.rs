//! Site configuration: storage key, timings, field limits, and UI copy.
//!
//! Defaults hold the production values. A page may embed a JSON override in
//! `<script id="showcase-config" type="application/json">`; any key it sets
//! replaces the default and every other key keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_SESSION_STORAGE_KEY: &str = "adminSession";
pub const CONFIG_ELEMENT_ID: &str = "showcase-config";

/// Delays driving transient UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// How long a toast stays fully visible.
    pub toast_visible_ms: u32,
    /// Fade-out duration before a toast is removed.
    pub toast_fade_ms: u32,
    /// Close transition of the product detail dialog.
    pub dialog_close_ms: u32,
    /// Pause between the session-expired toast and the login redirect.
    pub expiry_redirect_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self { toast_visible_ms: 3000, toast_fade_ms: 300, dialog_close_ms: 200, expiry_redirect_ms: 800 }
    }
}

/// Backend-enforced maximum lengths, mirrored as `maxlength` on form inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldLimits {
    pub name: u32,
    pub category: u32,
    pub description: u32,
    pub detailed_description: u32,
    pub code: u32,
    pub download_url: u32,
    pub tag_item: u32,
}

impl Default for FieldLimits {
    fn default() -> Self {
        Self {
            name: 200,
            category: 100,
            description: 5000,
            detailed_description: 10_000,
            code: 50,
            download_url: 2048,
            tag_item: 500,
        }
    }
}

/// User-facing copy.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub session_expired: String,
    pub request_failed: String,
    pub catalog_load_failed: String,
    pub catalog_empty: String,
    pub search_empty: String,
    pub dashboard_empty: String,
    pub list_load_failed: String,
    pub delete_confirm: String,
    pub delete_success: String,
    pub delete_failed: String,
    pub required_fields: String,
    pub create_success: String,
    pub update_success: String,
    pub submit_failed: String,
    pub login_failed: String,
    pub image_url_prompt: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            session_expired: "로그인이 만료되었습니다. 다시 로그인해 주세요.".to_owned(),
            request_failed: "Request failed".to_owned(),
            catalog_load_failed: "로딩 중 오류가 발생했습니다.".to_owned(),
            catalog_empty: "제품이 없습니다.".to_owned(),
            search_empty: "검색 결과가 없습니다.".to_owned(),
            dashboard_empty: "제품이 없습니다. 제품을 추가해주세요.".to_owned(),
            list_load_failed: "제품을 불러오는데 실패했습니다.".to_owned(),
            delete_confirm: "정말 삭제하시겠습니까?".to_owned(),
            delete_success: "제품이 삭제되었습니다.".to_owned(),
            delete_failed: "삭제에 실패했습니다.".to_owned(),
            required_fields: "필수 항목을 입력해주세요.".to_owned(),
            create_success: "제품이 추가되었습니다.".to_owned(),
            update_success: "제품이 수정되었습니다.".to_owned(),
            submit_failed: "오류가 발생했습니다.".to_owned(),
            login_failed: "아이디 또는 비밀번호가 올바르지 않습니다.".to_owned(),
            image_url_prompt: "이미지 URL을 입력하세요:".to_owned(),
        }
    }
}

/// Complete client configuration, provided to components through context.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `localStorage` key holding the admin session token.
    pub session_storage_key: String,
    pub timings: Timings,
    pub limits: FieldLimits,
    pub messages: Messages,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            session_storage_key: DEFAULT_SESSION_STORAGE_KEY.to_owned(),
            timings: Timings::default(),
            limits: FieldLimits::default(),
            messages: Messages::default(),
        }
    }
}

impl SiteConfig {
    /// Layer a JSON override over the defaults.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the override is not valid JSON or a key
    /// has the wrong type.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Load the page-embedded override, falling back to defaults.
    pub fn load() -> Self {
        let Some(raw) = embedded_override() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring invalid #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }
}

fn embedded_override() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}
