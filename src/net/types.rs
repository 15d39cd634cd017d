//! Wire DTOs for the catalog REST API.
//!
//! DESIGN
//! ======
//! Product rows are decoded leniently: `null`, missing, or oddly typed fields
//! fall back to empty values so one legacy row never fails a whole list.
//! `price` stays a raw JSON value because stored rows mix digit strings,
//! numbers, and localized text; `util::price` folds those shapes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A catalog product as returned by `GET /api/products`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    /// Backend-assigned identifier; immutable once created.
    #[serde(deserialize_with = "lenient_id")]
    pub id: i64,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(deserialize_with = "lenient_string")]
    pub code: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(deserialize_with = "lenient_string")]
    pub detailed_description: String,
    /// Raw stored price; see [`crate::util::price::parse_price_num`].
    pub price: Value,
    /// `http(s)` URL or `data:image/*` URI. Anything else renders as absent.
    #[serde(deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(deserialize_with = "lenient_string")]
    pub download_url: String,
    /// Display-ordered; duplicates allowed.
    #[serde(deserialize_with = "lenient_string_list")]
    pub specs: Vec<String>,
    #[serde(deserialize_with = "lenient_string_list")]
    pub features: Vec<String>,
}

impl Product {
    /// Long description for the detail dialog, falling back to the short one.
    pub fn display_description(&self) -> &str {
        if self.detailed_description.trim().is_empty() {
            &self.description
        } else {
            &self.detailed_description
        }
    }

    /// Id rendered with at least two digits, as on the card watermark.
    pub fn padded_id(&self) -> String {
        format!("{:02}", self.id)
    }

    /// First `limit` characters of the short description.
    pub fn excerpt(&self, limit: usize) -> String {
        self.description.chars().take(limit).collect()
    }
}

/// Create/update request body. Every field is already trimmed, canonical,
/// and allow-listed by the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub category: String,
    pub description: String,
    pub detailed_description: String,
    pub code: String,
    pub image: String,
    pub price: String,
    pub download_url: String,
    pub specs: Vec<String>,
    pub features: Vec<String>,
}

/// Body of `POST /api/admin/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    pub session_id: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        })
        .collect())
}

fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}
