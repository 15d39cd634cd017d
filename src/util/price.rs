//! Price parsing and display formatting.
//!
//! Prices are stored as strings of digits, but older rows may hold JSON
//! numbers or localized text such as `"12,000원"` or `"무료"`. Everything here
//! folds those shapes into a non-negative integer amount.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

use serde_json::Value;

/// Leading marker that labels a stored price as free.
pub const FREE_MARKER: &str = "무료";

/// The backend keeps at most this many price digits.
pub const MAX_PRICE_DIGITS: usize = 15;

/// Display text for a price plus whether it counts as paid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceDisplay {
    pub text: String,
    pub paid: bool,
}

impl PriceDisplay {
    /// CSS classes for the rendered price tag.
    pub fn css_class(&self) -> &'static str {
        if self.paid {
            "product-price product-price--paid"
        } else {
            "product-price product-price--free"
        }
    }
}

/// Parse a stored price string. Empty input, the free marker, and input
/// without digits all yield 0.
pub fn parse_price_str(raw: &str) -> u64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with(FREE_MARKER) {
        return 0;
    }
    trimmed
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0_u64, |acc, digit| acc.saturating_mul(10).saturating_add(u64::from(digit)))
}

/// Parse a price in any stored shape. Never negative.
pub fn parse_price_num(value: &Value) -> u64 {
    match value {
        Value::String(raw) => parse_price_str(raw),
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                return v;
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            n.as_f64()
                .filter(|v| v.is_finite() && *v > 0.0)
                .map_or(0, |v| v.floor() as u64)
        }
        _ => 0,
    }
}

/// Group digits in thousands: `1234567` -> `"1,234,567"`.
pub fn format_price_comma(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `0원 [ 무료 ]` for free prices, `1,000원 [ 유료 ]` for paid ones.
pub fn format_price_display(price: &Value) -> PriceDisplay {
    let amount = parse_price_num(price);
    if amount == 0 {
        PriceDisplay { text: "0원 [ 무료 ]".to_owned(), paid: false }
    } else {
        PriceDisplay { text: format!("{}원 [ 유료 ]", format_price_comma(amount)), paid: true }
    }
}

/// Keep ASCII digits only. Applied to the price field on every keystroke.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Canonical price string for a request payload; empty input becomes `"0"`.
pub fn canonical_price(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(MAX_PRICE_DIGITS).collect();
    if digits.is_empty() { "0".to_owned() } else { digits }
}
