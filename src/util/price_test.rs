use super::*;
use serde_json::json;

// =============================================================
// parse_price_num
// =============================================================

#[test]
fn parse_price_num_free_marker_is_zero() {
    assert_eq!(parse_price_num(&json!("무료")), 0);
    assert_eq!(parse_price_num(&json!("  무료 이벤트")), 0);
}

#[test]
fn parse_price_num_strips_separators_and_currency() {
    assert_eq!(parse_price_num(&json!("12,000원")), 12_000);
    assert_eq!(parse_price_num(&json!("₩ 3,500")), 3_500);
}

#[test]
fn parse_price_num_missing_or_malformed_is_zero() {
    assert_eq!(parse_price_num(&Value::Null), 0);
    assert_eq!(parse_price_num(&json!("")), 0);
    assert_eq!(parse_price_num(&json!("abc")), 0);
    assert_eq!(parse_price_num(&json!(true)), 0);
    assert_eq!(parse_price_num(&json!(["1"])), 0);
}

#[test]
fn parse_price_num_accepts_numbers() {
    assert_eq!(parse_price_num(&json!(1500)), 1_500);
    assert_eq!(parse_price_num(&json!(99.9)), 99);
    assert_eq!(parse_price_num(&json!(-5)), 0);
}

#[test]
fn parse_price_str_saturates_on_overflow() {
    assert_eq!(parse_price_str("99999999999999999999999999"), u64::MAX);
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn format_price_comma_groups_thousands() {
    assert_eq!(format_price_comma(0), "0");
    assert_eq!(format_price_comma(999), "999");
    assert_eq!(format_price_comma(1_000), "1,000");
    assert_eq!(format_price_comma(1_234_567), "1,234,567");
}

#[test]
fn format_price_display_zero_is_free() {
    let display = format_price_display(&json!(0));
    assert_eq!(display.text, "0원 [ 무료 ]");
    assert!(!display.paid);
    assert_eq!(display.css_class(), "product-price product-price--free");
}

#[test]
fn format_price_display_positive_is_paid_and_grouped() {
    let display = format_price_display(&json!(1000));
    assert!(display.text.contains("1,000"));
    assert!(display.text.contains("유료"));
    assert!(display.paid);
    assert_eq!(display.css_class(), "product-price product-price--paid");
}

// =============================================================
// Input normalization
// =============================================================

#[test]
fn digits_only_drops_everything_else() {
    assert_eq!(digits_only("12a,3-4 원"), "1234");
    assert_eq!(digits_only("abc"), "");
}

#[test]
fn canonical_price_defaults_to_zero_and_caps_length() {
    assert_eq!(canonical_price(""), "0");
    assert_eq!(canonical_price("12,000"), "12000");
    assert_eq!(canonical_price("12345678901234567890"), "123456789012345");
}
