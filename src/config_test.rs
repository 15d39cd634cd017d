use super::*;

#[test]
fn defaults_match_production_values() {
    let cfg = SiteConfig::default();
    assert_eq!(cfg.session_storage_key, "adminSession");
    assert_eq!(cfg.timings.toast_visible_ms, 3000);
    assert_eq!(cfg.timings.toast_fade_ms, 300);
    assert_eq!(cfg.timings.dialog_close_ms, 200);
    assert_eq!(cfg.timings.expiry_redirect_ms, 800);
    assert_eq!(cfg.limits.name, 200);
    assert_eq!(cfg.limits.download_url, 2048);
    assert_eq!(cfg.messages.request_failed, "Request failed");
}

#[test]
fn from_json_empty_input_yields_defaults() {
    assert_eq!(SiteConfig::from_json("  ").unwrap(), SiteConfig::default());
}

#[test]
fn from_json_layers_partial_override() {
    let cfg = SiteConfig::from_json(
        r#"{ "session_storage_key": "staffSession", "timings": { "toast_visible_ms": 5000 } }"#,
    )
    .unwrap();
    assert_eq!(cfg.session_storage_key, "staffSession");
    assert_eq!(cfg.timings.toast_visible_ms, 5000);
    assert_eq!(cfg.timings.toast_fade_ms, 300);
    assert_eq!(cfg.messages, Messages::default());
}

#[test]
fn from_json_rejects_wrong_types() {
    assert!(SiteConfig::from_json(r#"{ "timings": { "toast_fade_ms": "slow" } }"#).is_err());
    assert!(SiteConfig::from_json("{").is_err());
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_outside_browser_uses_defaults() {
    assert_eq!(SiteConfig::load(), SiteConfig::default());
}
