use super::*;

// =============================================================
// from_override
// =============================================================

#[test]
fn from_override_defaults_to_localhost() {
    let cfg = ApiConfig::from_override(None).unwrap();
    assert_eq!(cfg.base.as_str(), "http://localhost:8081/");
}

#[test]
fn from_override_blank_value_uses_default() {
    let cfg = ApiConfig::from_override(Some("   ")).unwrap();
    assert_eq!(cfg.base.host_str(), Some("localhost"));
    assert_eq!(cfg.base.port(), Some(8081));
}

#[test]
fn from_override_accepts_https_origin() {
    let cfg = ApiConfig::from_override(Some("https://api.example.com")).unwrap();
    assert_eq!(cfg.base.as_str(), "https://api.example.com/");
}

#[test]
fn from_override_rejects_relative_value() {
    let err = ApiConfig::from_override(Some("api.example.com")).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    assert!(err.to_string().contains("api.example.com"));
}

#[test]
fn from_override_rejects_cannot_be_a_base() {
    let err = ApiConfig::from_override(Some("mailto:ops@example.com")).unwrap_err();
    assert!(matches!(err, ConfigError::NotABase { .. }));
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_relative_path_gets_leading_slash() {
    let cfg = ApiConfig::from_override(None).unwrap();
    assert_eq!(cfg.resolve("orders").unwrap().as_str(), "http://localhost:8081/orders");
}

#[test]
fn resolve_with_and_without_slash_match() {
    let cfg = ApiConfig::from_override(Some("https://api.example.com")).unwrap();
    for path in ["stats", "api/orders/7", "api/auth/login?x=1"] {
        assert_eq!(cfg.resolve(path).unwrap(), cfg.resolve(&format!("/{path}")).unwrap());
    }
}

#[test]
fn resolve_absolute_path_against_override() {
    let cfg = ApiConfig::from_override(Some("https://api.example.com")).unwrap();
    assert_eq!(cfg.resolve("/stats").unwrap().as_str(), "https://api.example.com/stats");
}

#[test]
fn resolve_absolute_path_replaces_base_path() {
    let cfg = ApiConfig::from_override(Some("https://api.example.com/v2/")).unwrap();
    assert_eq!(cfg.resolve("orders").unwrap().as_str(), "https://api.example.com/orders");
}

#[test]
fn resolve_keeps_query_string() {
    let cfg = ApiConfig::from_override(None).unwrap();
    assert_eq!(
        cfg.resolve("api/orders?status=NEW").unwrap().as_str(),
        "http://localhost:8081/api/orders?status=NEW"
    );
}

#[test]
fn normalize_path_is_idempotent() {
    assert_eq!(normalize_path("a"), "/a");
    assert_eq!(normalize_path("/a"), "/a");
    assert_eq!(normalize_path(""), "/");
}

// =============================================================
// from_sources
// =============================================================

#[test]
fn from_sources_runtime_override_wins() {
    let cfg = ApiConfig::from_sources(Some("https://api.example.com"), Some("https://baked.example.com")).unwrap();
    assert_eq!(cfg.resolve("/stats").unwrap().as_str(), "https://api.example.com/stats");
}

#[test]
fn from_sources_blank_runtime_defers_to_compiled() {
    let cfg = ApiConfig::from_sources(Some(""), Some("https://baked.example.com")).unwrap();
    assert_eq!(cfg.base.host_str(), Some("baked.example.com"));
}

#[test]
fn from_sources_nothing_set_uses_default() {
    let cfg = ApiConfig::from_sources(Some("  "), None).unwrap();
    assert_eq!(cfg.resolve("orders").unwrap().as_str(), "http://localhost:8081/orders");
}

// =============================================================
// init_in
// =============================================================

#[test]
fn init_in_resolves_once_and_keeps_value() {
    let cell = OnceLock::new();
    let calls = std::cell::Cell::new(0);
    let resolve = || {
        calls.set(calls.get() + 1);
        ApiConfig::from_override(Some("https://api.example.com"))
    };
    let first = init_in(&cell, resolve).unwrap().clone();
    let second = init_in(&cell, || ApiConfig::from_override(None)).unwrap();
    assert_eq!(&first, second);
    assert_eq!(calls.get(), 1);
}

#[test]
fn init_in_caches_failure() {
    let cell = OnceLock::new();
    let err = init_in(&cell, || ApiConfig::from_override(Some("not a url"))).unwrap_err();
    let again = init_in(&cell, || ApiConfig::from_override(None)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    assert_eq!(err, again);
}
