use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream_url, None);
    assert_eq!(cfg.upstream_timeout_secs, DEFAULT_UPSTREAM_TIMEOUT_SECS);
}

#[test]
fn parses_overrides_and_trims_trailing_slash() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("API_UPSTREAM_URL", "https://backend.test/"),
        ("API_UPSTREAM_TIMEOUT_SECS", " 5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream_url.as_deref(), Some("https://backend.test"));
    assert_eq!(cfg.upstream_timeout_secs, 5);
}

#[test]
fn blank_upstream_is_treated_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("API_UPSTREAM_URL", "  ")])).unwrap();
    assert_eq!(cfg.upstream_url, None);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { key: "PORT", value: "eighty".to_owned() });
}

#[test]
fn out_of_range_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { key: "PORT", .. }));
}

#[test]
fn invalid_timeout_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("API_UPSTREAM_TIMEOUT_SECS", "-1")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { key: "API_UPSTREAM_TIMEOUT_SECS", .. }));
}
