use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn from_lookup_treats_blank_values_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  "), ("BIND_ADDR", "")])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
}

// =============================================================================
// OVERRIDES
// =============================================================================

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn from_lookup_accepts_ipv6_bind_addr() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "::1")])).unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "[::1]:3000");
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn from_lookup_rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidConfig { var: "PORT", ref value } if value == "http"));
}

#[test]
fn from_lookup_rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"70000\"");
}

#[test]
fn from_lookup_rejects_bad_bind_addr() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ServerError::InvalidConfig { var: "BIND_ADDR", .. }));
}
