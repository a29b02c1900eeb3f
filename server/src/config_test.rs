use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_uses_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, ServerConfig::default());
    assert!(!cfg.identity.is_configured());
}

#[test]
fn reads_identity_settings() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("IDENTITY_URL", " https://auth.example.test/ "),
        ("IDENTITY_ANON_KEY", "anon-key"),
        ("INSIGHTS_MAX_TOKENS", "1024"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.identity.identity_url, "https://auth.example.test");
    assert_eq!(cfg.identity.identity_anon_key, "anon-key");
    assert_eq!(cfg.insights_max_tokens, 1024);
    assert!(cfg.identity.is_configured());
}

#[test]
fn blank_port_falls_back_to_default() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "  ")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
    assert_eq!(err.to_string(), "invalid PORT: \"eighty\"");
}

#[test]
fn forwarded_for_is_untrusted_unless_enabled() {
    assert!(!ServerConfig::from_lookup(lookup_from(&[])).unwrap().trust_forwarded_for);
    let cfg = ServerConfig::from_lookup(lookup_from(&[("TRUST_FORWARDED_FOR", "true")])).unwrap();
    assert!(cfg.trust_forwarded_for);
    let err = ServerConfig::from_lookup(lookup_from(&[("TRUST_FORWARDED_FOR", "yes")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "TRUST_FORWARDED_FOR", value: "yes".into() });
}
