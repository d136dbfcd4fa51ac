use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_app_config_applies_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:8000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.service_name, "Driver Sentiment Model Server");
    assert_eq!(cfg.body_limit_bytes, 2_097_152);
    assert!(cfg.lexicon_path.is_none());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("DSM_BIND_ADDR", "127.0.0.1:9100");
    map.insert("DSM_LOG_LEVEL", "debug");
    map.insert("DSM_SERVICE_NAME", "Rider Sentiment");
    map.insert("DSM_BODY_LIMIT_BYTES", "4096");
    map.insert("DSM_LEXICON_PATH", "./config/lexicon.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:9100");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.service_name, "Rider Sentiment");
    assert_eq!(cfg.body_limit_bytes, 4096);
    assert_eq!(
        cfg.lexicon_path.as_deref(),
        Some(std::path::Path::new("./config/lexicon.yaml"))
    );
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("DSM_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DSM_BIND_ADDR"),
        "expected InvalidEnvVar(DSM_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_non_numeric_body_limit() {
    let mut map = HashMap::new();
    map.insert("DSM_BODY_LIMIT_BYTES", "lots");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DSM_BODY_LIMIT_BYTES"),
        "expected InvalidEnvVar(DSM_BODY_LIMIT_BYTES), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_body_limit() {
    let mut map = HashMap::new();
    map.insert("DSM_BODY_LIMIT_BYTES", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DSM_BODY_LIMIT_BYTES"),
        "expected InvalidEnvVar(DSM_BODY_LIMIT_BYTES), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_blank_service_name() {
    let mut map = HashMap::new();
    map.insert("DSM_SERVICE_NAME", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "DSM_SERVICE_NAME"),
        "expected InvalidEnvVar(DSM_SERVICE_NAME), got: {result:?}"
    );
}

#[test]
fn build_app_config_ignores_blank_lexicon_path() {
    let mut map = HashMap::new();
    map.insert("DSM_LEXICON_PATH", "");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.lexicon_path.is_none());
}
