use healthlog::config::{Backend, Config};
use std::collections::HashMap;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults() {
    let cfg = Config::default();

    assert_eq!(cfg.backend, Backend::Sqlite);
    assert_eq!(cfg.port, 5000);
    assert_eq!(cfg.bind, "127.0.0.1");
    assert_eq!(cfg.default_sugar_limit, 50.0);
    assert!(cfg.database.ends_with("healthlog.sqlite"));
    assert!(cfg.validate().is_ok());
}

#[test]
fn env_selects_remote_backend() {
    let mut cfg = Config::default();
    cfg.apply_env(env_of(&[
        ("HEALTHLOG_BACKEND", "supabase"),
        ("SUPABASE_URL", "https://example.supabase.co"),
        ("SUPABASE_KEY", "anon-key"),
        ("PORT", "8080"),
    ]))
    .expect("env applied");

    assert_eq!(cfg.backend, Backend::Remote);
    assert_eq!(cfg.remote_url, "https://example.supabase.co");
    assert_eq!(cfg.remote_key, "anon-key");
    assert_eq!(cfg.port, 8080);
    assert!(cfg.validate().is_ok());
}

#[test]
fn blank_env_values_are_ignored() {
    let mut cfg = Config::default();
    cfg.apply_env(env_of(&[("SUPABASE_URL", "  "), ("PORT", "")]))
        .expect("env applied");

    assert!(cfg.remote_url.is_empty());
    assert_eq!(cfg.port, 5000);
}

#[test]
fn bad_env_values_are_errors() {
    let mut cfg = Config::default();
    assert!(cfg.apply_env(env_of(&[("PORT", "http")])).is_err());
    assert!(cfg.apply_env(env_of(&[("HEALTHLOG_BACKEND", "mongo")])).is_err());
}

#[test]
fn remote_backend_without_credentials_is_invalid() {
    let mut cfg = Config::default();
    cfg.backend = Backend::Remote;
    cfg.remote_url = "https://example.supabase.co".into();

    assert!(cfg.validate().is_err());
}

#[test]
fn non_positive_default_limit_is_invalid() {
    let mut cfg = Config::default();
    cfg.default_sugar_limit = 0.0;
    assert!(cfg.validate().is_err());
}

#[test]
fn use_database_forces_sqlite() {
    let mut cfg = Config::default();
    cfg.backend = Backend::Remote;
    cfg.use_database("/tmp/other.sqlite");

    assert_eq!(cfg.backend, Backend::Sqlite);
    assert_eq!(cfg.database, "/tmp/other.sqlite");
}

#[test]
fn yaml_file_fills_missing_fields_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("healthlog.conf");
    std::fs::write(&path, "backend: sqlite\ndatabase: /data/health.sqlite\nport: 7000\n")
        .expect("write config");

    let cfg = Config::from_file(&path).expect("parsed");

    assert_eq!(cfg.database, "/data/health.sqlite");
    assert_eq!(cfg.port, 7000);
    assert_eq!(cfg.default_sugar_limit, 50.0);
    assert_eq!(cfg.log_filter, "warn");
}

#[test]
fn redacted_hides_remote_key() {
    let mut cfg = Config::default();
    cfg.remote_key = "abcdefghijkl".into();

    let shown = cfg.redacted();
    assert_eq!(shown.remote_key, "abcd…");
    assert_eq!(cfg.remote_key, "abcdefghijkl");
}
