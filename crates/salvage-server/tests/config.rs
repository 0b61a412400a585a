use std::collections::HashMap;
use std::path::PathBuf;

use salvage_server::config::{LogFormat, ServerConfig};

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
    assert_eq!(config.data_dir, PathBuf::from("./data"));
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn variables_override_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("SALVAGE_BIND_ADDR", "127.0.0.1:9000"),
        ("SALVAGE_DATA_DIR", "/var/lib/salvage"),
        ("SALVAGE_LOG_FORMAT", "Pretty"),
    ]))
    .unwrap();
    assert_eq!(config.bind_addr.port(), 9000);
    assert_eq!(config.data_dir, PathBuf::from("/var/lib/salvage"));
    assert_eq!(config.log_format, LogFormat::Pretty);
}

#[test]
fn invalid_values_are_errors() {
    assert!(ServerConfig::from_lookup(lookup(&[("SALVAGE_BIND_ADDR", "nowhere")])).is_err());
    assert!(ServerConfig::from_lookup(lookup(&[("SALVAGE_LOG_FORMAT", "xml")])).is_err());
}
