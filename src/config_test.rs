use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, HostConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port() {
    let config = HostConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn empty_values_fall_back_to_defaults() {
    let config = HostConfig::from_lookup(lookup(&[("HOST", ""), ("PORT", "  ")])).unwrap();
    assert_eq!(config, HostConfig::default());
}

#[test]
fn invalid_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
    assert_eq!(err.to_string(), "invalid PORT: http");
}

#[test]
fn out_of_range_port_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn invalid_host_is_rejected() {
    let err = HostConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost".to_owned()));
}

#[test]
fn ipv6_host() {
    let config = HostConfig::from_lookup(lookup(&[("HOST", "::1"), ("PORT", "3000")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn missing_env_file_is_not_reported() {
    let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
    assert!(env_file_error(Err(missing)).is_none());
    assert!(env_file_error(Ok(PathBuf::from(".env"))).is_none());
}

#[test]
fn unreadable_env_file_is_reported() {
    let denied = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
    assert!(env_file_error(Err(denied)).is_some());
    let malformed = dotenvy::Error::LineParse("KEY VALUE".to_owned(), 4);
    assert!(env_file_error(Err(malformed)).is_some());
}
