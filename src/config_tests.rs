//! Tests for config

use super::*;
use crate::format::OutputFormat;
use proptest::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_missing_file_returns_defaults_without_warning() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(&dir.path().join("config.toml"));

    assert_eq!(result.config, Config::default());
    assert!(result.warning.is_none());
}

#[test]
fn test_valid_file_is_loaded() {
    let file = write_config(
        r#"
[provider]
nationality = "ca"

[output]
format = "xml"
"#,
    );
    let result = load_config_from(file.path());

    assert!(result.warning.is_none());
    assert_eq!(result.config.provider.nationality, "ca");
    assert_eq!(result.config.output.format, OutputFormat::Xml);
}

#[test]
fn test_invalid_value_falls_back_with_warning() {
    let file = write_config("[output]\nformat = \"csv\"\n");
    let result = load_config_from(file.path());

    assert_eq!(result.config, Config::default());
    let warning = result.warning.unwrap();
    assert!(warning.starts_with("Invalid config"), "{}", warning);
}

#[test]
fn test_unreadable_path_falls_back_with_warning() {
    // A directory exists but cannot be read as a file
    let dir = tempfile::tempdir().unwrap();
    let result = load_config_from(dir.path());

    assert_eq!(result.config, Config::default());
    assert!(result.warning.unwrap().starts_with("Failed to read config"));
}

#[test]
fn test_config_path_location() {
    let path = get_config_path();
    let path_str = path.to_string_lossy();
    assert!(
        path_str.ends_with("userstats/config.toml") || path_str.ends_with("userstats\\config.toml"),
        "unexpected config path: {}",
        path_str
    );
}

// Malformed TOML always degrades to defaults with a warning
proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn prop_malformed_toml_fallback(
        malformed in prop::sample::select(vec![
            "[server\nport = 8080",            // Missing closing bracket
            "[server]\nbind_address = local",  // Missing quotes
            "[server]\n port",                 // Missing value
            "server]\nport = 8080",            // Missing opening bracket
            "[output]\nformat = \"json",       // Unterminated string
        ])
    ) {
        let file = write_config(malformed);
        let result = load_config_from(file.path());

        prop_assert_eq!(result.config, Config::default());
        prop_assert!(result.warning.is_some());
    }
}
