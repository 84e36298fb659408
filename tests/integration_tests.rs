use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get path to fixture file
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Command with an empty config directory so a developer's own
/// config file cannot change the output
fn userstats(config_home: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!();
    cmd.env("HOME", config_home.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_submit_text_report() {
    let home = TempDir::new().unwrap();

    userstats(&home)
        .args(["submit", "--format", "text"])
        .arg(fixture_path("users.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("User Count: 6"))
        .stdout(predicate::str::contains("Percentage of males: 50.00%"))
        .stdout(predicate::str::contains("Percentage of females: 50.00%"))
        .stdout(predicate::str::contains(
            "Percentage of last names that start with A-M versus N-Z: 66.67%",
        ))
        .stdout(predicate::str::contains(
            "\tPercentage of people in California: 33.33%",
        ))
        .stdout(predicate::str::contains(
            "\tPercentage of people in the age range 0-20: 16.67%",
        ));
}

#[test]
fn test_submit_defaults_to_json() {
    let home = TempDir::new().unwrap();

    let output = userstats(&home)
        .arg("submit")
        .arg(fixture_path("users.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["userCount"], 6);
    assert_eq!(report["stats"].as_array().unwrap().len(), 8);

    let ranking: Vec<&str> = report["stats"][4]["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["description"].as_str().unwrap())
        .collect();
    assert_eq!(
        ranking,
        vec![
            "Percentage of people in California",
            "Percentage of people in New York",
            "Percentage of people in Texas",
        ]
    );
}

#[test]
fn test_submit_xml_report() {
    let home = TempDir::new().unwrap();

    userstats(&home)
        .args(["submit", "--format", "xml"])
        .arg(fixture_path("users.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<StatResults>"))
        .stdout(predicate::str::contains("<UserCount>6</UserCount>"));
}

#[test]
fn test_submit_format_from_config() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("userstats");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[output]\nformat = \"text\"\n").unwrap();

    userstats(&home)
        .arg("submit")
        .arg(fixture_path("users.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Timestamp: "));
}

#[test]
fn test_submit_invalid_config_warns_and_continues() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("userstats");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[output\nformat = ").unwrap();

    userstats(&home)
        .args(["submit", "--format", "text"])
        .arg(fixture_path("users.json"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning"))
        .stdout(predicate::str::contains("User Count: 6"));
}

#[test]
fn test_submit_from_stdin() {
    let home = TempDir::new().unwrap();
    let input = fs::read_to_string(fixture_path("users.json")).unwrap();

    userstats(&home)
        .args(["submit", "--format", "text"])
        .write_stdin(input)
        .assert()
        .success()
        .stdout(predicate::str::contains("User Count: 6"));
}

#[test]
fn test_submit_empty_results() {
    let home = TempDir::new().unwrap();

    userstats(&home)
        .arg("submit")
        .arg(fixture_path("empty_results.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No user records"));
}

#[test]
fn test_submit_invalid_json() {
    let home = TempDir::new().unwrap();

    userstats(&home)
        .arg("submit")
        .arg(fixture_path("invalid.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON"));
}

#[test]
fn test_submit_nonexistent_file() {
    let home = TempDir::new().unwrap();

    userstats(&home)
        .args(["submit", "nonexistent.json"])
        .assert()
        .failure();
}

#[test]
fn test_unknown_format_is_rejected() {
    let home = TempDir::new().unwrap();

    userstats(&home)
        .args(["submit", "--format", "yaml"])
        .arg(fixture_path("users.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_cli_help_flag() {
    let home = TempDir::new().unwrap();

    userstats(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary statistics"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_cli_version_flag() {
    let home = TempDir::new().unwrap();

    userstats(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("userstats"));
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixture_path("users.json").exists());
    assert!(fixture_path("empty_results.json").exists());
    assert!(fixture_path("invalid.json").exists());
}
