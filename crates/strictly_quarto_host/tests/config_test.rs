//! Tests for host configuration loading.

use std::io::Write;
use strictly_quarto::Ruleset;
use strictly_quarto_host::HostConfig;
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write config");
    file
}

#[test]
fn test_full_config() {
    let file = write_config(
        r#"
player_one = "ann"
player_two = "bo"
ruleset = "advanced"
log_filter = "debug"
channel = "lounge"
"#,
    );
    let config = HostConfig::from_file(file.path()).unwrap();
    assert_eq!(config.player_one(), "ann");
    assert_eq!(config.player_two(), "bo");
    assert_eq!(*config.ruleset(), Ruleset::Advanced);
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.channel(), "lounge");
}

#[test]
fn test_missing_keys_take_defaults() {
    let file = write_config("player_one = \"ann\"\n");
    let config = HostConfig::from_file(file.path()).unwrap();
    let defaults = HostConfig::default();
    assert_eq!(config.player_one(), "ann");
    assert_eq!(config.player_two(), defaults.player_two());
    assert_eq!(*config.ruleset(), Ruleset::Basic);
    assert_eq!(config.channel(), defaults.channel());
}

#[test]
fn test_bad_ruleset_is_rejected() {
    let file = write_config("ruleset = \"expert\"\n");
    let err = HostConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let err = HostConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_overrides_win_over_file() {
    let file = write_config("player_one = \"ann\"\nplayer_two = \"bo\"\n");
    let config = HostConfig::from_file(file.path())
        .unwrap()
        .with_overrides(None, Some("cy".to_string()), true);
    assert_eq!(config.player_one(), "ann");
    assert_eq!(config.player_two(), "cy");
    assert_eq!(*config.ruleset(), Ruleset::Advanced);
}
