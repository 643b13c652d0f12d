//! Tests for config file loading and command-line parsing.

use clap::Parser;
use gridtoe_cli::{Cli, Command, GameConfig, invalid_mode_message};
use std::io::Write;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Temp file");
    file.write_all(content.as_bytes()).expect("Write config");
    file
}

#[test]
fn test_load_full_config() {
    let file = config_file("[board]\ncols = 4\nrows = 5\n\n[opponent]\nseed = 42\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.board().cols(), &Some(4));
    assert_eq!(config.board().rows(), &Some(5));
    assert_eq!(config.opponent().seed(), &Some(42));
}

#[test]
fn test_missing_sections_default_to_prompting() {
    let file = config_file("[opponent]\nseed = 1\n");
    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(config.board().cols(), &None);
    assert_eq!(config.board().rows(), &None);
}

#[test]
fn test_flags_override_file() {
    let file = config_file("[board]\ncols = 4\nrows = 5\n");
    let config = GameConfig::load(Some(file.path()))
        .unwrap()
        .with_overrides(None, Some(3), Some(9));
    assert_eq!(config.board().cols(), &Some(4));
    assert_eq!(config.board().rows(), &Some(3));
    assert_eq!(config.opponent().seed(), &Some(9));
}

#[test]
fn test_explicit_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = config_file("[board]\ncols = \"three\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_parse_play_flags() {
    let cli = Cli::try_parse_from(["gridtoe", "play", "--cols", "4", "--seed", "7"]).unwrap();
    match cli.command {
        Command::Play {
            cols, rows, seed, ..
        } => {
            assert_eq!(cols, Some(4));
            assert_eq!(rows, None);
            assert_eq!(seed, Some(7));
        }
        Command::Test => panic!("Expected play"),
    }
}

#[test]
fn test_parse_test_mode() {
    let cli = Cli::try_parse_from(["gridtoe", "test"]).unwrap();
    assert!(matches!(cli.command, Command::Test));
}

#[test]
fn test_unknown_or_missing_mode_rejected() {
    let err = Cli::try_parse_from(["gridtoe", "watch"]).unwrap_err();
    assert_eq!(
        invalid_mode_message(&err).as_deref(),
        Some("Invalid argument 'watch'. Available: 'test', 'play'")
    );

    let err = Cli::try_parse_from(["gridtoe"]).unwrap_err();
    assert_eq!(
        invalid_mode_message(&err).as_deref(),
        Some("Invalid argument ''. Available: 'test', 'play'")
    );
}

#[test]
fn test_other_parse_errors_left_to_clap() {
    let err = Cli::try_parse_from(["gridtoe", "play", "--cols", "many"]).unwrap_err();
    assert_eq!(invalid_mode_message(&err), None);
    let err = Cli::try_parse_from(["gridtoe", "--version"]).unwrap_err();
    assert_eq!(invalid_mode_message(&err), None);
}
