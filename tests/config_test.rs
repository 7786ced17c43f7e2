//! Tests for loading engine configuration from disk.

use minimax_tictactoe::{Difficulty, EngineConfig, Side, Symbols};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_from_file_reads_all_fields() {
    let file = write_config(
        r#"
        difficulty = "medium"
        first_player = "computer"
        user_symbol = "O"
        computer_symbol = "X"
        seed = 1234
        "#,
    );

    let config = EngineConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Medium);
    assert_eq!(*config.first_player(), Side::Computer);
    assert_eq!(config.symbols(), Symbols::new('O', 'X'));
    assert_eq!(*config.seed(), Some(1234));
}

#[test]
fn test_load_prefers_explicit_path() {
    let file = write_config("difficulty = \"hard\"\n");
    let config = EngineConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.difficulty(), Difficulty::Hard);
    assert_eq!(*config.first_player(), Side::User);
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let err = EngineConfig::from_file(&missing).unwrap_err();
    assert!(err.message.contains("Failed to read"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let file = write_config("difficulty = [1, 2]\n");
    let err = EngineConfig::load(Some(file.path())).unwrap_err();
    assert!(err.message.contains("Failed to parse"));
}

#[test]
fn test_whitespace_symbol_rejected() {
    let file = write_config("computer_symbol = \" \"\n");
    assert!(EngineConfig::from_file(file.path()).is_err());
}
