//! Tests for loading skill configuration from disk.

use std::io::Write;
use strictly_noughts::Mark;
use strictly_skill::SkillConfig;

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "medium_random_threshold = 75").unwrap();
    writeln!(file, "player_mark = \"O\"").unwrap();

    let config = SkillConfig::from_file(file.path()).expect("valid config");
    assert_eq!(*config.medium_random_threshold(), 75);
    assert_eq!(*config.player_mark(), Mark::O);
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = SkillConfig::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, SkillConfig::default());
}

#[test]
fn test_unreadable_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = SkillConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
