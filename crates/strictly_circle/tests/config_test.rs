//! Tests for loading the TOML config from disk.

use std::io::Write;
use std::time::Duration;
use strictly_circle::CircleConfig;
use strictly_circle::tui::Palette;
use strictly_segments::{PlayerCount, Shade};

#[test]
fn test_load_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
players = 3
duration_secs = 45
tick_millis = 250
seed = 99
light_color = "yellow"
dark_color = "blue"
"#
    )
    .unwrap();

    let config = CircleConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.players(), Some(3));
    assert_eq!(config.duration(), Duration::from_secs(45));
    assert_eq!(config.tick_interval(), Duration::from_millis(250));
    assert_eq!(*config.seed(), Some(99));

    let rules = config.rules(PlayerCount::new(3).unwrap()).unwrap();
    assert_eq!(*rules.duration(), Duration::from_secs(45));

    let palette = Palette::from_config(&config).unwrap();
    assert_ne!(palette.color(Shade::Light), palette.color(Shade::Dark));
}

#[test]
fn test_missing_file_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = CircleConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "duration_secs = \"long\"").unwrap();

    let err = CircleConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_colour_rejected() {
    let config = CircleConfig::from_toml("dark_color = \"not-a-colour\"").unwrap();
    assert!(Palette::from_config(&config).is_err());
}
