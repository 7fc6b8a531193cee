//! Loading custom profiles from TOML files

use std::fs;
use std::path::PathBuf;

use fruit_memory::core::{GameState, Settings, SettingsError};
use fruit_memory::types::{FailureBehavior, Phase};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("fruit-memory-{}-{}", std::process::id(), name))
}

#[test]
fn test_load_profile_and_start_custom_game() {
    let path = temp_path("profile.toml");
    fs::write(
        &path,
        r#"
board_size = 7
sequence_display_secs = 3
level_time_limits_secs = [30, 40, 50, 60]
cell_reveal_ms = 4000
failure_behavior = "restart-from-start"
"#,
    )
    .unwrap();

    let settings = Settings::load(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(settings.board_size, 7);
    assert_eq!(settings.level_time_limits_secs, [30, 40, 50, 60]);
    assert_eq!(settings.failure_behavior, FailureBehavior::RestartFromStart);

    let mut state = GameState::new(3);
    state.apply_custom_settings(settings).unwrap();
    assert_eq!(state.board().len(), 49);
    assert_eq!(state.countdown(), 30);

    state.tick(3_000);
    assert_eq!(state.phase(), Phase::Playing);
}

#[test]
fn test_out_of_range_file_is_rejected() {
    let path = temp_path("bad.toml");
    fs::write(&path, "sequence_display_secs = 0\n").unwrap();

    let result = Settings::load(&path);
    fs::remove_file(&path).ok();

    assert!(matches!(
        result,
        Err(SettingsError::OutOfRange {
            field: "sequence_display_secs",
            ..
        })
    ));
}

#[test]
fn test_missing_file_falls_back_to_custom_defaults() {
    let path = temp_path("does-not-exist.toml");
    let settings = Settings::load_or_default(&path).unwrap();
    assert_eq!(settings, Settings::custom_defaults());
}

#[test]
fn test_settings_round_trip_through_toml() {
    let custom = Settings::custom_defaults();
    let text = toml::to_string(&custom).unwrap();
    assert_eq!(Settings::from_toml(&text).unwrap(), custom);
}
