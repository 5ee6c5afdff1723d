use super::*;
use crate::PlaceholderKind;

#[test]
fn default_config_has_expected_values() {
    // Arrange / Act
    let config = Config::default();

    // Assert
    assert_eq!(config.activation.modifier, Modifier::Alt);
    assert_eq!(config.dismiss.delay_ms, 3000);
    assert_eq!(config.color(PlaceholderKind::Selected), "red");
    assert_eq!(config.color(PlaceholderKind::Target), "blue");
    assert!(!config.logging.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_sections() {
    // Arrange
    let toml_str = "[dismiss]\ndelay_ms = 1500\n";

    // Act
    let config: Config = toml::from_str(toml_str).unwrap();

    // Assert
    assert_eq!(config.dismiss.delay_ms, 1500);
    assert_eq!(config.colors, ColorConfig::default());
    assert_eq!(config.activation.modifier, Modifier::Alt);
}

#[test]
fn modifier_parses_lowercase_names() {
    // Arrange
    let toml_str = "[activation]\nmodifier = \"ctrl\"\n";

    // Act
    let config: Config = toml::from_str(toml_str).unwrap();

    // Assert
    assert_eq!(config.activation.modifier, Modifier::Ctrl);
    assert!(Modifier::Ctrl.matches(&Key::Control));
    assert!(!Modifier::Ctrl.matches(&Key::Alt));
}

#[test]
fn validate_clamps_extreme_values() {
    // Arrange
    let mut config = Config {
        dismiss: DismissConfig { delay_ms: 999_999 },
        colors: ColorConfig {
            selected: "  ".into(),
            target: "#00ff00".into(),
        },
        overlay: OverlayConfig {
            class_prefix: String::new(),
        },
        ..Default::default()
    };

    // Act
    config.validate();

    // Assert
    assert_eq!(config.dismiss.delay_ms, 60_000);
    assert_eq!(config.colors.selected, "red");
    assert_eq!(config.colors.target, "#00ff00");
    assert_eq!(config.overlay.class_prefix, "spacing-js");
}

#[test]
fn overlay_classes_match_prefix_and_suffix() {
    let overlay = OverlayConfig::default();

    assert!(overlay.is_overlay_class("spacing-js-marker"));
    assert!(overlay.is_overlay_class("spacing-js-value"));
    assert!(overlay.is_overlay_class("spacing-js-placeholder"));
    assert!(!overlay.is_overlay_class("spacing-js-selected-placeholder"));
    assert!(!overlay.is_overlay_class("spacing-jsmarker"));
    assert!(!overlay.is_overlay_class("card"));
}

#[test]
fn log_level_falls_back_to_info() {
    let mut logging = LogConfig::default();
    assert_eq!(logging.max_level(), tracing::Level::INFO);

    logging.level = "DEBUG".into();
    assert_eq!(logging.max_level(), tracing::Level::DEBUG);

    logging.level = "loud".into();
    assert_eq!(logging.max_level(), tracing::Level::INFO);
}

#[test]
fn missing_file_is_reported_as_not_found() {
    // Arrange
    let path = std::env::temp_dir().join("spacing-config-that-does-not-exist.toml");

    // Act
    let err = try_load_from(&path).unwrap_err();

    // Assert
    assert!(err.is_not_found());
    assert_eq!(load_from(&path), Config::default());
}

#[test]
fn malformed_file_falls_back_to_defaults() {
    // Arrange
    let path = std::env::temp_dir().join(format!("spacing-bad-{}.toml", std::process::id()));
    std::fs::write(&path, "[dismiss\ndelay_ms = ").unwrap();

    // Act
    let err = try_load_from(&path).unwrap_err();
    let config = load_from(&path);
    let _ = std::fs::remove_file(&path);

    // Assert
    assert!(matches!(err, crate::error::ConfigError::Parse { .. }));
    assert_eq!(config, Config::default());
}
