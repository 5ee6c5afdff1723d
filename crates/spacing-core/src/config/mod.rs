mod loader;
pub mod template;

use serde::{Deserialize, Serialize};

use crate::event::Key;
use crate::overlay::PlaceholderKind;

pub use loader::{config_dir, config_path, load, load_from, try_load, try_load_from};

/// Longest accepted dismissal grace period.
const MAX_DISMISS_DELAY_MS: u64 = 60_000;

/// Top-level configuration for Spacing.
///
/// Loaded from `~/.config/spacing/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Which key starts a measurement session.
    pub activation: ActivationConfig,
    /// Delayed dismissal settings.
    pub dismiss: DismissConfig,
    /// Placeholder outline colors.
    pub colors: ColorConfig,
    /// Overlay element naming.
    pub overlay: OverlayConfig,
    /// Diagnostic logging.
    pub logging: LogConfig,
}

/// Activation key settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationConfig {
    /// Modifier held to measure. Defaults to `alt`.
    pub modifier: Modifier,
}

/// Keyboard modifier keys that can activate a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Alt,
    Ctrl,
    Meta,
    Shift,
}

/// Delayed dismissal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DismissConfig {
    /// How long a session lingers after release when shift was seen.
    pub delay_ms: u64,
}

/// Placeholder outline colors, any CSS color string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub selected: String,
    pub target: String,
}

/// Naming of the overlay's own elements.
///
/// Elements carrying `{prefix}-marker`, `{prefix}-value` or
/// `{prefix}-placeholder` are never picked as hover candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub class_prefix: String,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether logging to stderr is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "trace", "debug", "info", "warn", or "error".
    pub level: String,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            modifier: Modifier::Alt,
        }
    }
}

impl Default for DismissConfig {
    fn default() -> Self {
        Self { delay_ms: 3000 }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            selected: "red".into(),
            target: "blue".into(),
        }
    }
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            class_prefix: "spacing-js".into(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
        }
    }
}

impl Modifier {
    /// Returns whether `key` is this modifier.
    pub fn matches(self, key: &Key) -> bool {
        matches!(
            (self, key),
            (Self::Alt, Key::Alt)
                | (Self::Ctrl, Key::Control)
                | (Self::Meta, Key::Meta)
                | (Self::Shift, Key::Shift)
        )
    }
}

impl DismissConfig {
    pub fn delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.delay_ms)
    }
}

impl OverlayConfig {
    /// Returns whether `class` marks one of the overlay's own elements.
    pub fn is_overlay_class(&self, class: &str) -> bool {
        class
            .strip_prefix(self.class_prefix.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|suffix| matches!(suffix, "marker" | "value" | "placeholder"))
    }
}

impl LogConfig {
    /// Parses the configured level, defaulting to INFO.
    pub fn max_level(&self) -> tracing::Level {
        match self.level.to_ascii_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        }
    }
}

impl Config {
    /// Clamps and repairs values that would break a session.
    ///
    /// Caps the grace period and restores empty colors or prefix to
    /// their defaults.
    pub fn validate(&mut self) {
        self.dismiss.delay_ms = self.dismiss.delay_ms.min(MAX_DISMISS_DELAY_MS);

        let defaults = ColorConfig::default();
        if self.colors.selected.trim().is_empty() {
            self.colors.selected = defaults.selected;
        }
        if self.colors.target.trim().is_empty() {
            self.colors.target = defaults.target;
        }
        if self.overlay.class_prefix.trim().is_empty() {
            self.overlay = OverlayConfig::default();
        }
    }

    /// Returns the outline color for a placeholder kind.
    pub fn color(&self, kind: PlaceholderKind) -> &str {
        match kind {
            PlaceholderKind::Selected => &self.colors.selected,
            PlaceholderKind::Target => &self.colors.target,
        }
    }
}

#[cfg(test)]
mod tests;
