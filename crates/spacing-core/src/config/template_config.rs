/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `spacing init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Spacing configuration
# Location: ~/.config/spacing/config.toml

[activation]
# Modifier to hold while hovering: "alt", "ctrl", "meta", or "shift".
# Press it over an element to pin it, then move to another to measure.
modifier = "alt"

[dismiss]
# If shift is pressed during a session, the measurements stay on screen
# this long (milliseconds) after the modifier is released. Max 60000.
delay_ms = 3000

[colors]
# Outline colors for the pinned element and the element under the pointer.
# Any CSS color works: names, hex, rgb().
selected = "red"
target = "blue"

[overlay]
# Class prefix of the overlay's own elements. Elements carrying
# <prefix>-marker, <prefix>-value or <prefix>-placeholder are never measured.
class_prefix = "spacing-js"

[logging]
# Print diagnostics to stderr.
enabled = false
# Minimum log level: "trace", "debug", "info", "warn", or "error".
level = "info"
"##
    .to_string()
}
