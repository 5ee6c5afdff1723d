use serde::{Deserialize, Serialize};

use crate::ElementId;

/// A key as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Key {
    #[serde(alias = "Alt")]
    Alt,
    #[serde(alias = "Control")]
    Control,
    #[serde(alias = "Meta")]
    Meta,
    #[serde(alias = "Shift")]
    Shift,
    /// Any other key, by its host name (e.g. `"a"`, `"Escape"`).
    #[serde(untagged)]
    Other(String),
}

/// A platform-agnostic input event.
///
/// Hosts translate their raw pointer and keyboard events into these
/// variants and feed them to [`Spacing::handle`].
///
/// [`Spacing::handle`]: crate::Spacing::handle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// The pointer moved.
    PointerMoved {
        /// Composed event path, innermost first. Crosses shadow roots
        /// when the host can see through them; empty otherwise.
        #[serde(default)]
        path: Vec<ElementId>,
        /// Direct event target, used when `path` is empty.
        #[serde(default)]
        target: Option<ElementId>,
    },

    /// The pointer left an element.
    PointerLeft {
        /// Element the pointer moved into, `None` if it left the window.
        #[serde(default)]
        related: Option<ElementId>,
    },

    /// A key was pressed (or auto-repeated).
    KeyDown {
        key: Key,
        /// Whether shift was held when the key went down.
        #[serde(default)]
        shift: bool,
    },

    /// A key was released.
    KeyUp { key: Key },
}

impl InputEvent {
    /// Returns the element the pointer is over, if this is a move.
    pub fn hover_candidate(&self) -> Option<ElementId> {
        match self {
            Self::PointerMoved { path, target } => path.first().copied().or(*target),
            _ => None,
        }
    }
}

impl std::fmt::Display for InputEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PointerMoved { .. } => match self.hover_candidate() {
                Some(id) => write!(f, "move {id}"),
                None => f.write_str("move"),
            },
            Self::PointerLeft { related: Some(id) } => write!(f, "leave -> {id}"),
            Self::PointerLeft { related: None } => f.write_str("leave -> window"),
            Self::KeyDown { key, shift } => {
                write!(f, "keydown {key:?}{}", if *shift { " +shift" } else { "" })
            }
            Self::KeyUp { key } => write!(f, "keyup {key:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composed_path_wins_over_target() {
        let event = InputEvent::PointerMoved {
            path: vec![ElementId(7), ElementId(3)],
            target: Some(ElementId(3)),
        };
        assert_eq!(event.hover_candidate(), Some(ElementId(7)));
    }

    #[test]
    fn empty_path_falls_back_to_target() {
        let event = InputEvent::PointerMoved {
            path: Vec::new(),
            target: Some(ElementId(3)),
        };
        assert_eq!(event.hover_candidate(), Some(ElementId(3)));
    }

    #[test]
    fn deserializes_tagged_json() {
        // Arrange
        let json = r#"[
            {"type": "pointer_moved", "path": [4, 1]},
            {"type": "key_down", "key": "alt", "shift": true},
            {"type": "key_up", "key": "Escape"},
            {"type": "pointer_left"}
        ]"#;

        // Act
        let events: Vec<InputEvent> = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(events[0].hover_candidate(), Some(ElementId(4)));
        assert_eq!(
            events[1],
            InputEvent::KeyDown {
                key: Key::Alt,
                shift: true
            }
        );
        assert_eq!(
            events[2],
            InputEvent::KeyUp {
                key: Key::Other("Escape".into())
            }
        );
        assert_eq!(events[3], InputEvent::PointerLeft { related: None });
    }
}
