//! Drawing capabilities the state machine consumes.
//!
//! The core never owns pixels. It describes what to draw and a host
//! turns that into DOM nodes, GPU quads or log lines.

use serde::{Deserialize, Serialize};

use crate::element::{Page, classes};
use crate::measure::Mark;
use crate::{ElementId, Rect};

/// Top edge (in pixels) below which a placeholder label no longer fits
/// above its box and is tucked inside instead.
const LABEL_CLEARANCE: f64 = 25.0;

/// Which of the two outlined elements a placeholder belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderKind {
    Selected,
    Target,
}

impl PlaceholderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Selected => "selected",
            Self::Target => "target",
        }
    }
}

impl std::fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a placeholder's dimension label sits relative to its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelAnchor {
    /// Above the top edge.
    Above,
    /// Inside the box, against its top-left corner.
    Inside,
    /// Pinned to the viewport's top edge; the box starts offscreen.
    Viewport,
}

/// An outlined box around an element, with its dimension label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub bounds: Rect,
    pub color: String,
    pub label: String,
    pub anchor: LabelAnchor,
}

impl Placeholder {
    /// Describes the placeholder for `id` from its current box and metadata.
    pub fn describe<P: Page + ?Sized>(
        page: &P,
        kind: PlaceholderKind,
        id: ElementId,
        bounds: Rect,
        color: &str,
    ) -> Self {
        let tag = page.tag_name(id);
        let class = classes(page, id)
            .into_iter()
            .next()
            .map(|c| format!(".{c}"))
            .unwrap_or_default();
        let font = page
            .font_size(id)
            .map(|size| format!(" ({size})"))
            .unwrap_or_default();

        let anchor = if bounds.top < 0.0 {
            LabelAnchor::Viewport
        } else if bounds.top < LABEL_CLEARANCE {
            LabelAnchor::Inside
        } else {
            LabelAnchor::Above
        };
        let arrow = if anchor == LabelAnchor::Viewport {
            "↑ "
        } else {
            ""
        };

        Self {
            kind,
            bounds,
            color: color.to_owned(),
            label: format!(
                "{arrow}{}×{}px {tag}{class}{font}",
                bounds.width.round(),
                bounds.height.round()
            ),
            anchor,
        }
    }
}

/// Renders placeholders and distance marks.
pub trait Overlay {
    /// Draws a placeholder, replacing any existing one of the same kind.
    fn draw_placeholder(&mut self, placeholder: &Placeholder);

    /// Removes the placeholder of this kind. No-op if none is drawn.
    fn clear_placeholder(&mut self, kind: PlaceholderKind);

    /// Draws one distance annotation between the two boxes.
    fn draw_mark(&mut self, selected: &Rect, target: &Rect, mark: &Mark);

    /// Removes every distance annotation.
    fn clear_marks(&mut self);
}

/// Suppresses page scrolling while a session is active.
pub trait ScrollGuard {
    fn set_scroll_guard(&mut self, enabled: bool);
}

/// Everything the state machine needs from its environment.
pub trait Host: Page + Overlay + ScrollGuard {}

impl<T: Page + Overlay + ScrollGuard> Host for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{ElementSpec, RecordingHost};

    fn describe(host: &RecordingHost, id: u64) -> Placeholder {
        let id = ElementId(id);
        let bounds = host.bounding_rect(id).unwrap();
        Placeholder::describe(host, PlaceholderKind::Target, id, bounds, "blue")
    }

    #[test]
    fn label_shows_size_tag_first_class_and_font() {
        // Arrange
        let host = RecordingHost::with_elements([ElementSpec::new(
            1,
            Rect::new(40.0, 10.0, 120.4, 32.6),
        )
        .with_tag("BUTTON")
        .with_class("btn primary")
        .with_font_size("14px")]);

        // Act
        let p = describe(&host, 1);

        // Assert
        assert_eq!(p.label, "120×33px button.btn (14px)");
        assert_eq!(p.anchor, LabelAnchor::Above);
        assert_eq!(p.color, "blue");
    }

    #[test]
    fn label_moves_inside_near_viewport_top() {
        let host = RecordingHost::with_elements([ElementSpec::new(
            1,
            Rect::new(10.0, 0.0, 50.0, 50.0),
        )]);
        let p = describe(&host, 1);
        assert_eq!(p.anchor, LabelAnchor::Inside);
        assert_eq!(p.label, "50×50px div");
    }

    #[test]
    fn offscreen_top_gets_arrow() {
        let host = RecordingHost::with_elements([ElementSpec::new(
            1,
            Rect::new(-30.0, 0.0, 50.0, 80.0),
        )]);
        let p = describe(&host, 1);
        assert_eq!(p.anchor, LabelAnchor::Viewport);
        assert!(p.label.starts_with("↑ 50×80px"));
    }
}
