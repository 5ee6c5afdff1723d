use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::error::HostError;

/// An opaque, non-owning handle to an element on the page.
///
/// Holding an id keeps nothing alive. The element may be detached at
/// any time, so every use goes back through [`Page::bounding_rect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Platform-agnostic view of the page being measured.
///
/// Each host (a browser binding, the in-memory [`RecordingHost`]) provides
/// its own implementation.
///
/// [`RecordingHost`]: crate::recording::RecordingHost
pub trait Page {
    /// Returns whether a renderable root exists to draw overlays into.
    fn has_root(&self) -> bool;

    /// Starts delivering pointer and key events.
    fn attach_listeners(&mut self);

    /// Stops delivering pointer and key events.
    fn detach_listeners(&mut self);

    /// Reads the element's current bounding box.
    ///
    /// Returns `None` if the element no longer exists.
    fn bounding_rect(&self, id: ElementId) -> Option<Rect>;

    /// Returns the lowercase tag name, e.g. `"div"`.
    fn tag_name(&self, id: ElementId) -> String;

    /// Returns the raw, space-separated class attribute.
    fn class_name(&self, id: ElementId) -> Result<String, HostError>;

    /// Returns the computed font size, e.g. `"16px"`, if known.
    fn font_size(&self, id: ElementId) -> Option<String>;

    /// Returns whether the element is the document's root element.
    fn is_document_root(&self, id: ElementId) -> bool;
}

/// Reads a box and rejects detached elements.
///
/// A detached element either has no box at all or reports the all-zero
/// box, and neither is usable for measurement.
pub fn live_rect<P: Page + ?Sized>(page: &P, id: ElementId) -> Result<Rect, HostError> {
    match page.bounding_rect(id) {
        Some(rect) if !rect.is_degenerate() => Ok(rect),
        _ => Err(HostError::Detached(id)),
    }
}

/// Returns the element's class list, or an empty list if the read fails.
pub fn classes<P: Page + ?Sized>(page: &P, id: ElementId) -> Vec<String> {
    match page.class_name(id) {
        Ok(raw) => raw.split_whitespace().map(str::to_owned).collect(),
        Err(e) => {
            tracing::debug!("class read degraded to empty: {e}");
            Vec::new()
        }
    }
}
