//! An in-memory page that records every overlay call.
//!
//! Used by the `spacing replay` command to run scripted traces without a
//! browser, and by the state machine tests as a fake host.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::Rect;
use crate::element::{ElementId, Page};
use crate::error::HostError;
use crate::measure::Mark;
use crate::overlay::{Overlay, Placeholder, PlaceholderKind, ScrollGuard};

/// One element of a scripted page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSpec {
    pub id: ElementId,
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub font_size: Option<String>,
    pub rect: Rect,
    /// Marks the document's root element.
    #[serde(default)]
    pub root: bool,
}

fn default_tag() -> String {
    "div".into()
}

impl ElementSpec {
    pub fn new(id: u64, rect: Rect) -> Self {
        Self {
            id: ElementId(id),
            tag: default_tag(),
            class: String::new(),
            font_size: None,
            rect,
            root: false,
        }
    }

    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.class = class.into();
        self
    }

    pub fn with_font_size(mut self, size: &str) -> Self {
        self.font_size = Some(size.into());
        self
    }

    pub fn as_root(mut self) -> Self {
        self.root = true;
        self
    }
}

/// A host-side effect requested by the state machine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum OverlayCall {
    AttachListeners,
    DetachListeners,
    DrawPlaceholder(Placeholder),
    ClearPlaceholder { kind: PlaceholderKind },
    DrawMark {
        selected: Rect,
        target: Rect,
        mark: Mark,
    },
    ClearMarks,
    ScrollGuard { enabled: bool },
}

impl std::fmt::Display for OverlayCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AttachListeners => f.write_str("listeners on"),
            Self::DetachListeners => f.write_str("listeners off"),
            Self::DrawPlaceholder(p) => write!(f, "draw {} [{}] {}", p.kind, p.color, p.label),
            Self::ClearPlaceholder { kind } => write!(f, "clear {kind}"),
            Self::DrawMark { mark, .. } => write!(
                f,
                "mark {} {} ({})",
                mark.side,
                mark.label,
                if mark.outside { "external" } else { "internal" }
            ),
            Self::ClearMarks => f.write_str("clear marks"),
            Self::ScrollGuard { enabled } => {
                write!(f, "scroll guard {}", if *enabled { "on" } else { "off" })
            }
        }
    }
}

/// A scripted page that keeps the overlay's current state and a log of
/// every call made against it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    elements: BTreeMap<ElementId, ElementSpec>,
    no_root: bool,
    unreadable_classes: HashSet<ElementId>,
    listening: bool,
    scroll_guard: bool,
    selected: Option<Placeholder>,
    target: Option<Placeholder>,
    marks: Vec<Mark>,
    calls: Vec<OverlayCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a page from element descriptions.
    pub fn with_elements(elements: impl IntoIterator<Item = ElementSpec>) -> Self {
        let mut host = Self::new();
        for spec in elements {
            host.insert(spec);
        }
        host
    }

    /// Simulates a page whose body does not exist yet.
    pub fn without_root(mut self) -> Self {
        self.no_root = true;
        self
    }

    pub fn insert(&mut self, spec: ElementSpec) {
        self.elements.insert(spec.id, spec);
    }

    /// Removes an element, as if it were detached from the page.
    pub fn detach(&mut self, id: ElementId) -> Option<ElementSpec> {
        self.elements.remove(&id)
    }

    /// Changes an element's box, as if layout shifted.
    pub fn relayout(&mut self, id: ElementId, rect: Rect) {
        if let Some(spec) = self.elements.get_mut(&id) {
            spec.rect = rect;
        }
    }

    /// Makes class reads for `id` fail.
    pub fn break_class_reads(&mut self, id: ElementId) {
        self.unreadable_classes.insert(id);
    }

    pub fn calls(&self) -> &[OverlayCall] {
        &self.calls
    }

    /// Returns and clears the call log.
    pub fn take_calls(&mut self) -> Vec<OverlayCall> {
        std::mem::take(&mut self.calls)
    }

    pub fn placeholder(&self, kind: PlaceholderKind) -> Option<&Placeholder> {
        match kind {
            PlaceholderKind::Selected => self.selected.as_ref(),
            PlaceholderKind::Target => self.target.as_ref(),
        }
    }

    /// Marks currently on screen.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn scroll_guard(&self) -> bool {
        self.scroll_guard
    }

    /// Returns whether nothing of the overlay is visible.
    pub fn is_clear(&self) -> bool {
        self.selected.is_none() && self.target.is_none() && self.marks.is_empty()
    }

    fn spec(&self, id: ElementId) -> Option<&ElementSpec> {
        self.elements.get(&id)
    }
}

impl Page for RecordingHost {
    fn has_root(&self) -> bool {
        !self.no_root
    }

    fn attach_listeners(&mut self) {
        self.listening = true;
        self.calls.push(OverlayCall::AttachListeners);
    }

    fn detach_listeners(&mut self) {
        self.listening = false;
        self.calls.push(OverlayCall::DetachListeners);
    }

    fn bounding_rect(&self, id: ElementId) -> Option<Rect> {
        self.spec(id).map(|s| s.rect)
    }

    fn tag_name(&self, id: ElementId) -> String {
        self.spec(id)
            .map(|s| s.tag.to_ascii_lowercase())
            .unwrap_or_default()
    }

    fn class_name(&self, id: ElementId) -> Result<String, HostError> {
        if self.unreadable_classes.contains(&id) {
            return Err(HostError::read(id, "class name", "attribute is not a string"));
        }
        self.spec(id)
            .map(|s| s.class.clone())
            .ok_or(HostError::Detached(id))
    }

    fn font_size(&self, id: ElementId) -> Option<String> {
        self.spec(id).and_then(|s| s.font_size.clone())
    }

    fn is_document_root(&self, id: ElementId) -> bool {
        self.spec(id).is_some_and(|s| s.root)
    }
}

impl Overlay for RecordingHost {
    fn draw_placeholder(&mut self, placeholder: &Placeholder) {
        let slot = match placeholder.kind {
            PlaceholderKind::Selected => &mut self.selected,
            PlaceholderKind::Target => &mut self.target,
        };
        *slot = Some(placeholder.clone());
        self.calls.push(OverlayCall::DrawPlaceholder(placeholder.clone()));
    }

    fn clear_placeholder(&mut self, kind: PlaceholderKind) {
        match kind {
            PlaceholderKind::Selected => self.selected = None,
            PlaceholderKind::Target => self.target = None,
        }
        self.calls.push(OverlayCall::ClearPlaceholder { kind });
    }

    fn draw_mark(&mut self, selected: &Rect, target: &Rect, mark: &Mark) {
        self.marks.push(mark.clone());
        self.calls.push(OverlayCall::DrawMark {
            selected: *selected,
            target: *target,
            mark: mark.clone(),
        });
    }

    fn clear_marks(&mut self) {
        self.marks.clear();
        self.calls.push(OverlayCall::ClearMarks);
    }
}

impl ScrollGuard for RecordingHost {
    fn set_scroll_guard(&mut self, enabled: bool) {
        self.scroll_guard = enabled;
        self.calls.push(OverlayCall::ScrollGuard { enabled });
    }
}
