use crate::ElementId;
use crate::timer::DismissTimer;

/// Where the interaction currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Nothing under the pointer, no session.
    Idle,
    /// Pointer over an element, no session.
    Hovering,
    /// Modifier held, anchor pinned, target follows the pointer.
    Selecting,
    /// Modifier released with a grace period running.
    DismissPending,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Hovering => "hovering",
            Self::Selecting => "selecting",
            Self::DismissPending => "dismiss-pending",
        };
        f.write_str(s)
    }
}

/// State of one measurement session plus the hover tracking that
/// outlives it.
///
/// All element references are lookup handles; none of them keep an
/// element alive.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Session {
    pub(crate) hovering: Option<ElementId>,
    pub(crate) selected: Option<ElementId>,
    pub(crate) target: Option<ElementId>,
    pub(crate) delayed_dismiss: bool,
    pub(crate) modifier_held: bool,
    pub(crate) pending: DismissTimer,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Element currently under the pointer.
    pub fn hovering(&self) -> Option<ElementId> {
        self.hovering
    }

    /// Pinned measurement anchor.
    pub fn selected(&self) -> Option<ElementId> {
        self.selected
    }

    /// Element being compared against the anchor.
    pub fn target(&self) -> Option<ElementId> {
        self.target
    }

    /// Whether release will linger instead of clearing at once.
    pub fn delayed_dismiss(&self) -> bool {
        self.delayed_dismiss
    }

    pub fn modifier_held(&self) -> bool {
        self.modifier_held
    }

    /// The pending dismissal, if any.
    pub fn pending(&self) -> &DismissTimer {
        &self.pending
    }

    /// A session is active from the moment an anchor is pinned until
    /// cleanup.
    pub fn is_active(&self) -> bool {
        self.selected.is_some()
    }

    pub fn phase(&self) -> Phase {
        if self.pending.is_pending() {
            Phase::DismissPending
        } else if self.is_active() {
            Phase::Selecting
        } else if self.hovering.is_some() {
            Phase::Hovering
        } else {
            Phase::Idle
        }
    }

    /// Drops everything tied to the current session. Hover tracking and
    /// the modifier state survive.
    pub(crate) fn end(&mut self) {
        self.pending.cancel();
        self.selected = None;
        self.target = None;
        self.delayed_dismiss = false;
    }
}
