use std::time::Duration;

/// A single-slot, cancellable deadline for the delayed dismissal.
///
/// At most one cleanup is ever outstanding. Scheduling replaces the
/// previous deadline, and a cancelled deadline can never fire.
/// Hosts pass a monotonic `now` measured from any fixed epoch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DismissTimer {
    deadline: Option<Duration>,
}

impl DismissTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the timer to fire `delay` after `now`.
    pub fn schedule(&mut self, now: Duration, delay: Duration) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Disarms the timer. Returns whether a deadline was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Consumes the deadline if it has passed at `now`.
    pub fn take_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(at) if now >= at => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
