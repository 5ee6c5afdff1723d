//! The interaction state machine.
//!
//! `Spacing` owns the session and reacts to input events by pinning an
//! anchor, following the pointer for a target, measuring the pair and
//! asking the host to draw. It is independent of any event dispatch
//! mechanism: hosts translate their events into [`InputEvent`] and pass
//! a monotonic timestamp along.

use std::time::Duration;

use crate::config::Config;
use crate::element::{ElementId, classes, live_rect};
use crate::error::StartError;
use crate::event::{InputEvent, Key};
use crate::measure::measure;
use crate::overlay::{Host, Placeholder, PlaceholderKind};
use crate::rect::Rect;
use crate::session::Session;

/// Measurement tool bound to one host page.
pub struct Spacing<H: Host> {
    host: H,
    config: Config,
    session: Session,
    started: bool,
}

impl<H: Host> Spacing<H> {
    /// Creates a stopped tool. Call [`start`](Self::start) to begin
    /// listening.
    pub fn new(host: H, config: Config) -> Self {
        Self {
            host,
            config,
            session: Session::new(),
            started: false,
        }
    }

    /// Attaches listeners, or logs a warning if the page cannot host an
    /// overlay yet.
    pub fn start(&mut self) {
        if let Err(e) = self.try_start() {
            tracing::warn!("{e}");
        }
    }

    /// Attaches listeners. Starting twice is a no-op.
    pub fn try_start(&mut self) -> Result<(), StartError> {
        if self.started {
            return Ok(());
        }
        if !self.host.has_root() {
            return Err(StartError::NoRoot);
        }
        self.host.attach_listeners();
        self.started = true;
        tracing::debug!("started");
        Ok(())
    }

    /// Detaches listeners, clears the overlay and resets all state.
    ///
    /// Safe to call at any time, including before `start` and twice in
    /// a row. No pending dismissal survives it.
    pub fn stop(&mut self) {
        if self.started {
            self.host.detach_listeners();
            self.started = false;
        }
        self.cleanup();
        self.session = Session::new();
        tracing::debug!("stopped");
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the tool and returns its host.
    pub fn into_host(self) -> H {
        self.host
    }

    /// Feeds one input event observed at `now`.
    ///
    /// A dismissal that came due before `now` fires first. Events are
    /// ignored while the tool is stopped.
    pub fn handle(&mut self, event: &InputEvent, now: Duration) {
        if !self.started {
            return;
        }
        self.tick(now);

        match event {
            InputEvent::PointerMoved { .. } => self.pointer_moved(event.hover_candidate()),
            InputEvent::PointerLeft { related } => self.pointer_left(*related),
            InputEvent::KeyDown { key, shift } => self.key_down(key, *shift, now),
            InputEvent::KeyUp { key } => self.key_up(key, now),
        }
    }

    /// Fires the pending dismissal if its deadline has passed.
    pub fn tick(&mut self, now: Duration) {
        if self.session.pending.take_due(now) {
            tracing::debug!("grace period elapsed");
            self.cleanup();
        }
    }

    fn key_down(&mut self, key: &Key, shift: bool, now: Duration) {
        if self.config.activation.modifier.matches(key) {
            if self.session.pending.is_pending() {
                // Re-press during the grace period starts over.
                tracing::debug!("dismissal cancelled by re-press at {now:?}");
                self.cleanup();
            }
            self.session.modifier_held = true;

            if !self.session.is_active() {
                match self.session.hovering {
                    Some(anchor) => self.activate(anchor),
                    None => tracing::debug!("modifier down with nothing hovered"),
                }
            }
        }

        if shift && self.session.is_active() {
            self.session.delayed_dismiss = true;
        }
    }

    fn key_up(&mut self, key: &Key, now: Duration) {
        if !self.config.activation.modifier.matches(key) {
            return;
        }
        self.session.modifier_held = false;

        if !self.session.is_active() || self.session.pending.is_pending() {
            return;
        }
        let delay = self.config.dismiss.delay();
        if self.session.delayed_dismiss && !delay.is_zero() {
            self.session.pending.schedule(now, delay);
            tracing::debug!("dismissal scheduled in {delay:?}");
        } else {
            self.cleanup();
        }
    }

    fn pointer_moved(&mut self, candidate: Option<ElementId>) {
        let Some(id) = candidate else {
            self.session.hovering = None;
            return;
        };
        if self.is_overlay_element(id) {
            return;
        }
        self.session.hovering = Some(id);

        if self.session.is_active() {
            self.retarget(id);
        }
    }

    fn pointer_left(&mut self, related: Option<ElementId>) {
        if self.session.modifier_held {
            return;
        }
        let left_page = match related {
            None => true,
            Some(id) => self.host.is_document_root(id),
        };
        if left_page {
            self.session.hovering = None;
            self.cleanup();
        }
    }

    /// Pins `anchor` as the selected element and opens a session.
    fn activate(&mut self, anchor: ElementId) {
        let rect = match live_rect(&self.host, anchor) {
            Ok(rect) => rect,
            Err(e) => {
                tracing::debug!("cannot select: {e}");
                return;
            }
        };
        self.session.selected = Some(anchor);
        self.draw_placeholder(PlaceholderKind::Selected, anchor, rect);
        self.host.set_scroll_guard(true);
        tracing::debug!("+select {anchor}");
    }

    /// Switches the target to `id` and re-measures.
    ///
    /// The anchor and the current target are skipped, so an element is
    /// never measured against itself and repeated moves are no-ops.
    fn retarget(&mut self, id: ElementId) {
        if self.session.selected == Some(id) || self.session.target == Some(id) {
            return;
        }
        let rect = match live_rect(&self.host, id) {
            Ok(rect) => rect,
            Err(e) => {
                tracing::debug!("cannot target: {e}");
                return;
            }
        };
        self.session.target = Some(id);
        self.draw_placeholder(PlaceholderKind::Target, id, rect);
        tracing::debug!("+target {id}");
        self.remeasure();
    }

    /// Re-reads both boxes and redraws the marks.
    ///
    /// If either box is gone the old marks are cleared and none are drawn.
    fn remeasure(&mut self) {
        let (Some(selected_id), Some(target_id)) = (self.session.selected, self.session.target)
        else {
            return;
        };
        let boxes = live_rect(&self.host, selected_id)
            .and_then(|s| live_rect(&self.host, target_id).map(|t| (s, t)));
        let (selected, target) = match boxes {
            Ok(pair) => pair,
            Err(e) => {
                tracing::debug!("skipping measurement: {e}");
                self.host.clear_marks();
                return;
            }
        };

        let measurement = measure(&selected, &target);
        self.host.clear_marks();
        for mark in measurement.marks() {
            self.host.draw_mark(&selected, &target, &mark);
        }
        tracing::debug!(
            "measured {selected_id} vs {target_id}: {} {:?}",
            measurement.relation,
            measurement.distances
        );
    }

    fn draw_placeholder(&mut self, kind: PlaceholderKind, id: ElementId, bounds: Rect) {
        let placeholder =
            Placeholder::describe(&self.host, kind, id, bounds, self.config.color(kind));
        self.host.draw_placeholder(&placeholder);
    }

    fn is_overlay_element(&self, id: ElementId) -> bool {
        classes(&self.host, id)
            .iter()
            .any(|c| self.config.overlay.is_overlay_class(c))
    }

    /// Ends the session: cancels any pending dismissal, clears the
    /// overlay and releases the scroll guard.
    fn cleanup(&mut self) {
        self.session.end();
        self.host.clear_placeholder(PlaceholderKind::Selected);
        self.host.clear_placeholder(PlaceholderKind::Target);
        self.host.clear_marks();
        self.host.set_scroll_guard(false);
    }
}

#[cfg(test)]
#[path = "spacing_tests.rs"]
mod tests;
