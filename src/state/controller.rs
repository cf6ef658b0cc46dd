//! Sheet lifecycle controller: the outward-facing component.
//!
//! Owns the animation driver, the gesture arbiter, and the single piece of
//! state the host is allowed to observe: the committed detent. Everything
//! the gesture pipeline wants the host to know crosses over as a discrete
//! [`SheetEvent`], queued fire-and-forget at a commit point and drained by
//! the host at its own pace; per-frame values never do.

use std::collections::VecDeque;

use tracing::debug;

use super::arbiter::{GestureArbiter, GestureOutcome};
use super::horizontal::{SwipeDirection, SwipeOutcome};
use super::vertical::VerticalOutcome;
use crate::animation::{AnimationDriver, AnimationState, CardTarget};
use crate::config::SheetConfig;
use crate::model::cursor::{SiblingCursor, SiblingId};
use crate::model::detent::{Detent, DetentError, DetentSet};
use crate::model::gesture::{DragEvent, DragPhase};
use crate::model::viewport::Viewport;

/// Lifecycle phase of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Off-screen, at rest.
    Closed,
    /// Springing in toward the large detent.
    Opening,
    /// On-screen at (or settling toward) a committed detent.
    Open,
    /// Animating off-screen.
    Closing,
}

/// Discrete commit crossing from the gesture pipeline to the host.
///
/// These are the only observable outputs besides the committed detent;
/// hosts map them onto their own callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetEvent {
    /// The committed detent changed (gesture end or programmatic open).
    /// Never carries [`Detent::Dismissed`].
    DetentChanged(Detent),
    /// A user dismiss finished animating; the host should close the sheet.
    CloseRequested,
    /// A card exit finished and a valid neighbor exists; the host should
    /// switch to this record.
    SiblingChanged(SiblingId),
}

/// A commit waiting for its animation to finish.
///
/// Fires when the driving spring reaches rest, or at the fallback deadline
/// if the spring is cancelled or stalls. Either way it fires exactly once.
#[derive(Debug, Clone, PartialEq)]
enum PendingCommit {
    /// Finish a close: flip to `Closed` and optionally notify the host.
    Close {
        /// Emit [`SheetEvent::CloseRequested`] when firing (user dismiss
        /// path; an externally driven close stays silent).
        notify: bool,
        /// Absolute clock time after which the commit fires regardless.
        deadline: f64,
    },
    /// Finish a card exit: reset the card and optionally navigate.
    Exit {
        /// Neighbor to navigate to; `None` plays the animation only.
        target: Option<SiblingId>,
        /// Absolute clock time after which the commit fires regardless.
        deadline: f64,
    },
}

/// The interactive snap-point sheet controller.
///
/// One parameterized instance serves every sheet in an application:
/// detent fractions, the swipe flag, and all gesture thresholds come from
/// [`SheetConfig`]. Hosts feed it visibility, sibling ids, pointer samples
/// and frame ticks, and read back [`AnimationState`] snapshots plus the
/// drained [`SheetEvent`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetController {
    config: SheetConfig,
    viewport: Viewport,
    detents: DetentSet,
    driver: AnimationDriver,
    arbiter: GestureArbiter,
    cursor: SiblingCursor,
    phase: LifecyclePhase,
    committed: Option<Detent>,
    pending: Vec<PendingCommit>,
    events: VecDeque<SheetEvent>,
    clock: f64,
}

impl SheetController {
    /// Build a closed controller for the given viewport.
    ///
    /// # Errors
    ///
    /// Returns [`DetentError`] when the configured detent fractions do not
    /// form a strictly increasing table.
    pub fn new(viewport: Viewport, config: SheetConfig) -> Result<Self, DetentError> {
        let detents = DetentSet::compute(viewport.height, &config.fractions)?;
        let driver = AnimationDriver::new(detents.offset(Detent::Dismissed));
        Ok(Self {
            config,
            viewport,
            detents,
            driver,
            arbiter: GestureArbiter::new(),
            cursor: SiblingCursor::empty(),
            phase: LifecyclePhase::Closed,
            committed: None,
            pending: Vec::new(),
            events: VecDeque::new(),
            clock: 0.0,
        })
    }

    /// Recompute the detent table for a new viewport.
    ///
    /// While open, the sheet springs to the committed detent's offset in
    /// the new table.
    ///
    /// # Errors
    ///
    /// Returns [`DetentError`] when the configured fractions are invalid
    /// for any viewport (the table is left unchanged in that case).
    pub fn set_viewport(&mut self, viewport: Viewport) -> Result<(), DetentError> {
        self.detents = DetentSet::compute(viewport.height, &self.config.fractions)?;
        self.viewport = viewport;
        match (self.phase, self.committed) {
            (LifecyclePhase::Opening | LifecyclePhase::Open, Some(detent)) => {
                self.driver
                    .spring_vertical(self.detents.offset(detent), self.config.tuning.sheet_spring);
            }
            (LifecyclePhase::Closed, _) => {
                self.driver
                    .set_vertical(self.detents.offset(Detent::Dismissed));
            }
            (LifecyclePhase::Closing, _) => {
                self.driver.spring_vertical(
                    self.detents.offset(Detent::Dismissed),
                    self.config.tuning.sheet_spring,
                );
            }
            _ => {}
        }
        Ok(())
    }

    /// Replace the sibling list and the active record id.
    ///
    /// Call whenever either prop changes; the cursor is a read-only view
    /// and is never advanced by the controller itself.
    pub fn set_siblings(&mut self, ordered_ids: Vec<SiblingId>, current_id: Option<SiblingId>) {
        self.cursor = SiblingCursor::new(ordered_ids, current_id);
    }

    /// Drive visibility from the host.
    ///
    /// `true` resets the animation state off-screen and springs the sheet
    /// open to the large detent. `false` is the externally driven close:
    /// the sheet springs out without the drag machinery and without
    /// emitting [`SheetEvent::CloseRequested`] (the host already knows).
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            if matches!(self.phase, LifecyclePhase::Closed | LifecyclePhase::Closing) {
                self.open();
            }
        } else if matches!(self.phase, LifecyclePhase::Opening | LifecyclePhase::Open) {
            self.begin_close(false);
        }
    }

    /// Programmatic dismiss: the same sequence as a user dismiss
    /// classification, including [`SheetEvent::CloseRequested`] once the
    /// close animation finishes.
    ///
    /// Idempotent: a second call while closing or closed is a no-op.
    pub fn dismiss(&mut self) {
        if matches!(self.phase, LifecyclePhase::Opening | LifecyclePhase::Open) {
            self.begin_close(true);
        }
    }

    /// Feed one pointer sample into the gesture pipeline.
    ///
    /// Ignored unless the sheet is opening or open; a drag that starts
    /// mid-open takes the spring over from the live value.
    pub fn handle_drag(&mut self, event: DragEvent) {
        if !matches!(self.phase, LifecyclePhase::Opening | LifecyclePhase::Open) {
            return;
        }
        if event.phase == DragPhase::Began && self.phase == LifecyclePhase::Opening {
            self.phase = LifecyclePhase::Open;
        }

        let outcome = self.arbiter.handle(
            &event,
            &self.detents,
            &self.viewport,
            &self.config,
            &mut self.driver,
        );
        if let Some(outcome) = outcome {
            self.apply_outcome(outcome, &event);
        }
    }

    /// Advance animations and deferred commits by one frame.
    ///
    /// Returns `true` while anything is still animating, so hosts can drop
    /// to an event-driven cadence when the sheet is at rest.
    pub fn tick(&mut self, dt: f64) -> bool {
        self.clock += dt;
        let animating = self.driver.tick(dt);

        if self.phase == LifecyclePhase::Opening && self.driver.vertical_at_rest() {
            self.phase = LifecyclePhase::Open;
        }

        let due = std::mem::take(&mut self.pending);
        for commit in due {
            if self.commit_due(&commit) {
                self.fire(commit);
            } else {
                self.pending.push(commit);
            }
        }

        animating
    }

    /// Drain all queued commit events, oldest first.
    pub fn drain_events(&mut self) -> Vec<SheetEvent> {
        self.events.drain(..).collect()
    }

    /// Read-only snapshot of the animation channels for rendering.
    pub fn animation(&self) -> AnimationState {
        self.driver.snapshot()
    }

    /// The committed detent, while one is observable.
    ///
    /// `Some` from open until a close begins; the value changes exactly
    /// once per settled gesture, never during a drag.
    pub fn committed_detent(&self) -> Option<Detent> {
        self.committed
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> LifecyclePhase {
        self.phase
    }

    /// Whether the sheet occupies the screen at all.
    pub fn is_visible(&self) -> bool {
        self.phase != LifecyclePhase::Closed
    }

    /// The active detent table.
    pub fn detents(&self) -> &DetentSet {
        &self.detents
    }

    /// The viewport the controller currently lays out against.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    // ===== internal transitions =====

    fn open(&mut self) {
        debug!("sheet opening");
        self.phase = LifecyclePhase::Opening;
        // A stale close/exit commit must not fire into the new cycle.
        self.pending.clear();
        self.arbiter.cancel();
        self.driver
            .set_vertical(self.detents.offset(Detent::Dismissed));
        self.driver.reset_card();
        self.driver.spring_vertical(
            self.detents.offset(Detent::Large),
            self.config.tuning.sheet_spring,
        );
        self.committed = Some(Detent::Large);
        self.events.push_back(SheetEvent::DetentChanged(Detent::Large));
    }

    fn begin_close(&mut self, notify: bool) {
        debug!(notify, "sheet closing");
        self.phase = LifecyclePhase::Closing;
        self.committed = None;
        self.arbiter.cancel();
        self.driver.spring_vertical(
            self.detents.offset(Detent::Dismissed),
            self.config.tuning.sheet_spring,
        );
        self.pending.push(PendingCommit::Close {
            notify,
            deadline: self.clock + self.config.tuning.settle_fallback,
        });
    }

    fn apply_outcome(&mut self, outcome: GestureOutcome, event: &DragEvent) {
        match outcome {
            GestureOutcome::Vertical(VerticalOutcome::Settle(detent)) => {
                self.driver.spring_vertical_with_velocity(
                    self.detents.offset(detent),
                    event.velocity_y,
                    self.config.tuning.sheet_spring,
                );
                if self.committed != Some(detent) {
                    self.committed = Some(detent);
                    self.events.push_back(SheetEvent::DetentChanged(detent));
                }
            }
            GestureOutcome::Vertical(VerticalOutcome::Dismiss) => {
                self.phase = LifecyclePhase::Closing;
                self.committed = None;
                self.driver.spring_vertical_with_velocity(
                    self.detents.offset(Detent::Dismissed),
                    event.velocity_y,
                    self.config.tuning.sheet_spring,
                );
                self.pending.push(PendingCommit::Close {
                    notify: true,
                    deadline: self.clock + self.config.tuning.settle_fallback,
                });
            }
            GestureOutcome::Horizontal(SwipeOutcome::Return) => {
                self.driver
                    .spring_card(CardTarget::neutral(), self.config.tuning.card_spring);
            }
            GestureOutcome::Horizontal(SwipeOutcome::Exit(direction)) => {
                // Rightward travel reveals the previous record, leftward
                // the next. Resolved now, fired after the exit animation.
                let target = match direction {
                    SwipeDirection::Rightward => self.cursor.previous(),
                    SwipeDirection::Leftward => self.cursor.next(),
                }
                .cloned();
                let sign = direction.sign();
                self.driver.spring_card(
                    CardTarget {
                        dx: sign * self.viewport.width,
                        dy: 0.0,
                        rotation: sign * self.config.tuning.max_rotation,
                        opacity: 0.0,
                    },
                    self.config.tuning.card_spring,
                );
                self.pending.push(PendingCommit::Exit {
                    target,
                    deadline: self.clock + self.config.tuning.exit_fallback,
                });
            }
        }
    }

    fn commit_due(&self, commit: &PendingCommit) -> bool {
        match commit {
            PendingCommit::Close { deadline, .. } => {
                self.driver.vertical_at_rest() || self.clock >= *deadline
            }
            PendingCommit::Exit { deadline, .. } => {
                self.driver.card_at_rest() || self.clock >= *deadline
            }
        }
    }

    fn fire(&mut self, commit: PendingCommit) {
        match commit {
            PendingCommit::Close { notify, .. } => {
                debug!(notify, "close commit fired");
                self.phase = LifecyclePhase::Closed;
                if notify {
                    self.events.push_back(SheetEvent::CloseRequested);
                }
            }
            PendingCommit::Exit { target, .. } => {
                debug!(?target, "exit commit fired");
                self.driver.reset_card();
                if let Some(id) = target {
                    self.events.push_back(SheetEvent::SiblingChanged(id));
                }
            }
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
