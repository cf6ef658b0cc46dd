//! Vertical drag state machine: resize between detents or dismiss.
//!
//! Consumes the vertical component of the pointer stream, live-writes the
//! sheet offset into the animation driver every update, and classifies the
//! release into "dismiss" or "settle at a detent". The commit itself
//! (starting the settle spring and updating the committed detent) is the
//! controller's job, so the committed detent changes exactly once per
//! gesture, atomically, at drag end.

use crate::animation::AnimationDriver;
use crate::config::SheetTuning;
use crate::model::detent::{Detent, DetentSet};

/// Phase of the vertical interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalPhase {
    /// No drag in progress.
    Idle,
    /// Pointer down; live-writing the sheet offset each update.
    Dragging,
    /// Released; classified as a settle toward an open detent.
    Settling,
    /// Released; classified as a dismiss, sheet animating off-screen.
    DismissPending,
}

/// Release classification of a vertical drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalOutcome {
    /// Settle at the given open detent.
    Settle(Detent),
    /// Animate off-screen and request close.
    Dismiss,
}

/// The vertical drag interpreter.
#[derive(Debug, Clone, PartialEq)]
pub struct VerticalDragMachine {
    phase: VerticalPhase,
    origin: f64,
}

impl VerticalDragMachine {
    /// A machine at rest.
    pub fn new() -> Self {
        Self {
            phase: VerticalPhase::Idle,
            origin: 0.0,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> VerticalPhase {
        self.phase
    }

    /// Offset the active drag started from.
    pub fn origin(&self) -> f64 {
        self.origin
    }

    /// Drag start. `current_offset` is the sheet offset as animated so far,
    /// which makes a drag that interrupts a settling spring take over from
    /// the live value rather than the old target.
    pub fn begin(&mut self, current_offset: f64) {
        self.phase = VerticalPhase::Dragging;
        self.origin = current_offset;
    }

    /// Per-frame drag update: live-write the clamped candidate offset.
    ///
    /// The candidate is `origin + translation_y`, clamped between the large
    /// detent and the mini detent plus the overshoot slack, so the user
    /// feels resistance past the smallest open detent before dismissal
    /// becomes possible.
    pub fn update(
        &mut self,
        translation_y: f64,
        detents: &DetentSet,
        tuning: &SheetTuning,
        driver: &mut AnimationDriver,
    ) {
        if self.phase != VerticalPhase::Dragging {
            return;
        }
        let lower = detents.offset(Detent::Large);
        let upper = detents.offset(Detent::Mini) + tuning.overshoot_slack;
        let candidate = (self.origin + translation_y).clamp(lower, upper);
        driver.set_vertical(candidate);
    }

    /// Release classification.
    ///
    /// Dismiss requires both position past the mini detent plus the dismiss
    /// slack and a downward velocity above the dismiss threshold. Otherwise
    /// a fast flick picks `Large`/`Mini` outright and a normal release
    /// settles at the nearest open detent to the unclamped final position.
    ///
    /// Returns `None` unless the machine was actually dragging.
    pub fn end(
        &mut self,
        translation_y: f64,
        velocity_y: f64,
        detents: &DetentSet,
        tuning: &SheetTuning,
    ) -> Option<VerticalOutcome> {
        if self.phase != VerticalPhase::Dragging {
            return None;
        }
        let final_position = self.origin + translation_y;

        let past_dismiss_line =
            final_position > detents.offset(Detent::Mini) + tuning.dismiss_slack;
        if past_dismiss_line && velocity_y > tuning.dismiss_velocity {
            self.phase = VerticalPhase::DismissPending;
            return Some(VerticalOutcome::Dismiss);
        }

        let detent = if velocity_y < -tuning.fast_up_velocity {
            // Fast flick up always fully opens.
            Detent::Large
        } else if velocity_y > tuning.fast_down_velocity {
            // Fast flick down always collapses to minimal.
            Detent::Mini
        } else {
            detents.nearest_open(final_position)
        };
        self.phase = VerticalPhase::Settling;
        Some(VerticalOutcome::Settle(detent))
    }

    /// Drop any active drag without classifying. Used when the horizontal
    /// machine claims the gesture: a later `end` becomes inert.
    pub fn cancel(&mut self) {
        self.phase = VerticalPhase::Idle;
    }
}

impl Default for VerticalDragMachine {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "vertical_tests.rs"]
mod tests;
