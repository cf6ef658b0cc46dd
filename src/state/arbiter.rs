//! Gesture arbiter: one pointer stream, two competing interpreters.
//!
//! Both state machines observe the same drag. The vertical machine is the
//! primary resize/dismiss interpreter; the horizontal machine claims the
//! gesture through its own movement-ratio guard, and the claim is sticky
//! for the remainder of that gesture. The arbiter never cancels either
//! recognizer before classification is possible; its job is routing, plus
//! containing bad frames (non-finite input, a panicking handler) so a
//! single broken update can never tear down the gesture pipeline.

use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, error, warn};

use super::horizontal::{HorizontalSwipeMachine, SwipeOutcome};
use super::vertical::{VerticalDragMachine, VerticalOutcome};
use crate::animation::AnimationDriver;
use crate::config::SheetConfig;
use crate::model::detent::DetentSet;
use crate::model::gesture::{DragEvent, DragPhase};
use crate::model::viewport::Viewport;

/// Classified outcome of a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The gesture was a vertical resize or dismiss.
    Vertical(VerticalOutcome),
    /// The gesture was a horizontal card swipe.
    Horizontal(SwipeOutcome),
}

/// Routes a pointer stream to the two gesture interpreters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GestureArbiter {
    vertical: VerticalDragMachine,
    horizontal: HorizontalSwipeMachine,
}

impl GestureArbiter {
    /// An arbiter with both machines at rest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the horizontal machine currently holds the gesture.
    pub fn horizontal_claimed(&self) -> bool {
        self.horizontal.is_swiping()
    }

    /// Drop any in-flight gesture without classifying (used by the
    /// controller when visibility changes out from under a drag).
    pub fn cancel(&mut self) {
        self.vertical.cancel();
        self.horizontal.cancel();
    }

    /// Feed one pointer sample. Returns a classified outcome on the
    /// gesture's end sample, `None` otherwise.
    pub fn handle(
        &mut self,
        event: &DragEvent,
        detents: &DetentSet,
        viewport: &Viewport,
        config: &SheetConfig,
        driver: &mut AnimationDriver,
    ) -> Option<GestureOutcome> {
        if !event.is_finite() {
            warn!(?event, "dropping non-finite drag sample");
            return None;
        }

        match event.phase {
            DragPhase::Began => {
                self.vertical.begin(driver.vertical_offset());
                if config.swipe_enabled {
                    self.horizontal.begin(driver);
                }
                None
            }
            DragPhase::Moved => {
                // A bad frame must not take the pipeline down: contain any
                // panic, log it, and treat the frame as no movement.
                let update = catch_unwind(AssertUnwindSafe(|| {
                    self.moved(event, detents, viewport, config, driver);
                }));
                if update.is_err() {
                    error!("gesture update handler panicked; frame ignored");
                }
                None
            }
            DragPhase::Ended => self.ended(event, detents, config),
        }
    }

    fn moved(
        &mut self,
        event: &DragEvent,
        detents: &DetentSet,
        viewport: &Viewport,
        config: &SheetConfig,
        driver: &mut AnimationDriver,
    ) {
        let claimed_before = self.horizontal.is_swiping();
        let claimed = config.swipe_enabled
            && self.horizontal.update(
                event.translation_x,
                event.translation_y,
                viewport,
                &config.tuning,
                driver,
            );

        if claimed {
            if !claimed_before {
                // The card took the gesture: return the sheet to where the
                // drag started and make the vertical release inert.
                debug!(
                    tx = event.translation_x,
                    ty = event.translation_y,
                    "horizontal machine claimed gesture"
                );
                let origin = self.vertical.origin();
                self.vertical.cancel();
                driver.spring_vertical(origin, config.tuning.sheet_spring);
            }
            return;
        }

        self.vertical
            .update(event.translation_y, detents, &config.tuning, driver);
    }

    fn ended(
        &mut self,
        event: &DragEvent,
        detents: &DetentSet,
        config: &SheetConfig,
    ) -> Option<GestureOutcome> {
        if self.horizontal.is_swiping() {
            self.vertical.cancel();
            let outcome = self
                .horizontal
                .end(event.translation_x, event.velocity_x, &config.tuning)?;
            debug!(?outcome, "horizontal gesture classified");
            return Some(GestureOutcome::Horizontal(outcome));
        }

        // Hand the tracking state back even though no swipe happened.
        self.horizontal.cancel();
        let outcome = self.vertical.end(
            event.translation_y,
            event.velocity_y,
            detents,
            &config.tuning,
        )?;
        debug!(?outcome, "vertical gesture classified");
        Some(GestureOutcome::Vertical(outcome))
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "arbiter_tests.rs"]
mod tests;
