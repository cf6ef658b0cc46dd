//! Horizontal swipe state machine: the "card toss" between siblings.
//!
//! Consumes the pointer stream, live-writes the card transform (horizontal
//! and vertical offset, a tilt proportional to travel, and a fading
//! opacity) to simulate a tilting card, and classifies the release into
//! "snap back to center" or "exit left/right". Whether an exit actually
//! navigates anywhere is decided by the controller against the sibling
//! cursor; the machine only names the direction.

use crate::animation::AnimationDriver;
use crate::config::SheetTuning;
use crate::model::viewport::Viewport;

/// Phase of the horizontal interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    /// No drag in progress.
    Idle,
    /// Pointer down, but the movement-ratio guard has not yet passed.
    Tracking,
    /// Guard passed; live-writing the card transform each update.
    Swiping,
    /// Released; card springing back to neutral.
    Returning,
    /// Released; card tossed off-screen.
    Exiting,
}

/// Direction of card travel on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Toward negative x. Requests the next sibling.
    Leftward,
    /// Toward positive x. Requests the previous sibling.
    Rightward,
}

impl SwipeDirection {
    /// Sign of the direction on the x axis.
    pub fn sign(self) -> f64 {
        match self {
            SwipeDirection::Leftward => -1.0,
            SwipeDirection::Rightward => 1.0,
        }
    }
}

/// Release classification of a horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Spring all card values back to neutral.
    Return,
    /// Toss the card off-screen in the given direction.
    Exit(SwipeDirection),
}

/// The horizontal swipe interpreter.
#[derive(Debug, Clone, PartialEq)]
pub struct HorizontalSwipeMachine {
    phase: SwipePhase,
}

impl HorizontalSwipeMachine {
    /// A machine at rest.
    pub fn new() -> Self {
        Self {
            phase: SwipePhase::Idle,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// Whether this machine has claimed the active gesture.
    pub fn is_swiping(&self) -> bool {
        self.phase == SwipePhase::Swiping
    }

    /// Drag start: park the card at neutral and begin tracking.
    pub fn begin(&mut self, driver: &mut AnimationDriver) {
        self.phase = SwipePhase::Tracking;
        driver.reset_card();
    }

    /// Per-frame drag update.
    ///
    /// The gesture is treated as a horizontal swipe only while
    /// `|translation_x| > 2 * |translation_y|`, so a mostly-vertical drag is
    /// never partially interpreted as horizontal. While the guard holds the
    /// card follows the finger, tilts linearly with horizontal travel, and
    /// fades down to the configured opacity floor.
    ///
    /// Returns `true` while this machine holds the gesture claim.
    pub fn update(
        &mut self,
        translation_x: f64,
        translation_y: f64,
        viewport: &Viewport,
        tuning: &SheetTuning,
        driver: &mut AnimationDriver,
    ) -> bool {
        match self.phase {
            SwipePhase::Tracking | SwipePhase::Swiping => {}
            _ => return false,
        }

        let guard_holds = translation_x.abs() > 2.0 * translation_y.abs();
        if !guard_holds {
            // Claim is sticky: a frame that dips under the ratio pauses the
            // card but does not hand the gesture back.
            return self.phase == SwipePhase::Swiping;
        }

        self.phase = SwipePhase::Swiping;
        let rotation = translation_x / viewport.width * tuning.max_rotation;
        let opacity = (1.0 - translation_x.abs() / (0.5 * viewport.width))
            .max(tuning.min_card_opacity);
        driver.set_card(translation_x, translation_y, rotation, opacity);
        true
    }

    /// Release classification.
    ///
    /// Exit on either enough travel or enough release speed, in the
    /// direction actually traveled; anything else snaps back to center.
    /// Returns `None` unless the gesture was claimed.
    pub fn end(
        &mut self,
        translation_x: f64,
        velocity_x: f64,
        tuning: &SheetTuning,
    ) -> Option<SwipeOutcome> {
        if self.phase != SwipePhase::Swiping {
            self.phase = SwipePhase::Idle;
            return None;
        }

        let fast = velocity_x.abs() > tuning.exit_velocity;
        let far = translation_x.abs() > tuning.exit_distance;
        if !(fast || far) {
            self.phase = SwipePhase::Returning;
            return Some(SwipeOutcome::Return);
        }

        // A fling decides the direction even against the net travel.
        let directional = if fast { velocity_x } else { translation_x };
        let direction = if directional > 0.0 {
            SwipeDirection::Rightward
        } else {
            SwipeDirection::Leftward
        };
        self.phase = SwipePhase::Exiting;
        Some(SwipeOutcome::Exit(direction))
    }

    /// Drop any active gesture without classifying.
    pub fn cancel(&mut self) {
        self.phase = SwipePhase::Idle;
    }
}

impl Default for HorizontalSwipeMachine {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "horizontal_tests.rs"]
mod tests;
