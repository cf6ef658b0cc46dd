//! Owner of the sheet's continuous presentation values.
//!
//! The driver bundles the five animation channels (sheet vertical offset
//! plus the card's horizontal/vertical/rotation/opacity transform) behind a
//! single-writer rule: only this crate's state machines and controller
//! mutate them, and they do so either with per-frame live writes or by
//! starting springs. Hosts read [`AnimationState`] snapshots and otherwise
//! observe the sheet only through the controller's discrete events.

use super::spring::SpringParams;
use super::value::AnimatedValue;

/// Read-only snapshot of the five animation channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Sheet top edge, as an offset-from-top in points.
    pub vertical_offset: f64,
    /// Card horizontal displacement in points.
    pub card_dx: f64,
    /// Card vertical displacement in points.
    pub card_dy: f64,
    /// Card rotation in radians, positive clockwise.
    pub card_rotation: f64,
    /// Card opacity in `[0, 1]`.
    pub card_opacity: f64,
}

/// Target transform for a card spring transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTarget {
    /// Horizontal displacement target in points.
    pub dx: f64,
    /// Vertical displacement target in points.
    pub dy: f64,
    /// Rotation target in radians.
    pub rotation: f64,
    /// Opacity target in `[0, 1]`.
    pub opacity: f64,
}

impl CardTarget {
    /// The neutral card transform: centered, unrotated, fully opaque.
    pub fn neutral() -> Self {
        Self {
            dx: 0.0,
            dy: 0.0,
            rotation: 0.0,
            opacity: 1.0,
        }
    }
}

/// Holds and advances the sheet's animation channels.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDriver {
    vertical_offset: AnimatedValue,
    card_dx: AnimatedValue,
    card_dy: AnimatedValue,
    card_rotation: AnimatedValue,
    card_opacity: AnimatedValue,
}

impl AnimationDriver {
    /// A driver parked at the given vertical offset with a neutral card.
    pub fn new(vertical_offset: f64) -> Self {
        Self {
            vertical_offset: AnimatedValue::new(vertical_offset),
            card_dx: AnimatedValue::new(0.0),
            card_dy: AnimatedValue::new(0.0),
            card_rotation: AnimatedValue::new(0.0),
            card_opacity: AnimatedValue::new(1.0),
        }
    }

    /// Advance every active spring by one frame. Returns `true` while any
    /// channel is still animating.
    pub fn tick(&mut self, dt: f64) -> bool {
        // Bitwise-or on purpose: every channel must tick even once one
        // reports further animation.
        self.vertical_offset.tick(dt)
            | self.card_dx.tick(dt)
            | self.card_dy.tick(dt)
            | self.card_rotation.tick(dt)
            | self.card_opacity.tick(dt)
    }

    /// Snapshot of all five channels for rendering.
    pub fn snapshot(&self) -> AnimationState {
        AnimationState {
            vertical_offset: self.vertical_offset.get(),
            card_dx: self.card_dx.get(),
            card_dy: self.card_dy.get(),
            card_rotation: self.card_rotation.get(),
            card_opacity: self.card_opacity.get(),
        }
    }

    /// Current sheet vertical offset.
    pub fn vertical_offset(&self) -> f64 {
        self.vertical_offset.get()
    }

    /// Whether the vertical channel has no active spring.
    pub fn vertical_at_rest(&self) -> bool {
        !self.vertical_offset.is_animating()
    }

    /// Whether all four card channels have no active spring.
    pub fn card_at_rest(&self) -> bool {
        !(self.card_dx.is_animating()
            || self.card_dy.is_animating()
            || self.card_rotation.is_animating()
            || self.card_opacity.is_animating())
    }

    /// Live-write the sheet vertical offset (per-frame drag update).
    pub(crate) fn set_vertical(&mut self, offset: f64) {
        self.vertical_offset.set(offset);
    }

    /// Spring the sheet vertical offset toward `target`.
    pub(crate) fn spring_vertical(&mut self, target: f64, params: SpringParams) {
        self.vertical_offset.spring_to(target, params);
    }

    /// Spring the sheet vertical offset toward `target`, seeded with the
    /// gesture's release velocity.
    pub(crate) fn spring_vertical_with_velocity(
        &mut self,
        target: f64,
        velocity: f64,
        params: SpringParams,
    ) {
        self.vertical_offset
            .spring_to_with_velocity(target, velocity, params);
    }

    /// Live-write the card transform (per-frame swipe update).
    pub(crate) fn set_card(&mut self, dx: f64, dy: f64, rotation: f64, opacity: f64) {
        self.card_dx.set(dx);
        self.card_dy.set(dy);
        self.card_rotation.set(rotation);
        self.card_opacity.set(opacity);
    }

    /// Spring all four card channels toward a target transform. The four
    /// springs are independent; none blocks or perturbs another.
    pub(crate) fn spring_card(&mut self, target: CardTarget, params: SpringParams) {
        self.card_dx.spring_to(target.dx, params);
        self.card_dy.spring_to(target.dy, params);
        self.card_rotation.spring_to(target.rotation, params);
        self.card_opacity.spring_to(target.opacity, params);
    }

    /// Park the card at the neutral transform immediately.
    pub(crate) fn reset_card(&mut self) {
        let neutral = CardTarget::neutral();
        self.set_card(neutral.dx, neutral.dy, neutral.rotation, neutral.opacity);
    }
}
