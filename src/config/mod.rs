//! Configuration module.
//!
//! Every tuned constant of the controller lives here: velocity cutoffs,
//! slacks, the rotation cap, detent fractions, spring parameters. They are
//! deliberately configuration rather than invariants; hosts resolve them
//! through the precedence chain in [`loader`].

pub mod loader;

pub use loader::{
    apply_cli_overrides, apply_env_overrides, default_config_path, default_log_path,
    load_config_file, load_config_with_precedence, merge_config, ConfigError, ConfigFile,
    ResolvedConfig,
};

use crate::animation::SpringParams;
use crate::model::detent::DetentFractions;

/// Full controller configuration: detent layout, the swipe-enable flag,
/// and the gesture tuning constants.
///
/// One parameterized controller replaces per-screen variants: hosts that
/// only resize pass `swipe_enabled: false`, hosts with sibling navigation
/// leave it on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    /// Viewport-height fractions for the four open detents.
    pub fractions: DetentFractions,
    /// Whether horizontal card swipes are recognized at all.
    pub swipe_enabled: bool,
    /// Gesture classification thresholds and animation tunings.
    pub tuning: SheetTuning,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            fractions: DetentFractions::default(),
            swipe_enabled: true,
            tuning: SheetTuning::default(),
        }
    }
}

/// Gesture classification thresholds and animation tunings.
///
/// Distances are in points, velocities in points per second, durations in
/// seconds, rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetTuning {
    /// Slack past the mini detent the sheet may be dragged into before
    /// dismissal becomes possible.
    pub overshoot_slack: f64,
    /// Distance past the mini detent a release must reach to count as a
    /// dismiss.
    pub dismiss_slack: f64,
    /// Downward release velocity a dismiss additionally requires.
    pub dismiss_velocity: f64,
    /// Upward flick speed that snaps straight to the large detent.
    pub fast_up_velocity: f64,
    /// Downward flick speed that snaps straight to the mini detent.
    pub fast_down_velocity: f64,
    /// Horizontal travel past which a release exits the card.
    pub exit_distance: f64,
    /// Horizontal release speed past which a release exits the card.
    pub exit_velocity: f64,
    /// Rotation at a full-viewport-width horizontal displacement.
    pub max_rotation: f64,
    /// Floor for card opacity while swiping.
    pub min_card_opacity: f64,
    /// Fallback deadline for the close commit after a dismiss animation.
    pub settle_fallback: f64,
    /// Fallback deadline for the sibling commit after a card exit.
    pub exit_fallback: f64,
    /// Spring used for sheet resize, open, and dismiss transitions.
    pub sheet_spring: SpringParams,
    /// Spring used for card return and exit transitions.
    pub card_spring: SpringParams,
}

impl Default for SheetTuning {
    fn default() -> Self {
        Self {
            overshoot_slack: 100.0,
            dismiss_slack: 30.0,
            dismiss_velocity: 200.0,
            fast_up_velocity: 500.0,
            fast_down_velocity: 500.0,
            exit_distance: 50.0,
            exit_velocity: 500.0,
            max_rotation: 15.0_f64.to_radians(),
            min_card_opacity: 0.3,
            settle_fallback: 0.3,
            exit_fallback: 0.2,
            sheet_spring: SpringParams::sheet(),
            card_spring: SpringParams::card(),
        }
    }
}
