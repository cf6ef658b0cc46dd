//! Damped-harmonic-oscillator spring for physically-settled transitions.
//!
//! Integrated with semi-implicit Euler in bounded substeps, which is stable
//! for the stiffness range the sheet uses and keeps the math dependency
//! free. A spring is "at rest" once both displacement and speed drop under
//! small thresholds, at which point the owning value snaps to the target.

/// Physical parameters of a spring transition.
///
/// Defaults mirror the animation primitive the sheet's feel was originally
/// tuned against: a slightly bouncy, light spring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Spring constant. Higher is snappier.
    pub stiffness: f64,
    /// Viscous damping coefficient. Higher kills oscillation sooner.
    pub damping: f64,
    /// Attached mass. Higher is more sluggish.
    pub mass: f64,
    /// When true, the value is clamped to the target on its first
    /// crossing instead of oscillating past it.
    pub overshoot_clamping: bool,
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 10.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringParams {
    /// A near-critically damped tuning suitable for sheet resize and
    /// dismiss transitions: settles without visible bounce.
    pub fn sheet() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }

    /// Tuning for card toss/return transitions: a touch stiffer so the
    /// exit reads as a throw.
    pub fn card() -> Self {
        Self {
            stiffness: 220.0,
            damping: 24.0,
            mass: 1.0,
            overshoot_clamping: false,
        }
    }
}

/// Displacement below which a spring can come to rest, in value units.
const REST_DISPLACEMENT: f64 = 0.01;
/// Speed below which a spring can come to rest, in value units per second.
const REST_SPEED: f64 = 2.0;
/// Largest integration substep. Frame deltas above this are subdivided.
const MAX_STEP: f64 = 1.0 / 120.0;
/// Upper bound on substeps per tick, so a huge stall cannot spin the loop.
const MAX_SUBSTEPS: usize = 240;

/// An in-flight spring transition toward a fixed target.
///
/// The spring carries its own velocity; the current position lives in the
/// [`AnimatedValue`](crate::animation::AnimatedValue) driving it, so a new
/// spring always starts from the value as-animated-so-far.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    target: f64,
    velocity: f64,
    params: SpringParams,
}

impl Spring {
    /// Start a spring toward `target` with zero initial velocity.
    pub fn new(target: f64, params: SpringParams) -> Self {
        Self::with_velocity(target, 0.0, params)
    }

    /// Start a spring toward `target` with an initial velocity, e.g. the
    /// release velocity of the gesture handing the value over.
    pub fn with_velocity(target: f64, velocity: f64, params: SpringParams) -> Self {
        Self {
            target,
            velocity,
            params,
        }
    }

    /// The value this spring is settling toward.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Advance the spring by `dt` seconds from `position`, returning the
    /// new position. Subdivides large deltas to keep integration stable.
    pub fn step(&mut self, position: f64, dt: f64) -> f64 {
        let substeps = ((dt / MAX_STEP).ceil() as usize).clamp(1, MAX_SUBSTEPS);
        let h = dt / substeps as f64;

        let mut x = position;
        for _ in 0..substeps {
            let displacement_before = x - self.target;
            let acceleration = (-self.params.stiffness * displacement_before
                - self.params.damping * self.velocity)
                / self.params.mass;
            self.velocity += acceleration * h;
            x += self.velocity * h;

            if self.params.overshoot_clamping {
                let displacement_after = x - self.target;
                if displacement_before != 0.0
                    && displacement_after != 0.0
                    && displacement_before.signum() != displacement_after.signum()
                {
                    // First crossing: clamp and stop.
                    x = self.target;
                    self.velocity = 0.0;
                    break;
                }
            }
        }
        x
    }

    /// Whether the spring has effectively stopped moving at `position`.
    pub fn is_settled(&self, position: f64) -> bool {
        (position - self.target).abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_SPEED
    }
}
