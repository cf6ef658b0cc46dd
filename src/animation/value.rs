//! A continuous presentation value: live-written during drags, spring
//! driven while settling, parked otherwise.

use super::spring::{Spring, SpringParams};

/// A single animation-rate value.
///
/// Exactly one thing moves it at a time: a live write (the gesture's
/// per-frame update) or an active spring. A live write cancels any
/// in-flight spring, and a new spring starts from the value
/// as-animated-so-far, never from a remembered old target. This is what
/// makes a drag that starts mid-settle take over cleanly.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedValue {
    value: f64,
    spring: Option<Spring>,
}

impl AnimatedValue {
    /// A parked value.
    pub fn new(value: f64) -> Self {
        Self {
            value,
            spring: None,
        }
    }

    /// Current value.
    pub fn get(&self) -> f64 {
        self.value
    }

    /// Live write. Cancels any in-flight spring.
    pub fn set(&mut self, value: f64) {
        self.spring = None;
        self.value = value;
    }

    /// Begin a spring transition toward `target` from the current value.
    pub fn spring_to(&mut self, target: f64, params: SpringParams) {
        self.spring = Some(Spring::new(target, params));
    }

    /// Begin a spring transition seeded with an initial velocity (e.g. the
    /// gesture's release velocity).
    pub fn spring_to_with_velocity(&mut self, target: f64, velocity: f64, params: SpringParams) {
        self.spring = Some(Spring::with_velocity(target, velocity, params));
    }

    /// Advance one frame. Returns `true` while a spring is still active.
    pub fn tick(&mut self, dt: f64) -> bool {
        let Some(spring) = self.spring.as_mut() else {
            return false;
        };
        self.value = spring.step(self.value, dt);
        if spring.is_settled(self.value) {
            self.value = spring.target();
            self.spring = None;
            return false;
        }
        true
    }

    /// Whether a spring is currently driving this value.
    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    /// Target of the active spring, if any.
    pub fn target(&self) -> Option<f64> {
        self.spring.as_ref().map(Spring::target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn settle(value: &mut AnimatedValue, max_seconds: f64) {
        let ticks = (max_seconds / DT).round() as usize;
        for _ in 0..ticks {
            if !value.tick(DT) {
                return;
            }
        }
    }

    #[test]
    fn parked_value_reports_not_animating() {
        let mut value = AnimatedValue::new(7.0);
        assert!(!value.is_animating());
        assert!(!value.tick(DT));
        assert_eq!(value.get(), 7.0);
    }

    #[test]
    fn spring_settles_on_target_and_parks() {
        let mut value = AnimatedValue::new(0.0);
        value.spring_to(120.0, SpringParams::sheet());
        settle(&mut value, 3.0);
        assert_eq!(value.get(), 120.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn live_write_cancels_spring() {
        let mut value = AnimatedValue::new(0.0);
        value.spring_to(100.0, SpringParams::sheet());
        value.tick(DT);
        value.set(42.0);
        assert!(!value.is_animating());
        assert_eq!(value.get(), 42.0);
        assert!(!value.tick(DT), "cancelled spring must not keep running");
        assert_eq!(value.get(), 42.0);
    }

    #[test]
    fn new_spring_starts_from_value_as_animated_so_far() {
        let mut value = AnimatedValue::new(0.0);
        value.spring_to(100.0, SpringParams::sheet());
        for _ in 0..6 {
            value.tick(DT);
        }
        let mid_flight = value.get();
        assert!(mid_flight > 0.0 && mid_flight < 100.0);

        // Retarget before settling: motion continues from mid-flight value.
        value.spring_to(0.0, SpringParams::sheet());
        value.tick(DT);
        assert!(
            (value.get() - mid_flight).abs() < mid_flight,
            "retargeted spring must not jump to either endpoint"
        );
    }

    #[test]
    fn target_visible_while_animating() {
        let mut value = AnimatedValue::new(0.0);
        assert_eq!(value.target(), None);
        value.spring_to(55.0, SpringParams::default());
        assert_eq!(value.target(), Some(55.0));
    }
}
