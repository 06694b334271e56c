//! A damped value paired with the target it chases.

use super::damping::Damp;

/// Current/target pair advanced once per frame.
///
/// The target is expected to be rewritten from state every frame; the
/// current value only ever moves toward whatever the latest target is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed<T> {
    /// Value as rendered this frame.
    pub current: T,
    /// Value the current one is approaching.
    pub target: T,
}

impl<T: Damp> Smoothed<T> {
    /// A settled pair with `current == target == value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Replace the target; the current value is left untouched.
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Advance `current` toward `target`.
    ///
    /// Once every component is within `epsilon` of the target the value
    /// snaps exactly, so motion ends in finite time. Returns `true` while
    /// still in motion.
    pub fn tick(&mut self, half_life: f32, dt: f32, epsilon: f32) -> bool {
        if self.current == self.target {
            return false;
        }
        self.current = self.current.damp(self.target, half_life, dt);
        if self.current.max_delta(&self.target) <= epsilon {
            self.current = self.target;
        }
        self.current != self.target
    }

    /// Jump straight to the target.
    pub fn snap(&mut self) {
        self.current = self.target;
    }

    /// Whether `current` is within `epsilon` of `target`.
    #[must_use]
    pub fn is_settled(&self, epsilon: f32) -> bool {
        self.current.max_delta(&self.target) <= epsilon
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn settles_exactly_in_finite_time() {
        let mut s = Smoothed::new(0.0_f32);
        s.set_target(1.0);
        let mut frames = 0;
        while s.tick(0.05, 1.0 / 60.0, 1e-4) {
            frames += 1;
            assert!(frames < 1_000, "never settled");
        }
        assert_eq!(s.current, 1.0);
        assert!(s.is_settled(0.0));
    }

    #[test]
    fn retargeting_mid_flight_continues_from_current() {
        let mut s = Smoothed::new(Vec3::ZERO);
        s.set_target(Vec3::X * 10.0);
        let _ = s.tick(0.1, 0.1, 1e-4);
        let midway = s.current;
        s.set_target(-Vec3::X);
        let _ = s.tick(0.1, 0.0, 1e-4);
        assert_eq!(s.current, midway);
        let _ = s.tick(0.1, 0.1, 1e-4);
        assert!(s.current.x < midway.x);
    }

    #[test]
    fn snap_jumps_to_target() {
        let mut s = Smoothed::new(2.0_f32);
        s.set_target(-2.0);
        s.snap();
        assert_eq!(s.current, -2.0);
        assert!(!s.tick(0.2, 0.016, 1e-4));
    }
}
