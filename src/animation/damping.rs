//! Half-life exponential damping.
//!
//! Every animated value in the engine (card transforms, material
//! parameters, scroll position, camera eye and look-at) approaches its
//! target through [`damp`]:
//!
//! ```text
//! new = target + (current - target) * 2^(-dt / half_life)
//! ```
//!
//! `half_life` is the time it takes for the remaining distance to halve.
//! The approach is frame-rate independent: two ticks of `dt/2` land on the
//! same value as one tick of `dt`.

use glam::{Vec2, Vec3};

/// Fraction of the remaining distance still left after `dt` seconds.
///
/// Returns `0.0` (instant snap) for non-positive or NaN half-lives and
/// `1.0` (no motion) for non-positive or NaN frame deltas.
#[inline]
#[must_use]
pub fn retention(half_life: f32, dt: f32) -> f32 {
    if half_life.is_nan() || half_life <= 0.0 {
        return 0.0;
    }
    if dt.is_nan() || dt <= 0.0 {
        return 1.0;
    }
    (-dt / half_life).exp2()
}

/// Damp a scalar toward `target`.
///
/// Never overshoots: the result always lies between `current` and
/// `target`. `damp(x, x, h, dt) == x` exactly. A non-finite `current`
/// snaps to `target` so a corrupted value cannot persist.
#[inline]
#[must_use]
pub fn damp(current: f32, target: f32, half_life: f32, dt: f32) -> f32 {
    if !current.is_finite() {
        return target;
    }
    let r = retention(half_life, dt);
    if r == 0.0 {
        return target;
    }
    if r == 1.0 {
        return current;
    }
    let value = target + (current - target) * r;
    value.clamp(current.min(target), current.max(target))
}

/// Values that can be damped toward a target.
///
/// Vector and color types apply the scalar formula componentwise.
pub trait Damp: Copy + PartialEq {
    /// Move `self` toward `target` by one frame of `dt` seconds.
    #[must_use]
    fn damp(self, target: Self, half_life: f32, dt: f32) -> Self;

    /// Largest absolute per-component difference to `other`.
    fn max_delta(&self, other: &Self) -> f32;
}

impl Damp for f32 {
    #[inline]
    fn damp(self, target: Self, half_life: f32, dt: f32) -> Self {
        damp(self, target, half_life, dt)
    }

    #[inline]
    fn max_delta(&self, other: &Self) -> f32 {
        (self - other).abs()
    }
}

impl Damp for Vec2 {
    #[inline]
    fn damp(self, target: Self, half_life: f32, dt: f32) -> Self {
        Self::new(
            damp(self.x, target.x, half_life, dt),
            damp(self.y, target.y, half_life, dt),
        )
    }

    #[inline]
    fn max_delta(&self, other: &Self) -> f32 {
        (*self - *other).abs().max_element()
    }
}

impl Damp for Vec3 {
    #[inline]
    fn damp(self, target: Self, half_life: f32, dt: f32) -> Self {
        Self::new(
            damp(self.x, target.x, half_life, dt),
            damp(self.y, target.y, half_life, dt),
            damp(self.z, target.z, half_life, dt),
        )
    }

    #[inline]
    fn max_delta(&self, other: &Self) -> f32 {
        (*self - *other).abs().max_element()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HALF_LIVES: [f32; 5] = [0.001, 0.05, 0.2, 1.0, 10.0];
    const DTS: [f32; 5] = [1.0e-4, 1.0 / 144.0, 1.0 / 60.0, 0.1, 2.0];

    #[test]
    fn fixed_point_is_exact() {
        for &h in &HALF_LIVES {
            for &dt in &DTS {
                for x in [-3.5_f32, 0.0, 0.1, 1.0e6] {
                    assert_eq!(damp(x, x, h, dt), x);
                }
            }
        }
    }

    #[test]
    fn never_overshoots() {
        let pairs = [(0.0_f32, 1.0_f32), (1.0, 0.1), (-5.0, 7.25), (3.0, -3.0)];
        for &(from, to) in &pairs {
            for &h in &HALF_LIVES {
                for &dt in &DTS {
                    let v = damp(from, to, h, dt);
                    assert!(
                        v >= from.min(to) && v <= from.max(to),
                        "damp({from}, {to}, {h}, {dt}) = {v}"
                    );
                }
            }
        }
    }

    #[test]
    fn non_positive_half_life_snaps() {
        assert_eq!(damp(0.0, 4.0, 0.0, 0.016), 4.0);
        assert_eq!(damp(0.0, 4.0, -1.0, 0.016), 4.0);
        assert_eq!(damp(0.0, 4.0, f32::NAN, 0.016), 4.0);
    }

    #[test]
    fn zero_dt_leaves_value_unchanged() {
        assert_eq!(damp(1.0, 4.0, 0.2, 0.0), 1.0);
        assert_eq!(damp(1.0, 4.0, 0.2, -0.5), 1.0);
    }

    #[test]
    fn half_life_halves_the_distance() {
        let v = damp(0.0, 8.0, 0.25, 0.25);
        assert!((v - 4.0).abs() < 1e-5, "got {v}");
    }

    #[test]
    fn converges_monotonically() {
        let mut v = 10.0_f32;
        let mut last_gap = f32::INFINITY;
        for _ in 0..200 {
            v = damp(v, 0.0, 0.1, 1.0 / 60.0);
            let gap = v.abs();
            assert!(gap <= last_gap);
            last_gap = gap;
        }
        assert!(last_gap < 1e-3);
    }

    #[test]
    fn split_ticks_match_single_tick() {
        let one = damp(0.0, 1.0, 0.3, 0.1);
        let two = damp(damp(0.0, 1.0, 0.3, 0.05), 1.0, 0.3, 0.05);
        assert!((one - two).abs() < 1e-6);
    }

    #[test]
    fn non_finite_current_recovers() {
        assert_eq!(damp(f32::NAN, 2.0, 0.2, 0.016), 2.0);
        assert_eq!(damp(f32::INFINITY, 2.0, 0.2, 0.016), 2.0);
    }

    #[test]
    fn vectors_damp_componentwise() {
        let from = Vec3::new(0.0, 10.0, -4.0);
        let to = Vec3::new(2.0, 10.0, 4.0);
        let v = from.damp(to, 0.5, 0.5);
        assert!((v - Vec3::new(1.0, 10.0, 0.0)).length() < 1e-5);
        assert_eq!(from.max_delta(&to), 8.0);

        let p = Vec2::new(-1.0, 1.0).damp(Vec2::ZERO, 0.0, 0.016);
        assert_eq!(p, Vec2::ZERO);
    }
}
