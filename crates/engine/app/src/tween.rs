//! Time-based interpolation with yoyo and repeat

use crate::easing::Ease;
use glam::Vec3;

/// Values a [`Tween`] can animate
pub trait Interpolate: Copy {
    fn interpolate(from: Self, to: Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Interpolate for Vec3 {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        from.lerp(to, t)
    }
}

/// Animation from one value to another over `duration` seconds
///
/// With `repeat = n` the tween plays `n + 1` cycles. With `yoyo` every odd
/// cycle plays backwards, so a yoyo tween with one repeat ends where it
/// started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<T> {
    from: T,
    to: T,
    duration: f32,
    ease: Ease,
    yoyo: bool,
    repeat: u32,
    elapsed: f32,
}

impl<T: Interpolate> Tween<T> {
    pub fn new(from: T, to: T, duration: f32, ease: Ease) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            ease,
            yoyo: false,
            repeat: 0,
            elapsed: 0.0,
        }
    }

    /// Play `repeat` extra cycles
    pub fn with_repeat(mut self, repeat: u32) -> Self {
        self.repeat = repeat;
        self
    }

    /// Reverse direction on every other cycle
    pub fn with_yoyo(mut self, yoyo: bool) -> Self {
        self.yoyo = yoyo;
        self
    }

    /// Advance by `dt` seconds and return the new value
    pub fn update(&mut self, dt: f32) -> T {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.total_duration());
        }
        self.value()
    }

    /// Value at the current time
    pub fn value(&self) -> T {
        T::interpolate(self.from, self.to, self.ease.apply(self.progress()))
    }

    /// Linear progress of the current cycle, direction applied
    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.directed(self.repeat, 1.0);
        }
        let cycles = self.elapsed / self.duration;
        let cycle = (cycles.floor() as u32).min(self.repeat);
        let local = (cycles - cycle as f32).clamp(0.0, 1.0);
        self.directed(cycle, local)
    }

    fn directed(&self, cycle: u32, local: f32) -> f32 {
        if self.yoyo && cycle % 2 == 1 {
            1.0 - local
        } else {
            local
        }
    }

    /// Length of all cycles together
    pub fn total_duration(&self) -> f32 {
        self.duration * (self.repeat + 1) as f32
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.total_duration()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn from(&self) -> T {
        self.from
    }

    pub fn to(&self) -> T {
        self.to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_midpoint() {
        let mut tween = Tween::new(0.0f32, 10.0, 2.0, Ease::Linear);
        assert_eq!(tween.update(1.0), 5.0);
        assert!(!tween.is_finished());
        assert_eq!(tween.update(5.0), 10.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_yoyo_returns_to_start() {
        let mut tween = Tween::new(0.0f32, 0.5, 0.5, Ease::Power2InOut)
            .with_yoyo(true)
            .with_repeat(1);
        assert!((tween.update(0.5) - 0.5).abs() < 1e-6, "peak after first cycle");
        assert!((tween.total_duration() - 1.0).abs() < 1e-6);
        assert_eq!(tween.update(0.5), 0.0);
        assert!(tween.is_finished());
    }

    #[test]
    fn test_repeat_without_yoyo_restarts() {
        let mut tween = Tween::new(0.0f32, 1.0, 1.0, Ease::Linear).with_repeat(1);
        assert!((tween.update(1.25) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let tween = Tween::new(Vec3::ZERO, Vec3::ONE, 0.0, Ease::Linear);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), Vec3::ONE);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut tween = Tween::new(0.0f32, 1.0, 1.0, Ease::Linear);
        tween.update(0.5);
        assert_eq!(tween.update(-1.0), 0.5);
    }
}
