//! Damped approach (exponential smoothing) toward a target value.
//!
//! Each step closes a fixed fraction `alpha` of the remaining distance:
//! `v' = v + (t - v) * alpha`. For `alpha` in `(0, 1]` this converges
//! monotonically and never overshoots.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// A value that can be eased toward a target one step at a time.
///
/// Vector implementations apply the same factor independently per axis.
pub trait DampedProperty: Copy {
    fn approach(self, target: Self, alpha: f32) -> Self;
}

impl DampedProperty for f32 {
    #[inline]
    fn approach(self, target: Self, alpha: f32) -> Self {
        self + (target - self) * alpha
    }
}

impl DampedProperty for Vec3 {
    #[inline]
    fn approach(self, target: Self, alpha: f32) -> Self {
        self + (target - self) * alpha
    }
}

/// Free-function form of [`DampedProperty::approach`]
#[inline]
pub fn approach<T: DampedProperty>(current: T, target: T, alpha: f32) -> T {
    current.approach(target, alpha)
}

/// Per-frame factor that gives the same real-time convergence as `alpha`
/// applied once per frame at `reference_fps`.
pub fn frame_rate_independent(alpha: f32, delta: f32, reference_fps: f32) -> f32 {
    1.0 - (1.0 - alpha).powf(delta * reference_fps)
}

/// How the smoothing factor relates to frame time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum SmoothingMode {
    /// `alpha` is applied once per frame regardless of delta, so convergence
    /// speed depends on frame rate.
    #[default]
    PerFrame,
    /// `alpha` is rescaled by delta so convergence matches a
    /// `reference_fps` host at any frame rate.
    DeltaNormalized { reference_fps: f32 },
}

/// Validated smoothing factor plus its frame-time policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothing {
    alpha: f32,
    mode: SmoothingMode,
}

impl Smoothing {
    pub fn new(alpha: f32, mode: SmoothingMode) -> Result<Self, SceneError> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(SceneError::invalid(format!(
                "smoothing factor must be in (0, 1], got {alpha}"
            )));
        }
        if let SmoothingMode::DeltaNormalized { reference_fps } = mode {
            if !(reference_fps > 0.0 && reference_fps.is_finite()) {
                return Err(SceneError::invalid(format!(
                    "reference_fps must be positive, got {reference_fps}"
                )));
            }
        }
        Ok(Self { alpha, mode })
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn mode(&self) -> SmoothingMode {
        self.mode
    }

    /// Fraction of remaining distance to close this frame
    pub fn factor(&self, delta: f32) -> f32 {
        match self.mode {
            SmoothingMode::PerFrame => self.alpha,
            SmoothingMode::DeltaNormalized { reference_fps } => {
                frame_rate_independent(self.alpha, delta, reference_fps)
            }
        }
    }

    /// Multiplier for fixed per-frame increments (e.g. "spin 0.1 rad per frame")
    pub fn step_scale(&self, delta: f32) -> f32 {
        match self.mode {
            SmoothingMode::PerFrame => 1.0,
            SmoothingMode::DeltaNormalized { reference_fps } => delta * reference_fps,
        }
    }

    pub fn step<T: DampedProperty>(&self, current: T, target: T, delta: f32) -> T {
        current.approach(target, self.factor(delta))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approach_closes_fraction_of_distance() {
        assert!((approach(0.0_f32, 10.0, 0.1) - 1.0).abs() < 1e-6);
        assert_eq!(approach(3.0_f32, 7.0, 1.0), 7.0);
    }

    #[test]
    fn approach_vector_per_axis() {
        let v = approach(Vec3::ZERO, Vec3::new(10.0, -10.0, 0.0), 0.5);
        assert_eq!(v, Vec3::new(5.0, -5.0, 0.0));
    }

    #[test]
    fn approach_never_overshoots_from_below() {
        let mut v = 0.0_f32;
        for _ in 0..200 {
            v = v.approach(1.0, 0.3);
            assert!(v <= 1.0);
        }
    }

    #[test]
    fn smoothing_rejects_out_of_range_alpha() {
        assert!(Smoothing::new(0.0, SmoothingMode::PerFrame).is_err());
        assert!(Smoothing::new(-0.1, SmoothingMode::PerFrame).is_err());
        assert!(Smoothing::new(1.5, SmoothingMode::PerFrame).is_err());
        assert!(Smoothing::new(f32::NAN, SmoothingMode::PerFrame).is_err());
        assert!(Smoothing::new(1.0, SmoothingMode::PerFrame).is_ok());
    }

    #[test]
    fn smoothing_rejects_bad_reference_fps() {
        let mode = SmoothingMode::DeltaNormalized { reference_fps: 0.0 };
        assert!(Smoothing::new(0.1, mode).is_err());
    }

    #[test]
    fn per_frame_ignores_delta() {
        let s = Smoothing::new(0.1, SmoothingMode::PerFrame).unwrap();
        assert_eq!(s.factor(0.001), 0.1);
        assert_eq!(s.factor(0.5), 0.1);
        assert_eq!(s.step_scale(0.5), 1.0);
    }

    #[test]
    fn normalized_matches_reference_rate() {
        let s = Smoothing::new(0.1, SmoothingMode::DeltaNormalized { reference_fps: 60.0 }).unwrap();
        assert!((s.factor(1.0 / 60.0) - 0.1).abs() < 1e-5);

        // Two 120 Hz frames land where one 60 Hz frame does
        let fast = s.step(s.step(0.0_f32, 1.0, 1.0 / 120.0), 1.0, 1.0 / 120.0);
        let slow = s.step(0.0_f32, 1.0, 1.0 / 60.0);
        assert!((fast - slow).abs() < 1e-5);
    }

    #[test]
    fn smoothing_mode_serde_shape() {
        let json = serde_json::to_string(&SmoothingMode::DeltaNormalized { reference_fps: 60.0 }).unwrap();
        assert_eq!(json, r#"{"mode":"delta_normalized","reference_fps":60.0}"#);

        let parsed: SmoothingMode = serde_json::from_str(r#"{"mode":"per_frame"}"#).unwrap();
        assert_eq!(parsed, SmoothingMode::PerFrame);
    }
}
