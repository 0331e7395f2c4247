//! Stateless periodic drivers for idle motion.
//!
//! Every function here is a pure function of elapsed time, so any number of
//! objects can share them.

use glam::Vec3;

/// Sine wave used for floating/bobbing motion
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatWave {
    pub amplitude: f32,
    pub frequency: f32,
}

impl FloatWave {
    pub const fn new(amplitude: f32, frequency: f32) -> Self {
        Self { amplitude, frequency }
    }

    #[inline]
    pub fn offset(&self, t: f32, phase: f32) -> f32 {
        float_offset(t, phase, self.frequency, self.amplitude)
    }
}

/// `sin(t * frequency + phase) * amplitude`
#[inline]
pub fn float_offset(t: f32, phase: f32, frequency: f32, amplitude: f32) -> f32 {
    (t * frequency + phase).sin() * amplitude
}

/// Angle after spinning at `speed` rad/s for `t` seconds
#[inline]
pub fn spin(t: f32, speed: f32) -> f32 {
    t * speed
}

/// Per-axis spin, one speed per Euler axis
#[inline]
pub fn spin_axes(t: f32, speeds: Vec3) -> Vec3 {
    speeds * t
}

/// Small secondary rotation, `sin(t) * amplitude`
#[inline]
pub fn wobble(t: f32, amplitude: f32) -> f32 {
    t.sin() * amplitude
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn float_offset_peaks_at_amplitude() {
        assert!((float_offset(FRAC_PI_2, 0.0, 1.0, 0.3) - 0.3).abs() < 1e-6);
        assert!(float_offset(0.0, 0.0, 2.0, 0.3).abs() < 1e-6);
    }

    #[test]
    fn phase_desynchronises_identical_waves() {
        let wave = FloatWave::new(0.3, 1.0);
        let a = wave.offset(1.0, 0.0);
        let b = wave.offset(1.0, PI);
        assert!((a + b).abs() < 1e-5);
    }

    #[test]
    fn spin_is_linear_in_time() {
        assert_eq!(spin(2.0, 0.5), 1.0);
        assert_eq!(spin_axes(2.0, Vec3::new(0.25, 0.5, 0.0)), Vec3::new(0.5, 1.0, 0.0));
    }

    #[test]
    fn wobble_is_bounded() {
        for i in 0..100 {
            assert!(wobble(i as f32 * 0.37, 0.1).abs() <= 0.1 + 1e-6);
        }
    }

    #[test]
    fn drivers_are_pure() {
        assert_eq!(wobble(1.234, 0.1), wobble(1.234, 0.1));
        assert_eq!(float_offset(3.0, 0.5, 2.0, 0.3), float_offset(3.0, 0.5, 2.0, 0.3));
    }
}
