use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{GeneratorConfig, Span};
use crate::error::SceneError;
use crate::math::hsl_to_rgb;
use crate::types::InstanceDescriptor;

/// Scatters instance recipes at scene construction time
///
/// Positions are uniform in a cube, hues uniform over the colour wheel at a
/// fixed saturation/lightness, scale and rotation speed uniform in their
/// configured ranges, phase uniform over a full turn.
#[derive(Debug, Clone)]
pub struct SceneInstanceGenerator {
    config: GeneratorConfig,
}

impl SceneInstanceGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, SceneError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate with an injected random source
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<InstanceDescriptor> {
        (0..self.config.count).map(|_| self.sample(rng)).collect()
    }

    /// Reproducible batch for a given seed
    pub fn generate_seeded(&self, seed: u64) -> Vec<InstanceDescriptor> {
        self.generate(&mut StdRng::seed_from_u64(seed))
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> InstanceDescriptor {
        let h = self.config.half_extent;
        let position = Vec3::new(
            rng.random_range(-h..=h),
            rng.random_range(-h..=h),
            rng.random_range(-h..=h),
        );
        let hue = rng.random_range(0.0..360.0);

        InstanceDescriptor {
            position,
            hue,
            color: hsl_to_rgb(hue, self.config.saturation, self.config.lightness),
            scale: sample_span(rng, self.config.scale),
            rotation_speed: sample_span(rng, self.config.rotation_speed),
            phase: rng.random_range(0.0..TAU),
        }
    }
}

fn sample_span<R: Rng + ?Sized>(rng: &mut R, span: Span) -> f32 {
    rng.random_range(span.min..=span.max)
}
