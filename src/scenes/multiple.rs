use glam::Vec3;
use rand::Rng;

use crate::config::GeneratorConfig;
use crate::core::oscillator::FloatWave;
use crate::error::SceneError;
use crate::generator::SceneInstanceGenerator;
use crate::math::{hex_rgb, Transform};
use crate::scene::{AnimationParams, Behavior, ObjectSpec, SceneBlueprint};

const FLOAT: FloatWave = FloatWave::new(0.3, 1.0);
const GROUP_SPIN: f32 = 0.1;

/// Generated floating boxes in a slowly turning group around a fixed sphere
pub fn create_multiple_scene<R: Rng + ?Sized>(
    generator: &GeneratorConfig,
    rng: &mut R,
) -> Result<SceneBlueprint, SceneError> {
    let generator = SceneInstanceGenerator::new(*generator)?;

    let boxes = generator.generate(rng).into_iter().enumerate().map(|(i, d)| {
        let params = AnimationParams::new(Transform::at(d.position).with_uniform_scale(d.scale), d.color)
            .with_phase(d.phase)
            .with_rotation_speed(d.rotation_speed)
            .with_behavior(Behavior::Float {
                wave: FLOAT,
                spin: Vec3::new(0.5, 1.0, 0.0),
            });
        ObjectSpec::new(format!("box_{i}"), params).grouped()
    });

    let sphere = AnimationParams::new(Transform::IDENTITY.with_uniform_scale(0.5), hex_rgb(0xffffff));

    Ok(SceneBlueprint {
        objects: boxes
            .chain(std::iter::once(ObjectSpec::new("sphere", sphere)))
            .collect(),
        group_spin: GROUP_SPIN,
    })
}
