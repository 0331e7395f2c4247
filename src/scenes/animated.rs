use glam::Vec3;

use crate::core::oscillator::FloatWave;
use crate::math::{hex_rgb, Transform};
use crate::scene::{AnimationParams, Behavior, ObjectSpec, SceneBlueprint};

/// Floating, spinning box that swells while hovered
pub fn create_animated_scene() -> SceneBlueprint {
    let size = 1.2;
    let floating = AnimationParams::new(Transform::IDENTITY.with_uniform_scale(size), hex_rgb(0xf59e0b))
        .with_hover_color(hex_rgb(0x22c55e))
        .with_behavior(Behavior::Pulse {
            wave: FloatWave::new(0.3, 2.0),
            spin: Vec3::new(0.0, 0.5, 0.0),
            wobble: 0.1,
            hover_scale: 1.3,
        });

    let grid = AnimationParams::new(Transform::at(Vec3::new(0.0, -1.5, 0.0)), hex_rgb(0x444444));

    SceneBlueprint {
        objects: vec![
            ObjectSpec::new("box", floating).hoverable(),
            ObjectSpec::new("grid", grid),
        ],
        group_spin: 0.0,
    }
}
