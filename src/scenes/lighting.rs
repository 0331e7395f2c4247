use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::math::{hex_rgb, Transform};
use crate::scene::{AnimationParams, Behavior, ObjectSpec, SceneBlueprint};

/// Three shapes on turntables over a static floor
pub fn create_lighting_scene() -> SceneBlueprint {
    let turntable = |position: Vec3, color: u32, rate: Vec3| {
        AnimationParams::new(Transform::at(position), hex_rgb(color))
            .with_behavior(Behavior::Turntable { rate })
    };

    let floor = AnimationParams::new(
        Transform::at(Vec3::new(0.0, -1.2, 0.0)).with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
        hex_rgb(0x1f2937),
    );
    let point_light = AnimationParams::new(Transform::at(Vec3::new(-3.0, 2.0, -3.0)), hex_rgb(0xff6b6b));

    SceneBlueprint {
        objects: vec![
            ObjectSpec::new("sphere", turntable(Vec3::new(-2.0, 0.0, 0.0), 0x6366f1, Vec3::new(0.0, 0.3, 0.0))),
            ObjectSpec::new("torus", turntable(Vec3::ZERO, 0xf59e0b, Vec3::new(0.5, 0.3, 0.0))),
            ObjectSpec::new("cone", turntable(Vec3::new(2.0, -0.3, 0.0), 0xec4899, Vec3::new(0.0, 0.4, 0.0))),
            ObjectSpec::new("floor", floor),
            ObjectSpec::new("point_light_marker", point_light),
        ],
        group_spin: 0.0,
    }
}
