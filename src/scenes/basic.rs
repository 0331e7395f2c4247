use glam::Vec3;

use crate::math::{hex_rgb, Transform};
use crate::scene::{AnimationParams, Behavior, ObjectSpec, SceneBlueprint};

/// Single indigo cube spun by frame delta
pub fn create_basic_scene() -> SceneBlueprint {
    let cube = AnimationParams::new(Transform::IDENTITY.with_uniform_scale(1.5), hex_rgb(0x6366f1))
        .with_behavior(Behavior::Spin {
            rate: Vec3::new(0.2, 0.5, 0.0),
        });

    SceneBlueprint {
        objects: vec![ObjectSpec::new("cube", cube)],
        group_spin: 0.0,
    }
}
