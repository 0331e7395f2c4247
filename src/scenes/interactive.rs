use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::math::{hex_rgb, Transform};
use crate::scene::{AnimationParams, Behavior, ObjectSpec, SceneBlueprint};

/// Rest positions of the three clickable boxes, left to right
pub const INTERACTIVE_BOX_POSITIONS: [Vec3; 3] = [
    Vec3::new(-1.5, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.5, 0.0, 0.0),
];

const BOX_COLORS: [u32; 3] = [0x6366f1, 0xf59e0b, 0xec4899];
const HOVER_COLOR: u32 = 0x22c55e;
const FLOOR_Y: f32 = -0.8;

/// Three hover/click boxes over a floor that takes click markers.
///
/// Object ids: the boxes are 0..3 in [`INTERACTIVE_BOX_POSITIONS`] order,
/// the floor is 3.
pub fn create_interactive_scene() -> SceneBlueprint {
    let toggle = Behavior::Toggle {
        hover_lift: 0.3,
        click_scale: 1.2,
        spin_step: 0.1,
        wobble: 0.1,
    };

    let boxes = INTERACTIVE_BOX_POSITIONS
        .iter()
        .zip(BOX_COLORS)
        .enumerate()
        .map(|(i, (&position, color))| {
            let params = AnimationParams::new(Transform::at(position), hex_rgb(color))
                .with_hover_color(hex_rgb(HOVER_COLOR))
                .with_behavior(toggle);
            ObjectSpec::new(format!("box_{i}"), params).interactive()
        });

    let floor = AnimationParams::new(
        Transform::at(Vec3::new(0.0, FLOOR_Y, 0.0)).with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
        hex_rgb(0x1e293b),
    );

    SceneBlueprint {
        objects: boxes
            .chain(std::iter::once(ObjectSpec::new("floor", floor).surface(Vec3::Y)))
            .collect(),
        group_spin: 0.0,
    }
}

