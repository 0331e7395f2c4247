use std::fmt;

use glam::Vec3;

/// Stable key of an object inside one scene's object table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub u32);

impl ObjectId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Procedurally placed object recipe produced once per scene build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InstanceDescriptor {
    pub position: Vec3,
    /// Hue in degrees, [0, 360)
    pub hue: f32,
    pub color: [f32; 3],
    pub scale: f32,
    /// Radians per second
    pub rotation_speed: f32,
    /// Radians, [0, 2π)
    pub phase: f32,
}
