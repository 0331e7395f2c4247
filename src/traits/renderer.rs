use crate::core::marker::TransientMarker;
use crate::math::Transform;
use crate::types::ObjectId;

/// Render collaborator - receives the transforms computed each frame
pub trait TransformSink {
    /// Write one object's local transform
    fn set_transform(&mut self, id: ObjectId, transform: &Transform);

    /// Write the transform of the group that grouped objects hang under
    fn set_group_transform(&mut self, _transform: &Transform) {}

    /// Show, move or hide the transient marker
    fn set_marker(&mut self, _marker: Option<&TransientMarker>) {}
}
