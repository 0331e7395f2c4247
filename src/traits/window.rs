use crate::core::interaction::CursorStyle;

/// UI collaborator for advisory cursor changes
///
/// Purely presentational; nothing in the scene depends on the request
/// succeeding.
pub trait CursorSurface {
    fn set_cursor(&mut self, style: CursorStyle);
}
