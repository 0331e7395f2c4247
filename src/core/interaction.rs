//! Hover/click state machine for interactive objects.
//!
//! The two axes are independent: hovering never touches the click state and
//! clicking never touches hover.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::ObjectId;

/// Pointer input after the host's hit-test resolved a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Enter(ObjectId),
    Leave(ObjectId),
    /// Click with the world-space intersection point
    Click { target: ObjectId, point: Vec3 },
}

impl PointerEvent {
    pub fn target(&self) -> ObjectId {
        match *self {
            PointerEvent::Enter(id) | PointerEvent::Leave(id) => id,
            PointerEvent::Click { target, .. } => target,
        }
    }
}

/// Advisory cursor style for the UI collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CursorStyle {
    #[default]
    Default,
    Pointer,
    Crosshair,
}

impl CursorStyle {
    /// CSS cursor keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Pointer => "pointer",
            CursorStyle::Crosshair => "crosshair",
        }
    }
}

impl fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-object interaction state
///
/// `click_count` only ever grows; every click counts, including the one that
/// toggles `clicked` back off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    hovered: bool,
    clicked: bool,
    click_count: u32,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn clicked(&self) -> bool {
        self.clicked
    }

    pub fn click_count(&self) -> u32 {
        self.click_count
    }

    pub fn enter(&mut self) {
        self.hovered = true;
    }

    pub fn leave(&mut self) {
        self.hovered = false;
    }

    pub fn click(&mut self) {
        self.clicked = !self.clicked;
        self.click_count = self.click_count.saturating_add(1);
    }

    /// Apply one event; the caller has already matched the target.
    /// Returns the cursor the UI should show afterwards, if it changes.
    pub fn apply(&mut self, event: &PointerEvent) -> Option<CursorStyle> {
        match event {
            PointerEvent::Enter(_) => {
                self.enter();
                Some(CursorStyle::Pointer)
            }
            PointerEvent::Leave(_) => {
                self.leave();
                Some(CursorStyle::Default)
            }
            PointerEvent::Click { .. } => {
                self.click();
                None
            }
        }
    }

    /// Label shown above the object
    pub fn label(&self) -> String {
        if self.click_count > 0 {
            format!("Clicks: {}", self.click_count)
        } else {
            "Click me!".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: ObjectId = ObjectId(0);

    fn click() -> PointerEvent {
        PointerEvent::Click { target: ID, point: Vec3::ZERO }
    }

    #[test]
    fn starts_idle() {
        let state = InteractionState::new();
        assert!(!state.hovered());
        assert!(!state.clicked());
        assert_eq!(state.click_count(), 0);
    }

    #[test]
    fn enter_and_leave_toggle_hover_and_cursor() {
        let mut state = InteractionState::new();

        assert_eq!(state.apply(&PointerEvent::Enter(ID)), Some(CursorStyle::Pointer));
        assert!(state.hovered());

        assert_eq!(state.apply(&PointerEvent::Leave(ID)), Some(CursorStyle::Default));
        assert!(!state.hovered());
    }

    #[test]
    fn click_toggles_and_always_counts() {
        let mut state = InteractionState::new();

        assert_eq!(state.apply(&click()), None);
        assert!(state.clicked());
        assert_eq!(state.click_count(), 1);

        state.apply(&click());
        assert!(!state.clicked());
        assert_eq!(state.click_count(), 2);
    }

    #[test]
    fn label_reflects_count() {
        let mut state = InteractionState::new();
        assert_eq!(state.label(), "Click me!");
        state.click();
        state.click();
        assert_eq!(state.label(), "Clicks: 2");
    }

    #[test]
    fn event_target() {
        assert_eq!(PointerEvent::Enter(ObjectId(4)).target(), ObjectId(4));
        assert_eq!(
            PointerEvent::Click { target: ObjectId(9), point: Vec3::ONE }.target(),
            ObjectId(9)
        );
    }

    #[test]
    fn cursor_keywords() {
        assert_eq!(CursorStyle::Pointer.to_string(), "pointer");
        assert_eq!(CursorStyle::Crosshair.as_str(), "crosshair");
        assert_eq!(CursorStyle::default(), CursorStyle::Default);
    }
}
