//! Host-side scene selection.
//!
//! Only the active scene receives ticks and pointer input. Switching drops
//! the old scene outright; nothing it owned outlives it.

use crate::config::SceneConfig;
use crate::core::interaction::{CursorStyle, PointerEvent};
use crate::error::SceneError;
use crate::scene::SceneHandle;
use crate::scenes::{build_scene, SceneKind};
use crate::traits::TransformSink;

pub struct Stage {
    config: SceneConfig,
    active: SceneHandle,
    /// Host time at which the active scene was selected
    started_at: f32,
}

impl Stage {
    /// Build the scene named by `config.scene` and make it active
    pub fn new(config: SceneConfig) -> Result<Self, SceneError> {
        let active = build_scene(&config)?;
        Ok(Self {
            config,
            active,
            started_at: 0.0,
        })
    }

    pub fn active(&self) -> &SceneHandle {
        &self.active
    }

    pub fn active_mut(&mut self) -> &mut SceneHandle {
        &mut self.active
    }

    pub fn kind(&self) -> SceneKind {
        self.active.kind()
    }

    /// Switch scenes at host time `now`. On error the current scene stays.
    pub fn select(&mut self, kind: SceneKind, now: f32) -> Result<&mut SceneHandle, SceneError> {
        let config = SceneConfig {
            scene: kind,
            ..self.config.clone()
        };
        let scene = build_scene(&config)?;

        log::info!("switching scene {} -> {}", self.active.kind(), kind);
        self.config = config;
        self.active = scene;
        self.started_at = now;
        Ok(&mut self.active)
    }

    /// Tick the active scene with host time mapped to scene time
    pub fn tick(&mut self, host_elapsed: f32, delta: f32) {
        let elapsed = (host_elapsed - self.started_at).max(0.0);
        self.active.tick(elapsed, delta);
    }

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<CursorStyle> {
        self.active.handle_pointer(event)
    }

    /// Pointer event stamped with host time
    pub fn handle_pointer_at(&mut self, event: PointerEvent, host_now: f32) -> Option<CursorStyle> {
        let now = (host_now - self.started_at).max(0.0);
        self.active.handle_pointer_at(event, now)
    }

    pub fn publish(&self, sink: &mut dyn TransformSink) {
        self.active.publish(sink);
    }
}
