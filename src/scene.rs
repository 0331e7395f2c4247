use glam::Vec3;

use crate::config::SceneConfig;
use crate::core::damped::Smoothing;
use crate::core::interaction::{CursorStyle, InteractionState, PointerEvent};
use crate::core::marker::{MarkerSlot, TransientMarker};
use crate::core::oscillator::{self, FloatWave};
use crate::core::queue::PointerQueue;
use crate::error::SceneError;
use crate::frame::FrameInfo;
use crate::math::Transform;
use crate::scenes::SceneKind;
use crate::traits::{CursorSurface, TransformSink};
use crate::types::ObjectId;

/// How an object moves each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Behavior {
    Static,
    /// Rotation integrated from frame delta, `rate` rad/s per axis
    Spin { rate: Vec3 },
    /// Rotation as a pure function of elapsed time, `rate` rad/s per axis
    Turntable { rate: Vec3 },
    /// Idle float on Y plus turntable spin scaled by the object's rotation speed
    Float { wave: FloatWave, spin: Vec3 },
    /// Float and spin, Z wobble, scale eased toward `hover_scale` while hovered
    Pulse {
        wave: FloatWave,
        spin: Vec3,
        wobble: f32,
        hover_scale: f32,
    },
    /// Lift while hovered; while clicked spin `spin_step` per frame and ease
    /// toward `click_scale`, otherwise wobble around Y
    Toggle {
        hover_lift: f32,
        click_scale: f32,
        spin_step: f32,
        wobble: f32,
    },
}

/// Immutable per-object recipe, fixed at scene build
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    /// Rest pose: base position, rotation offset, target scale
    pub base: Transform,
    pub rotation_speed: f32,
    pub phase: f32,
    pub behavior: Behavior,
    pub color: [f32; 3],
    pub hover_color: Option<[f32; 3]>,
}

impl AnimationParams {
    pub fn new(base: Transform, color: [f32; 3]) -> Self {
        Self {
            base,
            rotation_speed: 1.0,
            phase: 0.0,
            behavior: Behavior::Static,
            color,
            hover_color: None,
        }
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_phase(mut self, phase: f32) -> Self {
        self.phase = phase;
        self
    }

    pub fn with_rotation_speed(mut self, speed: f32) -> Self {
        self.rotation_speed = speed;
        self
    }

    pub fn with_hover_color(mut self, color: [f32; 3]) -> Self {
        self.hover_color = Some(color);
        self
    }
}

/// What pointer input does to an object
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Role {
    /// Ignores pointer input
    Decoration,
    /// Hover/click state machine
    Interactive(InteractionState),
    /// Tracks hover only; clicks pass through and the cursor is left alone
    Hoverable(InteractionState),
    /// Clicks drop a transient marker on this surface
    Surface { normal: Vec3 },
}

/// One object as declared by a scene blueprint
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectSpec {
    pub name: String,
    pub params: AnimationParams,
    pub role: Role,
    /// Child of the scene's spinning group rather than the scene root
    pub grouped: bool,
}

impl ObjectSpec {
    pub fn new(name: impl Into<String>, params: AnimationParams) -> Self {
        Self {
            name: name.into(),
            params,
            role: Role::Decoration,
            grouped: false,
        }
    }

    pub fn interactive(mut self) -> Self {
        self.role = Role::Interactive(InteractionState::new());
        self
    }

    pub fn hoverable(mut self) -> Self {
        self.role = Role::Hoverable(InteractionState::new());
        self
    }

    pub fn surface(mut self, normal: Vec3) -> Self {
        self.role = Role::Surface { normal };
        self
    }

    pub fn grouped(mut self) -> Self {
        self.grouped = true;
        self
    }
}

/// Object list plus scene-level motion
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SceneBlueprint {
    pub objects: Vec<ObjectSpec>,
    /// Y spin of the object group, rad/s
    pub group_spin: f32,
}

/// Live object: fixed recipe plus the state that changes every frame
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedObject {
    id: ObjectId,
    name: String,
    params: AnimationParams,
    role: Role,
    grouped: bool,
    transform: Transform,
}

impl AnimatedObject {
    fn from_spec(id: ObjectId, spec: ObjectSpec) -> Self {
        Self {
            id,
            name: spec.name,
            transform: spec.params.base,
            params: spec.params,
            role: spec.role,
            grouped: spec.grouped,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &AnimationParams {
        &self.params
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn grouped(&self) -> bool {
        self.grouped
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn interaction(&self) -> Option<&InteractionState> {
        match &self.role {
            Role::Interactive(state) | Role::Hoverable(state) => Some(state),
            _ => None,
        }
    }

    /// Colour to draw this frame
    pub fn color(&self) -> [f32; 3] {
        match (self.interaction(), self.params.hover_color) {
            (Some(state), Some(hover)) if state.hovered() => hover,
            _ => self.params.color,
        }
    }

    /// Text label for clickable objects
    pub fn label(&self) -> Option<String> {
        match &self.role {
            Role::Interactive(state) => Some(state.label()),
            _ => None,
        }
    }

    fn advance(&mut self, frame: &FrameInfo, smoothing: &Smoothing) {
        let t = frame.time;
        let base = &self.params.base;
        let state = self.interaction().copied().unwrap_or_default();
        let transform = &mut self.transform;

        match self.params.behavior {
            Behavior::Static => {}
            Behavior::Spin { rate } => {
                transform.rotation += rate * frame.delta;
            }
            Behavior::Turntable { rate } => {
                transform.rotation = base.rotation + oscillator::spin_axes(t, rate);
            }
            Behavior::Float { wave, spin } => {
                transform.position.y = base.position.y + wave.offset(t, self.params.phase);
                transform.rotation =
                    base.rotation + oscillator::spin_axes(t, spin * self.params.rotation_speed);
            }
            Behavior::Pulse {
                wave,
                spin,
                wobble,
                hover_scale,
            } => {
                transform.position.y = base.position.y + wave.offset(t, self.params.phase);
                transform.rotation = base.rotation
                    + oscillator::spin_axes(t, spin)
                    + Vec3::Z * oscillator::wobble(t, wobble);

                let factor = if state.hovered() { hover_scale } else { 1.0 };
                transform.scale = smoothing.step(transform.scale, base.scale * factor, frame.delta);
            }
            Behavior::Toggle {
                hover_lift,
                click_scale,
                spin_step,
                wobble,
            } => {
                let lift = if state.hovered() { hover_lift } else { 0.0 };
                transform.position.y =
                    smoothing.step(transform.position.y, base.position.y + lift, frame.delta);

                transform.rotation.y = if state.clicked() {
                    transform.rotation.y + spin_step * smoothing.step_scale(frame.delta)
                } else {
                    base.rotation.y + oscillator::wobble(t, wobble)
                };

                let factor = if state.clicked() { click_scale } else { 1.0 };
                transform.scale = smoothing.step(transform.scale, base.scale * factor, frame.delta);
            }
        }
    }
}

/// One built scene: owns its objects, marker slot and scene clock state.
///
/// The host drives it with [`tick`](Self::tick) once per rendered frame and
/// feeds hit-tested pointer input through
/// [`handle_pointer`](Self::handle_pointer) between ticks.
#[derive(Debug, Clone)]
pub struct SceneHandle {
    kind: SceneKind,
    objects: Vec<AnimatedObject>,
    group: Transform,
    group_spin: f32,
    smoothing: Smoothing,
    max_delta: f32,
    marker: MarkerSlot,
    elapsed: f32,
    frame_number: u64,
}

impl SceneHandle {
    pub fn new(
        kind: SceneKind,
        blueprint: SceneBlueprint,
        config: &SceneConfig,
    ) -> Result<Self, SceneError> {
        config.validate()?;

        let objects = blueprint
            .objects
            .into_iter()
            .enumerate()
            .map(|(i, spec)| AnimatedObject::from_spec(ObjectId(i as u32), spec))
            .collect();

        Ok(Self {
            kind,
            objects,
            group: Transform::IDENTITY,
            group_spin: blueprint.group_spin,
            smoothing: config.smoothing()?,
            max_delta: config.max_delta,
            marker: MarkerSlot::new(config.marker_ttl, config.marker_offset),
            elapsed: 0.0,
            frame_number: 0,
        })
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    /// Scene time as of the last tick
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn objects(&self) -> &[AnimatedObject] {
        &self.objects
    }

    pub fn object(&self, id: ObjectId) -> Option<&AnimatedObject> {
        self.objects.get(id.index())
    }

    pub fn find(&self, name: &str) -> Option<&AnimatedObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn interaction(&self, id: ObjectId) -> Option<&InteractionState> {
        self.object(id).and_then(AnimatedObject::interaction)
    }

    /// Transform of the spinning object group
    pub fn group_transform(&self) -> &Transform {
        &self.group
    }

    pub fn marker(&self) -> Option<&TransientMarker> {
        self.marker.current()
    }

    /// Apply one pointer event. Returns the cursor the UI should switch to,
    /// if this event changes it. Events for unknown ids are ignored.
    ///
    /// A surface click queues its marker; the marker goes live at the next
    /// tick, so its lifetime is counted from the first frame that can show it.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<CursorStyle> {
        self.dispatch(event, None)
    }

    /// As [`handle_pointer`](Self::handle_pointer), for hosts that know the
    /// scene time `now` at which the event happened. A surface click places
    /// its marker immediately, created at `now` (never earlier than the last
    /// tick).
    pub fn handle_pointer_at(&mut self, event: PointerEvent, now: f32) -> Option<CursorStyle> {
        self.dispatch(event, Some(now))
    }

    fn dispatch(&mut self, event: PointerEvent, now: Option<f32>) -> Option<CursorStyle> {
        let id = event.target();
        let Some(object) = self.objects.get_mut(id.index()) else {
            log::debug!("pointer event {:?} for missing object {}", event, id);
            return None;
        };

        match (&mut object.role, event) {
            (Role::Interactive(state), event) => state.apply(&event),
            (Role::Hoverable(state), PointerEvent::Enter(_)) => {
                state.enter();
                None
            }
            (Role::Hoverable(state), PointerEvent::Leave(_)) => {
                state.leave();
                None
            }
            (Role::Hoverable(_), PointerEvent::Click { .. }) => None,
            (Role::Surface { .. }, PointerEvent::Enter(_)) => Some(CursorStyle::Crosshair),
            (Role::Surface { .. }, PointerEvent::Leave(_)) => Some(CursorStyle::Default),
            (Role::Surface { normal }, PointerEvent::Click { point, .. }) => {
                let normal = *normal;
                match now {
                    Some(now) => {
                        self.marker.trigger(point, normal, now.max(self.elapsed));
                    }
                    None => self.marker.request(point, normal),
                }
                None
            }
            (Role::Decoration, _) => None,
        }
    }

    /// Drain queued input from another thread, forwarding cursor changes
    pub fn drain(&mut self, queue: &PointerQueue, cursor: &mut dyn CursorSurface) {
        for event in queue.drain() {
            if let Some(style) = self.handle_pointer(event) {
                cursor.set_cursor(style);
            }
        }
    }

    /// Advance every object to `elapsed`, make a queued marker live and evict
    /// an expired one.
    ///
    /// Touches nothing but object transforms, the group transform and the
    /// marker slot, so the result depends only on the arguments and the
    /// current state.
    pub fn tick(&mut self, elapsed: f32, delta: f32) {
        let mut frame = FrameInfo::new(self.frame_number, elapsed, delta).sanitized(self.max_delta);
        if !(frame.time >= self.elapsed) {
            log::warn!(
                "{}: elapsed went backwards ({} < {}), holding time",
                self.kind,
                frame.time,
                self.elapsed
            );
            frame.time = self.elapsed;
        }

        self.elapsed = frame.time;
        self.frame_number += 1;

        for object in &mut self.objects {
            object.advance(&frame, &self.smoothing);
        }
        self.group.rotation.y = oscillator::spin(frame.time, self.group_spin);
        self.marker.commit_pending(frame.time);
        self.marker.evict_expired(frame.time);
    }

    /// Tick from a frame description
    pub fn tick_frame(&mut self, frame: FrameInfo) {
        self.tick(frame.time, frame.delta);
    }

    /// Push the current transforms and marker to the render collaborator
    pub fn publish(&self, sink: &mut dyn TransformSink) {
        for object in &self.objects {
            sink.set_transform(object.id, &object.transform);
        }
        sink.set_group_transform(&self.group);
        sink.set_marker(self.marker.current());
    }
}
