use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use glam::Vec3;

use frame_scenes::cli::Cli;
use frame_scenes::core::{pointer_channel, CursorStyle, PointerEvent, PointerSender, TransientMarker};
use frame_scenes::frame::FrameIterator;
use frame_scenes::math::Transform;
use frame_scenes::scenes::{build_scene, SceneKind};
use frame_scenes::traits::{CursorSurface, TransformSink};
use frame_scenes::types::ObjectId;
use frame_scenes::{SceneConfig, SceneHandle};

// === Constants ===

/// Ids in the interactive scene
const MIDDLE_BOX: ObjectId = ObjectId(1);
const FLOOR: ObjectId = ObjectId(3);

// === Logging collaborators ===

/// Stands in for a renderer: records what it would draw
#[derive(Default)]
struct LogSink {
    writes: u64,
    marker: Option<Vec3>,
}

impl TransformSink for LogSink {
    fn set_transform(&mut self, id: ObjectId, transform: &Transform) {
        self.writes += 1;
        log::trace!(
            "{} pos={} rot={} scale={}",
            id,
            transform.position,
            transform.rotation,
            transform.scale
        );
    }

    fn set_marker(&mut self, marker: Option<&TransientMarker>) {
        let position = marker.map(|m| m.position);
        if position != self.marker {
            match marker {
                Some(m) => log::info!("marker shown at {} until t={:.2}s", m.position, m.expires_at()),
                None => log::info!("marker hidden"),
            }
            self.marker = position;
        }
    }
}

struct LogCursor;

impl CursorSurface for LogCursor {
    fn set_cursor(&mut self, style: CursorStyle) {
        log::info!("cursor -> {}", style);
    }
}

// === Scripted input ===

/// Pointer events to inject, keyed by frame number
fn script_for(kind: SceneKind, frame: u64) -> Vec<PointerEvent> {
    let click = |target, point| PointerEvent::Click { target, point };

    match (kind, frame) {
        (SceneKind::Interactive, 10) => vec![PointerEvent::Enter(MIDDLE_BOX)],
        (SceneKind::Interactive, 20 | 25 | 30) => vec![click(MIDDLE_BOX, Vec3::ZERO)],
        (SceneKind::Interactive, 60) => vec![PointerEvent::Leave(MIDDLE_BOX), PointerEvent::Enter(FLOOR)],
        (SceneKind::Interactive, 70) => vec![click(FLOOR, Vec3::new(2.0, 0.0, 3.0))],
        (SceneKind::Interactive, 90) => vec![PointerEvent::Leave(FLOOR)],
        (SceneKind::Animated, 30) => vec![PointerEvent::Enter(ObjectId(0))],
        (SceneKind::Animated, 90) => vec![PointerEvent::Leave(ObjectId(0))],
        _ => Vec::new(),
    }
}

fn feed(sender: &PointerSender, events: Vec<PointerEvent>) {
    for event in events {
        if !sender.send(event) {
            log::warn!("scene gone, dropping {:?}", event);
        }
    }
}

// === Setup ===

fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn load_config(cli: &Cli) -> Result<SceneConfig> {
    let mut config = match &cli.config {
        Some(path) => SceneConfig::load(path)
            .with_context(|| format!("loading scene config from {}", path.display()))?,
        None => SceneConfig::default(),
    };
    if let Some(scene) = cli.scene {
        config.scene = scene;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

fn summarize(scene: &SceneHandle, sink: &LogSink) {
    log::info!(
        "{} ({}) finished at t={:.3}s after {} frames, {} transform writes",
        scene.kind().title(),
        scene.kind().description(),
        scene.elapsed(),
        scene.frame_number(),
        sink.writes
    );
    for object in scene.objects() {
        let t = object.transform();
        match object.label() {
            Some(label) => log::info!("  {} {:<8} pos={} scale={} [{}]", object.id(), object.name(), t.position, t.scale.x, label),
            None => log::info!("  {} {:<8} pos={} scale={}", object.id(), object.name(), t.position, t.scale.x),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    anyhow::ensure!(cli.fps > 0.0, "--fps must be positive, got {}", cli.fps);

    let config = load_config(&cli)?;
    let mut scene = build_scene(&config).context("building scene")?;

    let (sender, queue) = pointer_channel();
    let mut sink = LogSink::default();
    let mut cursor = LogCursor;

    for frame in FrameIterator::new(cli.fps, cli.frames) {
        if cli.script {
            feed(&sender, script_for(scene.kind(), frame.number));
        }
        scene.drain(&queue, &mut cursor);
        scene.tick_frame(frame);
        scene.publish(&mut sink);
    }

    summarize(&scene, &sink);
    Ok(())
}
