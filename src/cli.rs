// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::scenes::SceneKind;

#[derive(Parser, Debug, Clone)]
#[command(name = "frame-scenes")]
#[command(about = "Headless host for the frame-driven lesson scenes", long_about = None)]
pub struct Cli {
    /// Scene to run; overrides the config file
    #[arg(long, value_enum)]
    pub scene: Option<SceneKind>,

    /// Number of frames to simulate
    #[arg(long, default_value_t = 180)]
    pub frames: u64,

    /// Simulated frame rate
    #[arg(long, default_value_t = 60.0)]
    pub fps: f32,

    /// JSON scene config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for generated instances; overrides the config file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Replay a scripted hover/click sequence against the scene
    #[arg(long, default_value = "false")]
    pub script: bool,
}
