pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod frame;
pub mod generator;
pub mod math;
pub mod scene;
pub mod scenes;
pub mod stage;
pub mod traits;
pub mod types;

pub use config::SceneConfig;
pub use error::SceneError;
pub use scene::SceneHandle;
pub use scenes::{build_scene, build_scene_with_rng, SceneKind};
