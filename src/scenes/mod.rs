//! The lesson scenes, one module each.
//!
//! Each module builds a fixed [`SceneBlueprint`]; only the generated scene
//! takes input, its [`GeneratorConfig`](crate::config::GeneratorConfig) and a
//! random source. [`build_scene`] picks the blueprint named by a
//! [`SceneConfig`] and wraps it into a live [`SceneHandle`].

mod animated;
mod basic;
mod interactive;
mod lighting;
mod multiple;

use std::fmt;

use clap::ValueEnum;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::SceneConfig;
use crate::error::SceneError;
use crate::scene::{SceneBlueprint, SceneHandle};

pub use animated::create_animated_scene;
pub use basic::create_basic_scene;
pub use interactive::{create_interactive_scene, INTERACTIVE_BOX_POSITIONS};
pub use lighting::create_lighting_scene;
pub use multiple::create_multiple_scene;

/// Selectable lesson scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    #[default]
    Basic,
    Animated,
    Lighting,
    Multiple,
    Interactive,
}

impl SceneKind {
    pub const ALL: [SceneKind; 5] = [
        SceneKind::Basic,
        SceneKind::Animated,
        SceneKind::Lighting,
        SceneKind::Multiple,
        SceneKind::Interactive,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SceneKind::Basic => "basic",
            SceneKind::Animated => "animated",
            SceneKind::Lighting => "lighting",
            SceneKind::Multiple => "multiple",
            SceneKind::Interactive => "interactive",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SceneKind::Basic => "1. Basic Cube",
            SceneKind::Animated => "2. Animated Box",
            SceneKind::Lighting => "3. Lighting Scene",
            SceneKind::Multiple => "4. Multiple Objects",
            SceneKind::Interactive => "5. Interactive Scene",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SceneKind::Basic => "A simple rotating cube",
            SceneKind::Animated => "Per-frame animation with a hover pulse",
            SceneKind::Lighting => "Different light types and materials",
            SceneKind::Multiple => "Creating and positioning multiple 3D objects",
            SceneKind::Interactive => "Click and hover interactions",
        }
    }

    /// Whether the scene draws instances from the generator
    pub fn uses_generator(&self) -> bool {
        matches!(self, SceneKind::Multiple)
    }

    fn blueprint<R: Rng + ?Sized>(
        &self,
        config: &SceneConfig,
        rng: &mut R,
    ) -> Result<SceneBlueprint, SceneError> {
        match self {
            SceneKind::Basic => Ok(create_basic_scene()),
            SceneKind::Animated => Ok(create_animated_scene()),
            SceneKind::Lighting => Ok(create_lighting_scene()),
            SceneKind::Multiple => create_multiple_scene(&config.generator, rng),
            SceneKind::Interactive => Ok(create_interactive_scene()),
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Build the scene named by `config.scene`.
///
/// Uses `config.seed` for generated instances when set, fresh OS entropy
/// otherwise.
pub fn build_scene(config: &SceneConfig) -> Result<SceneHandle, SceneError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    build_scene_with_rng(config, &mut rng)
}

/// Build with an injected random source
pub fn build_scene_with_rng<R: Rng + ?Sized>(
    config: &SceneConfig,
    rng: &mut R,
) -> Result<SceneHandle, SceneError> {
    config.validate()?;
    let blueprint = config.scene.blueprint(config, rng)?;
    log::info!(
        "built scene {} with {} objects",
        config.scene,
        blueprint.objects.len()
    );
    SceneHandle::new(config.scene, blueprint, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scene_builds() {
        for kind in SceneKind::ALL {
            let mut config = SceneConfig::for_scene(kind);
            config.seed = Some(7);
            let scene = build_scene(&config).unwrap();
            assert_eq!(scene.kind(), kind);
            assert!(!scene.objects().is_empty());
        }
    }

    #[test]
    fn keys_round_trip_through_serde() {
        for kind in SceneKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.key()));
        }
    }

    #[test]
    fn keys_match_cli_names() {
        for kind in SceneKind::ALL {
            assert_eq!(SceneKind::from_str(kind.key(), false), Ok(kind));
        }
    }

    #[test]
    fn titles_are_numbered_in_order() {
        for (i, kind) in SceneKind::ALL.iter().enumerate() {
            assert!(kind.title().starts_with(&format!("{}.", i + 1)));
        }
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        let mut config = SceneConfig::for_scene(SceneKind::Multiple);
        config.seed = Some(11);

        let a = build_scene(&config).unwrap();
        let b = build_scene(&config).unwrap();
        assert_eq!(a.objects(), b.objects());
    }
}
