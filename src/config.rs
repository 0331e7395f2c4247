//! Scene configuration.
//!
//! Every field has a default matching the lesson scenes, so an empty JSON
//! object is a valid config. Values are validated when a scene is built and
//! out-of-range values are rejected rather than clamped.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::damped::{Smoothing, SmoothingMode};
use crate::error::SceneError;
use crate::scenes::SceneKind;

/// Closed interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn validate(&self, name: &str) -> Result<(), SceneError> {
        if !(self.min.is_finite() && self.max.is_finite()) || self.min > self.max {
            return Err(SceneError::invalid(format!(
                "{name} must be an ordered finite range, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

/// Parameters for procedurally generated instances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub count: usize,
    /// Positions are sampled in `[-half_extent, half_extent]` per axis
    pub half_extent: f32,
    pub scale: Span,
    pub rotation_speed: Span,
    pub saturation: f32,
    pub lightness: f32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 20,
            half_extent: 3.0,
            scale: Span::new(0.2, 0.6),
            rotation_speed: Span::new(0.5, 2.0),
            saturation: 0.7,
            lightness: 0.6,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.count == 0 {
            return Err(SceneError::invalid("generator count must be positive"));
        }
        if !(self.half_extent > 0.0 && self.half_extent.is_finite()) {
            return Err(SceneError::invalid(format!(
                "half_extent must be positive, got {}",
                self.half_extent
            )));
        }
        self.scale.validate("scale")?;
        if self.scale.min <= 0.0 {
            return Err(SceneError::invalid(format!(
                "scale must be positive, got minimum {}",
                self.scale.min
            )));
        }
        self.rotation_speed.validate("rotation_speed")?;
        for (name, value) in [("saturation", self.saturation), ("lightness", self.lightness)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SceneError::invalid(format!("{name} must be in [0, 1], got {value}")));
            }
        }
        Ok(())
    }
}

/// Everything needed to build one scene instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub scene: SceneKind,
    /// Fraction of remaining distance closed per frame, (0, 1]
    pub smoothing: f32,
    pub smoothing_mode: SmoothingMode,
    /// Upper bound on a single frame's delta, seconds
    pub max_delta: f32,
    /// Lifetime of a floor-click marker, seconds
    pub marker_ttl: f32,
    /// Lift of a marker off its surface, world units
    pub marker_offset: f32,
    pub generator: GeneratorConfig,
    /// Fixed seed for the instance generator; `None` draws from the OS
    pub seed: Option<u64>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            scene: SceneKind::default(),
            smoothing: 0.1,
            smoothing_mode: SmoothingMode::PerFrame,
            max_delta: 0.1,
            marker_ttl: 2.0,
            marker_offset: 0.01,
            generator: GeneratorConfig::default(),
            seed: None,
        }
    }
}

impl SceneConfig {
    pub fn for_scene(scene: SceneKind) -> Self {
        Self {
            scene,
            ..Self::default()
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, SceneError> {
        let text = fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Validated smoothing policy
    pub fn smoothing(&self) -> Result<Smoothing, SceneError> {
        Smoothing::new(self.smoothing, self.smoothing_mode)
    }

    /// Check every field; the generator is only checked for scenes that use it
    pub fn validate(&self) -> Result<(), SceneError> {
        self.smoothing()?;
        if !(self.max_delta > 0.0 && self.max_delta.is_finite()) {
            return Err(SceneError::invalid(format!(
                "max_delta must be positive, got {}",
                self.max_delta
            )));
        }
        if !(self.marker_ttl > 0.0 && self.marker_ttl.is_finite()) {
            return Err(SceneError::invalid(format!(
                "marker_ttl must be positive, got {}",
                self.marker_ttl
            )));
        }
        if !(self.marker_offset >= 0.0 && self.marker_offset.is_finite()) {
            return Err(SceneError::invalid(format!(
                "marker_offset must be non-negative, got {}",
                self.marker_offset
            )));
        }
        if self.scene.uses_generator() {
            self.generator.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        for kind in SceneKind::ALL {
            assert!(SceneConfig::for_scene(kind).validate().is_ok(), "{kind:?}");
        }
    }

    #[test]
    fn empty_json_is_default() {
        let config = SceneConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SceneConfig::default());
    }

    #[test]
    fn partial_json_overrides_fields() {
        let config = SceneConfig::from_json_str(
            r#"{
                "scene": "multiple",
                "smoothing": 0.25,
                "smoothing_mode": { "mode": "delta_normalized", "reference_fps": 60.0 },
                "generator": { "count": 5, "scale": { "min": 0.1, "max": 0.2 } },
                "seed": 42
            }"#,
        )
        .unwrap();

        assert_eq!(config.scene, SceneKind::Multiple);
        assert_eq!(config.smoothing, 0.25);
        assert_eq!(config.smoothing_mode, SmoothingMode::DeltaNormalized { reference_fps: 60.0 });
        assert_eq!(config.generator.count, 5);
        assert_eq!(config.generator.half_extent, 3.0);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = SceneConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SceneError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SceneConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, SceneError::Io { .. }));
    }

    fn assert_rejected(mutate: impl Fn(&mut SceneConfig)) {
        let mut config = SceneConfig::default();
        mutate(&mut config);
        assert!(
            matches!(config.validate(), Err(SceneError::InvalidConfiguration(_))),
            "{config:?}"
        );
    }

    #[test]
    fn rejects_bad_values() {
        assert_rejected(|c| c.smoothing = 0.0);
        assert_rejected(|c| c.smoothing = 1.01);
        assert_rejected(|c| c.max_delta = 0.0);
        assert_rejected(|c| c.marker_ttl = 0.0);
        assert_rejected(|c| c.marker_ttl = -1.0);
        assert_rejected(|c| c.marker_offset = -0.01);
    }

    #[test]
    fn generator_checked_only_where_used() {
        let mut config = SceneConfig::for_scene(SceneKind::Interactive);
        config.generator.count = 0;
        assert!(config.validate().is_ok());

        config.scene = SceneKind::Multiple;
        assert!(config.validate().is_err());
    }

    fn assert_generator_rejected(mutate: impl Fn(&mut GeneratorConfig)) {
        let mut generator = GeneratorConfig::default();
        mutate(&mut generator);
        assert!(generator.validate().is_err(), "{generator:?}");
    }

    #[test]
    fn generator_rejects_bad_ranges() {
        assert_generator_rejected(|g| g.half_extent = 0.0);
        assert_generator_rejected(|g| g.scale = Span::new(0.6, 0.2));
        assert_generator_rejected(|g| g.scale = Span::new(0.0, 0.2));
        assert_generator_rejected(|g| g.rotation_speed = Span::new(f32::NAN, 1.0));
        assert_generator_rejected(|g| g.saturation = 1.5);
    }

    #[test]
    fn span_contains_is_inclusive() {
        let span = Span::new(0.2, 0.6);
        assert!(span.contains(0.2));
        assert!(span.contains(0.6));
        assert!(!span.contains(0.61));
    }
}
