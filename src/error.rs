use std::path::PathBuf;

/// Errors produced while building or configuring a scene.
///
/// Runtime operations (ticks, pointer events) never fail; only construction
/// and config loading do.
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A configuration value is outside its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A config document is not valid JSON for [`SceneConfig`](crate::config::SceneConfig).
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl SceneError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
