use thiserror::Error;

/// Errors raised at the edges of the scene engine.
///
/// Composition itself never fails; these only come from raw host input,
/// config parsing and JSON export.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid growth level: {0}")]
    InvalidGrowthLevel(f64),
    #[error("config validation error: {0}")]
    Config(String),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON encode error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SceneError>;
