use thiserror::Error;

use crate::signal::Landmark;

/// Errors surfaced by configuration loading and the scripting API.
///
/// Nothing inside the tick loop returns these; per-tick degradation goes
/// through [`ClassifyError`] instead.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid config: {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid script: {0}")]
    InvalidScript(String),
}

impl CoreError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        CoreError::InvalidConfig { field, reason: reason.into() }
    }
}

/// Degraded classifier outcome. The controller logs it and skips action
/// inference for the tick; it is never propagated as a failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("{0:?} window is empty")]
    EmptyWindow(Landmark),

    #[error("warming up: head window {filled}/{capacity}")]
    WarmingUp { filled: usize, capacity: usize },
}

pub type Result<T> = std::result::Result<T, CoreError>;
