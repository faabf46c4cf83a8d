use std::path::PathBuf;
use thiserror::Error;

/// Rejected command-line input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("{flag} expects a value")]
    MissingValue { flag: String },

    #[error("invalid value {value:?} for {flag}")]
    InvalidValue { flag: String, value: String },

    #[error("unknown throttle profile {0:?} (expected hold, sweep or wander)")]
    UnknownProfile(String),

    #[error("unrecognized option {0:?}")]
    UnknownFlag(String),
}

/// Failures while running the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to create log directory {}: {source}", path.display())]
    LogDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to install tracing subscriber: {0}")]
    Tracing(#[from] tracing_subscriber::util::TryInitError),

    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[cfg(feature = "gui")]
    #[error("chart window failed: {0}")]
    Window(String),
}
