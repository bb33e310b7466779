//! Error types for the pc-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read configuration file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write chart file: {path}")]
    ChartFileWrite { path: PathBuf, message: String },

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Psychrometric error: {0}")]
    Psychro(String),

    #[error("Comfort index error: {0}")]
    Index(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pc-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<pc_project::ProjectError> for AppError {
    fn from(err: pc_project::ProjectError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<pc_project::ValidationError> for AppError {
    fn from(err: pc_project::ValidationError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<pc_chart::ChartError> for AppError {
    fn from(err: pc_chart::ChartError) -> Self {
        AppError::Chart(err.to_string())
    }
}

impl From<pc_psychro::PsychroError> for AppError {
    fn from(err: pc_psychro::PsychroError) -> Self {
        AppError::Psychro(err.to_string())
    }
}

impl From<pc_indexes::IndexError> for AppError {
    fn from(err: pc_indexes::IndexError) -> Self {
        AppError::Index(err.to_string())
    }
}
