//! pc-project: chart configuration file format, normalisation and validation.
//!
//! Loading runs the same pipeline for every format: parse, check the top
//! level is a mapping, fold the `isolines` map into the `isos` list,
//! normalise relative humidities, validate.

pub mod normalize;
pub mod schema;
pub mod validate;

pub use normalize::normalize_rh;
pub use schema::*;
pub use validate::{ValidationError, validate_config};

use std::path::Path;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Top-level structure must be a mapping")]
    NotAMapping,
}

/// Parse, normalise and validate a YAML document.
pub fn from_yaml_str(content: &str) -> ProjectResult<ChartConfig> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    if !value.is_mapping() {
        return Err(ProjectError::NotAMapping);
    }
    let config: ChartConfig = serde_yaml::from_value(value)?;
    finish(config)
}

/// Parse, normalise and validate a JSON document.
pub fn from_json_str(content: &str) -> ProjectResult<ChartConfig> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(ProjectError::NotAMapping);
    }
    let config: ChartConfig = serde_json::from_value(value)?;
    finish(config)
}

fn finish(mut config: ChartConfig) -> ProjectResult<ChartConfig> {
    config.normalize()?;
    validate_config(&config)?;
    tracing::debug!(
        isolines = config.isos.len(),
        zones = config.zones.len(),
        points = config.points.len(),
        "chart configuration loaded"
    );
    Ok(config)
}

pub fn load_yaml(path: &Path) -> ProjectResult<ChartConfig> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &Path, config: &ChartConfig) -> ProjectResult<()> {
    validate_config(config)?;
    let content = serde_yaml::to_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<ChartConfig> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &Path, config: &ChartConfig) -> ProjectResult<()> {
    validate_config(config)?;
    let content = serde_json::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
