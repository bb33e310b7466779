//! Configuration loading and chart rendering.

use std::path::{Path, PathBuf};

use pc_chart::ChartGeometry;
use pc_project::ChartConfig;

use crate::error::{AppError, AppResult};

/// What a render produced.
#[derive(Debug, Clone)]
pub struct RenderResponse {
    pub output: PathBuf,
    pub geometry: ChartGeometry,
}

/// Load, normalise and validate a chart configuration.
///
/// Files ending in `.json` are read as JSON, everything else as YAML.
pub fn load_config(path: &Path) -> AppResult<ChartConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let config = if is_json {
        pc_project::from_json_str(&content)?
    } else {
        pc_project::from_yaml_str(&content)?
    };

    tracing::info!(path = %path.display(), "loaded chart configuration");
    Ok(config)
}

/// Build chart geometry from a loaded configuration.
pub fn build_chart(config: &ChartConfig) -> AppResult<ChartGeometry> {
    Ok(pc_chart::build_chart(config)?)
}

/// Load `config_path`, build the chart and write it.
///
/// The output goes to `output` when given, otherwise to the configuration's
/// `chart.output`. `.png` and `.svg` paths get an image, anything else the
/// geometry as JSON.
pub fn render_to_file(config_path: &Path, output: Option<&Path>) -> AppResult<RenderResponse> {
    let config = load_config(config_path)?;
    let geometry = build_chart(&config)?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.chart.output));

    pc_chart::save_chart(&output, &geometry).map_err(|e| AppError::ChartFileWrite {
        path: output.clone(),
        message: e.to_string(),
    })?;

    tracing::info!(output = %output.display(), "{}", geometry.summary());
    Ok(RenderResponse { output, geometry })
}
