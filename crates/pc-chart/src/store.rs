//! Chart geometry storage as pretty-printed JSON.

use crate::ChartResult;
use crate::geometry::ChartGeometry;
use std::fs;
use std::path::Path;

pub(crate) fn ensure_parent_dir(path: &Path) -> ChartResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

pub fn save_geometry(path: &Path, geometry: &ChartGeometry) -> ChartResult<()> {
    ensure_parent_dir(path)?;
    let content = serde_json::to_string_pretty(geometry)?;
    fs::write(path, content)?;
    tracing::debug!(path = %path.display(), "chart geometry saved");
    Ok(())
}

pub fn load_geometry(path: &Path) -> ChartResult<ChartGeometry> {
    let content = fs::read_to_string(path)?;
    let geometry = serde_json::from_str(&content)?;
    Ok(geometry)
}
