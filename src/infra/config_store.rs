// ============================================================
// Layer 6 - Config Store
// ============================================================
// Saves and restores a PipelineConfig as pretty-printed JSON so
// a batching run can be reproduced exactly:
//
//   text-batch-loader batch ... --save-config run.json
//   text-batch-loader batch --config run.json

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::application::pipeline_config::PipelineConfig;

pub fn save_config(path: &Path, cfg: &PipelineConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(cfg)?;
    fs::write(path, json)
        .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

    tracing::info!("Saved pipeline config to '{}'", path.display());
    Ok(())
}

pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let cfg: PipelineConfig = serde_json::from_str(&json)
        .with_context(|| format!("Invalid config JSON in '{}'", path.display()))?;

    tracing::debug!("Loaded pipeline config from '{}'", path.display());
    Ok(cfg)
}
