use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::server::RequestsLoggingLevel;

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    // Core settings (can override CLI defaults)
    pub port: Option<u16>,
    pub metrics_port: Option<u16>,
    pub logging_level: Option<RequestsLoggingLevel>,

    // Feature configs
    pub youtube: Option<YoutubeConfig>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct YoutubeConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    /// Comments per page, capped at 100 by the API.
    pub page_size: Option<u32>,
    pub timeout_secs: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
