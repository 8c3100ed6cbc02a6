use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use fft_analyzer::encode::OutputFormat;

pub const LOCAL_CONFIG: &str = "fft-analyzer.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct AnalysisSection {
    #[serde(default)]
    pub window: Option<String>,
    #[serde(default)]
    pub sample_rate: Option<f64>,
    #[serde(default)]
    pub max_peaks: Option<usize>,
    #[serde(default)]
    pub separation_bins: Option<f64>,
    #[serde(default)]
    pub parallel: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct OutputSection {
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config: {}", path.display()))
}

/// `./fft-analyzer.toml`, then `<config dir>/fft-analyzer/config.toml`.
pub fn discover_config() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
        return Some(local);
    }
    if let Some(config_dir) = dirs::config_dir() {
        let platform = config_dir.join("fft-analyzer").join("config.toml");
        if platform.exists() {
            return Some(platform);
        }
    }
    None
}
