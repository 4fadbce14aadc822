use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use serde::Deserialize;

pub use duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variable holding a colon-separated list of additional config
/// files that override the defaults.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

/// Load the default configuration merged with the files listed in
/// [`CONFIG_PATH_ENV`].
pub fn load() -> anyhow::Result<Config> {
    let mut paths = vec![PathBuf::from(DEFAULT_CONFIG_PATH)];
    if let Some(extra) = std::env::var_os(CONFIG_PATH_ENV) {
        paths.extend(std::env::split_paths(&extra).filter(|p| !p.as_os_str().is_empty()));
    }
    load_paths(&paths)
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub contact: ContactConfig,
    pub submit: SubmitConfig,
    pub page: PageConfig,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub submit_label: String,
    pub busy_label: String,
    pub success_message: String,
    pub failure_message: String,
    pub message_ttl: Duration,
}

#[derive(Debug, Deserialize)]
pub struct SubmitConfig {
    pub simulated_delay: Duration,
    pub simulate_failure: bool,
}

#[derive(Debug, Deserialize)]
pub struct PageConfig {
    pub navbar_scroll_offset: f64,
    pub back_to_top_offset: f64,
    pub active_section_offset: f64,
    pub navbar_height: f64,
    pub viewport_threshold: f64,
    pub animation_delay: Duration,
    pub skill_bar_stagger: Duration,
    pub scroll_throttle: Duration,
}
