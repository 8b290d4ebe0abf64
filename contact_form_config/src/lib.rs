use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{File, FileFormat};
use contact_form_models::validation::ValidationMode;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of additional config files.
pub const CONFIG_PATH_ENV: &str = "CONTACT_FORM_CONFIG";

/// Loads the default config, overridden by the files listed in
/// [`CONFIG_PATH_ENV`].
pub fn load() -> anyhow::Result<Config> {
    let extra = std::env::var(CONFIG_PATH_ENV).ok();
    load_paths(&config_paths(extra.as_deref()))
}

/// The default config path followed by the entries of a colon separated list.
fn config_paths(extra: Option<&str>) -> Vec<PathBuf> {
    std::iter::once(PathBuf::from(DEFAULT_CONFIG_PATH))
        .chain(
            extra
                .into_iter()
                .flat_map(|extra| extra.split(':'))
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        )
        .collect()
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            debug!(path = %path.display(), "loading config file");
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            anyhow::Ok(add_toml(builder, &content))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

fn add_toml(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    content: &str,
) -> config::ConfigBuilder<config::builder::DefaultState> {
    builder.add_source(File::from_str(content, FileFormat::Toml))
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub form: FormConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    pub header: String,
    #[serde(default)]
    pub validation_mode: ValidationMode,
}
