//! CLI subcommands.

pub mod config;
pub mod fetch;
pub mod parse;
pub mod process;

use std::path::{Path, PathBuf};

use endereco_core::EnderecoConfig;
use tracing::debug;

/// Location of the user configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("endereco")
        .join("config.json")
}

/// Load configuration from `--config`, else the user file, else defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<EnderecoConfig> {
    let config = match config_path {
        Some(path) => EnderecoConfig::from_file(Path::new(path))?,
        None => {
            let path = default_config_path();
            if path.exists() {
                debug!("Loading config from {}", path.display());
                EnderecoConfig::from_file(&path)?
            } else {
                EnderecoConfig::default()
            }
        }
    };

    config.validate()?;
    Ok(config)
}
