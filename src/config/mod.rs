mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads the configuration named by `CONFIG_PATH` and applies environment overrides.
///
/// Without `CONFIG_PATH` a missing `config.yaml` falls back to built-in defaults;
/// an explicitly named file must exist.
pub async fn load() -> Result<Config> {
    let config = match env::var("CONFIG_PATH") {
        Ok(path) => load_from_path(&path).await?,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_from_path(DEFAULT_CONFIG_PATH).await?
        }
        Err(_) => {
            debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
            Config::default()
        }
    };

    Ok(config.with_env_overrides(|key| env::var(key).ok()))
}

pub async fn load_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await.map_err(|e| {
        Error::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
