use log::LevelFilter;
use serde::Deserialize;
use shared::get_config_path;
use std::path::Path;

use crate::reader::error::ReaderError;

#[derive(Debug, Deserialize)]
struct ConfigRoot {
    pub adder: Option<AdderConfig>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AdderConfig {
    pub log_level: Option<LevelFilter>,
    pub color: bool,
}

impl Default for AdderConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            color: true,
        }
    }
}

fn parse_config(contents: &str) -> Result<AdderConfig, serde_yml::Error> {
    if contents.trim().is_empty() {
        return Ok(AdderConfig::default());
    }
    let root: ConfigRoot = serde_yml::from_str(contents)?;
    Ok(root.adder.unwrap_or_default())
}

/// Loads the ambient settings.
///
/// Without an explicit path, a missing `config.yaml` is not an error and
/// yields `Ok(None)`.
pub fn read_config(path: Option<&Path>) -> Result<Option<AdderConfig>, ReaderError> {
    let config_path = match path {
        Some(path) => {
            if !path.is_file() {
                return Err(ReaderError::NoConfigFile(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => {
            let path = get_config_path().map_err(|e| ReaderError::General(format!("{e:#}")))?;
            if !path.is_file() {
                log::debug!("no config file at {}", path.display());
                return Ok(None);
            }
            path
        }
    };

    let config_contents =
        fs_err::read_to_string(&config_path).map_err(|e| ReaderError::General(e.to_string()))?;
    let config = parse_config(&config_contents).map_err(|e| {
        ReaderError::General(format!("Failed to read {}: {}", config_path.display(), e))
    })?;
    log::debug!("{:?}", config);
    Ok(Some(config))
}
