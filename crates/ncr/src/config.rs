use crate::error::{NcrError, Result};
use crate::types::CodecConfig;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "ncr.toml";

pub fn load_config(path: &Path) -> Result<CodecConfig> {
    if !path.exists() {
        return Err(NcrError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|error| NcrError::TomlParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    })
}

pub fn find_config(dir: &Path) -> Result<CodecConfig> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::trace!(path = %config_path.display(), "no config file, using defaults");
        return Ok(CodecConfig::default());
    }

    load_config(&config_path)
}
