use crate::envfile::{self, Config};
use std::path::Path;
use std::{fs, io};
use thiserror::Error;

pub const DEFAULT_CONFIG_PATH: &str = "./config.cfg";
pub const EXAMPLE_CONFIG_PATH: &str = "./config.cfg.example";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read { path: String, source: io::Error },
    #[error("Failed to write config file '{path}': {source}")]
    Write { path: String, source: io::Error },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

pub fn exists(path: &Path) -> bool {
    path.exists()
}

pub fn load(path: &Path) -> ConfigResult<Config> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(envfile::parse_config(&contents))
}

pub fn save(path: &Path, config: &Config) -> ConfigResult<()> {
    fs::write(path, envfile::build_env(config)).map_err(|source| ConfigError::Write {
        path: path.display().to_string(),
        source,
    })
}

pub fn example_lines(path: &Path) -> ConfigResult<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(envfile::read_lines(&contents))
}
