use std::fmt;

mod loader;
mod paths;

use loader::ConfigLoader;
pub use paths::ConfigPaths;

use crate::flags::Flags;

/// Startup configuration: the rc file whose lines run before the first
/// prompt.
pub struct Config {
    paths: ConfigPaths,
}

impl Config {
    pub fn new(flags: &Flags) -> Result<Self, ConfigError> {
        let paths = match flags.get_value("config") {
            Some(path) => ConfigPaths::from_path(path),
            None => ConfigPaths::new()?,
        };
        Ok(Config { paths })
    }

    pub fn rc_path(&self) -> &std::path::Path {
        &self.paths.rc_path
    }

    pub fn startup_lines(&self) -> Result<Vec<String>, ConfigError> {
        ConfigLoader::new(&self.paths).load_lines()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    HomeDirNotFound,
    ConfigFileNotFound(String),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::HomeDirNotFound => write!(f, "Home directory not found"),
            ConfigError::ConfigFileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
