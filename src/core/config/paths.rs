use super::ConfigError;
use std::path::PathBuf;

const RC_FILE_NAME: &str = ".myshellrc";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub rc_path: PathBuf,
    /// Set when the path came from `--config`; such a file must exist.
    pub explicit: bool,
}

impl ConfigPaths {
    pub fn new() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(ConfigPaths {
            rc_path: home.join(RC_FILE_NAME),
            explicit: false,
        })
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        ConfigPaths {
            rc_path: path.into(),
            explicit: true,
        }
    }
}
