use std::{fs, io};

use super::{ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    /// Command lines from the rc file, with blanks and `#` comments removed.
    pub fn load_lines(&self) -> Result<Vec<String>, ConfigError> {
        let content = match fs::read_to_string(&self.paths.rc_path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !self.paths.explicit => {
                return Ok(Vec::new())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::ConfigFileNotFound(
                    self.paths.rc_path.display().to_string(),
                ))
            }
            Err(e) => return Err(e.into()),
        };

        Ok(content
            .lines()
            .filter(|line| {
                let line = line.trim();
                !line.is_empty() && !line.starts_with('#')
            })
            .map(String::from)
            .collect())
    }
}
