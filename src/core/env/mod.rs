mod table;

pub use table::Environment;

#[derive(Debug)]
pub enum EnvError {
    HomeDirNotFound,
    InvalidName(String),
    InvalidValue(&'static str),
}

impl std::fmt::Display for EnvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnvError::HomeDirNotFound => write!(f, "Home directory not found"),
            EnvError::InvalidName(name) => write!(f, "Invalid variable name: {}", name),
            EnvError::InvalidValue(val) => write!(f, "Invalid value: {}", val),
        }
    }
}

impl std::error::Error for EnvError {}
