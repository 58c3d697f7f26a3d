use std::fmt;

pub mod executor;
pub mod state;

pub use executor::ProcessExecutor;
pub use state::{ProcessState, TerminationReport};

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    InvalidArgument(String),
    Fork(std::io::Error),
    Wait(std::io::Error),
}

impl ProcessError {
    /// Failures the session cannot recover from.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProcessError::Fork(_) | ProcessError::Wait(_))
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "Command {} not found", cmd),
            ProcessError::InvalidArgument(arg) => {
                write!(f, "argument contains a NUL byte: {:?}", arg)
            }
            ProcessError::Fork(e) => write!(f, "fork: {}", e),
            ProcessError::Wait(e) => write!(f, "waitpid: {}", e),
        }
    }
}

impl std::error::Error for ProcessError {}
