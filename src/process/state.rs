use std::fmt;

/// Observed state of a foreground child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessState {
    Running,
    Stopped(i32),
    Continued,
    Exited(i32),
    Signaled(i32),
}

impl ProcessState {
    /// Decode a status word filled in by `waitpid`.
    pub fn from_wait_status(status: libc::c_int) -> Self {
        if libc::WIFEXITED(status) {
            ProcessState::Exited(libc::WEXITSTATUS(status))
        } else if libc::WIFSIGNALED(status) {
            ProcessState::Signaled(libc::WTERMSIG(status))
        } else if libc::WIFSTOPPED(status) {
            ProcessState::Stopped(libc::WSTOPSIG(status))
        } else if libc::WIFCONTINUED(status) {
            ProcessState::Continued
        } else {
            ProcessState::Running
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProcessState::Exited(_) | ProcessState::Signaled(_))
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessState::Running => write!(f, "Program is running"),
            ProcessState::Stopped(sig) => write!(f, "Program stopped by signal {}", sig),
            ProcessState::Continued => write!(f, "Program continued"),
            ProcessState::Exited(code) => write!(f, "Program exited with status {}", code),
            ProcessState::Signaled(sig) => write!(f, "Program was killed by signal {}", sig),
        }
    }
}

/// How a foreground command ended, plus the stop/continue transitions seen
/// on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminationReport {
    pub pid: libc::pid_t,
    pub state: ProcessState,
    pub transitions: Vec<ProcessState>,
}

impl TerminationReport {
    pub fn exit_code(&self) -> Option<i32> {
        match self.state {
            ProcessState::Exited(code) => Some(code),
            _ => None,
        }
    }

    pub fn signal(&self) -> Option<i32> {
        match self.state {
            ProcessState::Signaled(sig) => Some(sig),
            _ => None,
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code() == Some(0)
    }
}

impl fmt::Display for TerminationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}
