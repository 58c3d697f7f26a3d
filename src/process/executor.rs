use std::ffi::{CString, OsStr};
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr;

use super::{ProcessError, ProcessState, TerminationReport};
use crate::core::env::Environment;

/// Exit status of a child whose `execve` failed.
pub const EXEC_FAILURE_STATUS: libc::c_int = 127;

#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Run `resolved` in the foreground and wait for it to exit or be
    /// killed. `args[0]` is replaced by the resolved path; `env` becomes the
    /// child's whole environment. Stop and continue transitions are written
    /// to `out` as they happen.
    pub fn run_foreground(
        &self,
        resolved: Option<&Path>,
        args: &[String],
        env: &Environment,
        out: &mut dyn Write,
    ) -> Result<TerminationReport, ProcessError> {
        let command = args.first().map(String::as_str).unwrap_or_default();
        let program = resolved.ok_or_else(|| ProcessError::CommandNotFound(command.to_string()))?;

        // Everything the child touches is allocated before the fork.
        let program_c = to_cstring(program.as_os_str())?;
        let mut argv_c = vec![program_c.clone()];
        for arg in args.iter().skip(1) {
            argv_c.push(to_cstring(OsStr::new(arg))?);
        }
        let envp_c = env
            .to_envp()
            .iter()
            .map(|entry| to_cstring(entry))
            .collect::<Result<Vec<_>, _>>()?;
        let argv = null_terminated(&argv_c);
        let envp = null_terminated(&envp_c);
        let failure = format!("myshell: cannot execute {}\n", program.display()).into_bytes();

        // SAFETY: the child only calls execve, write and _exit, which are
        // async-signal-safe, on memory prepared above.
        match unsafe { libc::fork() } {
            -1 => Err(ProcessError::Fork(io::Error::last_os_error())),
            0 => unsafe {
                libc::execve(program_c.as_ptr(), argv.as_ptr(), envp.as_ptr());
                libc::write(libc::STDERR_FILENO, failure.as_ptr().cast(), failure.len());
                libc::_exit(EXEC_FAILURE_STATUS)
            },
            pid => self.wait_foreground(pid, out),
        }
    }

    fn wait_foreground(
        &self,
        pid: libc::pid_t,
        out: &mut dyn Write,
    ) -> Result<TerminationReport, ProcessError> {
        log::debug!("spawned pid {}", pid);
        let mut transitions = Vec::new();

        loop {
            let mut status: libc::c_int = 0;
            let rc = unsafe { libc::waitpid(pid, &mut status, libc::WUNTRACED | libc::WCONTINUED) };
            if rc == -1 {
                let err = io::Error::last_os_error();
                if err.kind() == io::ErrorKind::Interrupted {
                    continue;
                }
                return Err(ProcessError::Wait(err));
            }

            let state = ProcessState::from_wait_status(status);
            log::debug!("pid {} changed state: {:?}", pid, state);
            if state.is_terminal() {
                return Ok(TerminationReport {
                    pid,
                    state,
                    transitions,
                });
            }

            if let Err(e) = writeln!(out, "{}", state).and_then(|_| out.flush()) {
                log::warn!("could not report state of pid {}: {}", pid, e);
            }
            transitions.push(state);
        }
    }
}

fn to_cstring(s: &OsStr) -> Result<CString, ProcessError> {
    CString::new(s.as_bytes())
        .map_err(|_| ProcessError::InvalidArgument(s.to_string_lossy().into_owned()))
}

fn null_terminated(strings: &[CString]) -> Vec<*const libc::c_char> {
    strings
        .iter()
        .map(|s| s.as_ptr())
        .chain(std::iter::once(ptr::null()))
        .collect()
}
