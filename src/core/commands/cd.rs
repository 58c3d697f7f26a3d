use super::{Command, CommandError};
use crate::core::session::Session;
use crate::input::CommandLine;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, session: &mut Session, line: &CommandLine) -> Result<(), CommandError> {
        let target = match line.args.as_slice() {
            [_] => session.env.home()?,
            [_, dest] if dest == "~" => session.env.home()?,
            [_, dest] => PathBuf::from(dest),
            _ => {
                return Err(CommandError::InvalidArguments(
                    "cd: too many arguments".into(),
                ))
            }
        };

        env::set_current_dir(&target).map_err(|e| {
            CommandError::ExecutionError(format!(
                "cd: invalid destination directory {}: {}",
                target.display(),
                e
            ))
        })?;

        let cwd = env::current_dir()?;
        session.env.set("PWD", &cwd.to_string_lossy())?;
        log::debug!("working directory is now {}", cwd.display());
        Ok(())
    }
}
