use super::{Command, CommandError};
use crate::core::session::Session;
use crate::input::CommandLine;

/// `export name`: copy a session variable into the environment table.
#[derive(Clone, Default)]
pub struct ExportCommand;

impl ExportCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExportCommand {
    fn execute(&self, session: &mut Session, line: &CommandLine) -> Result<(), CommandError> {
        let name = match line.args.as_slice() {
            [_] => {
                return Err(CommandError::InvalidArguments(
                    "export: no variable name provided".into(),
                ))
            }
            [_, name] => name,
            _ => {
                return Err(CommandError::InvalidArguments(
                    "export: too many arguments".into(),
                ))
            }
        };

        let value = session
            .vars
            .get(name)
            .ok_or_else(|| CommandError::ExecutionError("export: no variable matched".into()))?
            .to_string();

        session.env.set(name, &value).map_err(|e| {
            CommandError::ExecutionError(format!("unable to export {}: {}", name, e))
        })?;
        log::debug!("exported {}", name);
        Ok(())
    }
}
