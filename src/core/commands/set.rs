use super::{Command, CommandError};
use crate::core::ident::is_valid_name;
use crate::core::session::Session;
use crate::input::CommandLine;

/// `set name [value...]`. The value is the line's raw text from the third
/// token on, so spacing and `\ ` escapes survive.
#[derive(Clone, Default)]
pub struct SetCommand;

impl SetCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetCommand {
    fn execute(&self, session: &mut Session, line: &CommandLine) -> Result<(), CommandError> {
        let name = line
            .args
            .get(1)
            .ok_or_else(|| CommandError::InvalidArguments("set: no variable provided".into()))?;

        if !is_valid_name(name) {
            return Err(CommandError::InvalidArguments(
                "set: invalid variable name".into(),
            ));
        }

        let value = if line.args.len() > 2 {
            line.raw_from_word(2).unwrap_or_default()
        } else {
            ""
        };

        session.vars.set(name, value)?;
        Ok(())
    }
}
