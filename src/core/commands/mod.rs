use std::collections::BTreeMap;
use std::io::Write;

mod cd;
mod export;
mod inc;
mod set;

pub use cd::CdCommand;
pub use export::ExportCommand;
pub use inc::IncCommand;
pub use set::SetCommand;

use crate::core::env::EnvError;
use crate::core::session::Session;
use crate::core::vars::VarError;
use crate::input::CommandLine;
use crate::path::{ResolveError, Resolver, UnreadableDirPolicy};
use crate::process::{ProcessError, ProcessExecutor, TerminationReport};

#[derive(Debug)]
pub enum CommandError {
    NotFound(String),
    InvalidArguments(String),
    ExecutionError(String),
    IoError(std::io::Error),
    EnvError(EnvError),
    ResolveError(ResolveError),
    ProcessError(ProcessError),
}

impl CommandError {
    /// Errors that end the whole session instead of just the current line.
    pub fn is_fatal(&self) -> bool {
        match self {
            CommandError::ResolveError(ResolveError::Unreadable { .. }) => true,
            CommandError::ProcessError(e) => e.is_fatal(),
            _ => false,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::NotFound(cmd) => write!(f, "Command {} not found", cmd),
            CommandError::InvalidArguments(msg) => write!(f, "{}", msg),
            CommandError::ExecutionError(msg) => write!(f, "{}", msg),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::EnvError(err) => write!(f, "{}", err),
            CommandError::ResolveError(err) => write!(f, "{}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<EnvError> for CommandError {
    fn from(err: EnvError) -> Self {
        CommandError::EnvError(err)
    }
}

impl From<VarError> for CommandError {
    fn from(err: VarError) -> Self {
        CommandError::InvalidArguments(err.to_string())
    }
}

impl From<ResolveError> for CommandError {
    fn from(err: ResolveError) -> Self {
        CommandError::ResolveError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        match err {
            ProcessError::CommandNotFound(cmd) => CommandError::NotFound(cmd),
            other => CommandError::ProcessError(other),
        }
    }
}

pub trait Command {
    fn execute(&self, session: &mut Session, line: &CommandLine) -> Result<(), CommandError>;
}

#[derive(Clone)]
enum CommandType {
    Cd(CdCommand),
    Set(SetCommand),
    Export(ExportCommand),
    Inc(IncCommand),
}

impl Command for CommandType {
    fn execute(&self, session: &mut Session, line: &CommandLine) -> Result<(), CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(session, line),
            CommandType::Set(cmd) => cmd.execute(session, line),
            CommandType::Export(cmd) => cmd.execute(session, line),
            CommandType::Inc(cmd) => cmd.execute(session, line),
        }
    }
}

/// Routes a preprocessed line to a builtin or to an external program.
#[derive(Clone)]
pub struct CommandExecutor {
    commands: BTreeMap<String, CommandType>,
    resolver: Resolver,
    process_executor: ProcessExecutor,
}

impl CommandExecutor {
    pub fn new(policy: UnreadableDirPolicy) -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd".to_string(), CommandType::Cd(CdCommand::new()));
        commands.insert("set".to_string(), CommandType::Set(SetCommand::new()));
        commands.insert("export".to_string(), CommandType::Export(ExportCommand::new()));
        commands.insert("inc".to_string(), CommandType::Inc(IncCommand::new()));

        Self {
            commands,
            resolver: Resolver::new(policy),
            process_executor: ProcessExecutor::new(),
        }
    }

    /// Run one line. External programs yield their termination report;
    /// builtins yield `None`. Job-control transitions go to `out`.
    pub fn execute(
        &self,
        session: &mut Session,
        line: &CommandLine,
        out: &mut dyn Write,
    ) -> Result<Option<TerminationReport>, CommandError> {
        let Some(command) = line.command() else {
            return Ok(None);
        };

        if let Some(builtin) = self.commands.get(command) {
            builtin.execute(session, line)?;
            return Ok(None);
        }

        let resolved = self.resolver.resolve(command, &session.env.search_paths())?;
        let report = self.process_executor.run_foreground(
            resolved.as_deref(),
            &line.args,
            &session.env,
            out,
        )?;
        Ok(Some(report))
    }
}
