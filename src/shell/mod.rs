use std::env;
use std::io::{self, Write};

use rustyline::DefaultEditor;

mod executor;

pub use executor::{Flow, Interpreter};

use crate::{
    core::{commands::CommandExecutor, config::Config, session::Session},
    error::ShellError,
    flags::Flags,
    highlight::Styler,
    path::UnreadableDirPolicy,
};

pub struct Shell {
    pub(crate) editor: DefaultEditor,
    pub(crate) config: Config,
    pub(crate) interpreter: Interpreter,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;
        let config = Config::new(&flags)?;

        let policy = if flags.is_set("strict-path") {
            UnreadableDirPolicy::Abort
        } else {
            UnreadableDirPolicy::Skip
        };
        let out: Box<dyn Write> = if flags.is_set("quiet") {
            Box::new(io::sink())
        } else {
            Box::new(io::stdout())
        };
        let interpreter = Interpreter::new(
            Session::capture(),
            CommandExecutor::new(policy),
            Styler::new(),
            out,
        );

        // SIGINT is meant for the foreground child; the shell itself stays up.
        ctrlc::set_handler(|| {})?;

        Ok(Shell {
            editor,
            config,
            interpreter,
            flags,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        let startup = self.config.startup_lines()?;
        log::debug!(
            "running {} startup lines from {}",
            startup.len(),
            self.config.rc_path().display()
        );

        if self.interpreter.run_script(&startup)? == Flow::Continue {
            self.read_loop()?;
        }

        if !self.flags.is_set("quiet") {
            println!("Program exited with status 0");
        }
        Ok(())
    }

    fn read_loop(&mut self) -> Result<(), ShellError> {
        loop {
            let prompt = self.prompt()?;
            match self.editor.readline(&prompt) {
                Ok(line) => {
                    if self.interpreter.execute_line(&line)? == Flow::Exit {
                        return Ok(());
                    }
                }
                Err(rustyline::error::ReadlineError::Interrupted) => continue,
                Err(rustyline::error::ReadlineError::Eof) => return Ok(()),
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn prompt(&self) -> Result<String, ShellError> {
        if self.flags.is_set("quiet") {
            return Ok(String::new());
        }
        let cwd = env::current_dir()?;
        Ok(format!("myShell$:{} $ ", cwd.display()))
    }
}
