use std::io::Write;

use crate::core::commands::CommandExecutor;
use crate::core::session::Session;
use crate::error::ShellError;
use crate::highlight::Styler;
use crate::input::{is_blank, is_exit, preprocess};

/// Whether the session goes on after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs input lines against a session, one turn per line. Status lines
/// go to `out`; errors always go to stderr.
pub struct Interpreter {
    session: Session,
    executor: CommandExecutor,
    styler: Styler,
    out: Box<dyn Write>,
}

impl Interpreter {
    pub fn new(
        session: Session,
        executor: CommandExecutor,
        styler: Styler,
        out: Box<dyn Write>,
    ) -> Self {
        Self {
            session,
            executor,
            styler,
            out,
        }
    }

    /// Run one line. Recoverable errors are printed and the session
    /// continues; fatal ones are returned.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        if is_blank(line) {
            return Ok(Flow::Continue);
        }
        if is_exit(line) {
            return Ok(Flow::Exit);
        }

        self.session.env.refresh();
        let command_line = preprocess(line, &self.session.vars);

        match self.executor.execute(&mut self.session, &command_line, &mut self.out) {
            Ok(Some(report)) => {
                writeln!(self.out, "{}", self.styler.report(&report))?;
                self.out.flush()?;
            }
            Ok(None) => {}
            Err(e) if e.is_fatal() => return Err(e.into()),
            Err(e) => eprintln!("{}", self.styler.error(&e.to_string())),
        }
        Ok(Flow::Continue)
    }

    /// Run lines in order, stopping early at `exit`.
    pub fn run_script<I, S>(&mut self, lines: I) -> Result<Flow, ShellError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            if self.execute_line(line.as_ref())? == Flow::Exit {
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;
    use crate::path::UnreadableDirPolicy;
    use std::cell::RefCell;
    use std::io;
    use std::os::unix::fs::symlink;
    use std::rc::Rc;

    /// Collects what the interpreter prints, readable after the fact.
    #[derive(Clone, Default)]
    struct Captured(Rc<RefCell<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.borrow()).into_owned()
        }
    }

    impl Write for Captured {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn interpreter_with(env: Environment, policy: UnreadableDirPolicy) -> Interpreter {
        Interpreter::new(
            Session::new(env),
            CommandExecutor::new(policy),
            Styler::plain(),
            Box::new(io::sink()),
        )
    }

    fn interpreter() -> Interpreter {
        interpreter_with(
            Environment::detached([("PATH", "/nonexistent/bin"), ("HOME", "/")]),
            UnreadableDirPolicy::Skip,
        )
    }

    /// An interpreter whose PATH holds only a link to the system `sh`.
    fn printing_interpreter(bin: &tempfile::TempDir) -> io::Result<(Interpreter, Captured)> {
        symlink("/bin/sh", bin.path().join("sh"))?;
        let path = bin.path().to_string_lossy().to_string();
        let captured = Captured::default();
        let shell = Interpreter::new(
            Session::new(Environment::detached([("PATH", path.as_str())])),
            CommandExecutor::new(UnreadableDirPolicy::Abort),
            Styler::plain(),
            Box::new(captured.clone()),
        );
        Ok((shell, captured))
    }
    #[test]
    fn test_blank_line_is_a_no_op() -> Result<(), ShellError> {
        let mut shell = interpreter();
        let env_before = shell.session.env.to_envp();

        assert_eq!(shell.execute_line("  ")?, Flow::Continue);
        assert_eq!(shell.execute_line("")?, Flow::Continue);
        assert!(shell.session.vars.is_empty());
        assert_eq!(shell.session.env.to_envp(), env_before);
        Ok(())
    }

    #[test]
    fn test_exit_detection() -> Result<(), ShellError> {
        let mut shell = interpreter();
        assert_eq!(shell.execute_line("exit")?, Flow::Exit);
        assert_eq!(shell.execute_line("   exit  ")?, Flow::Exit);
        assert_eq!(shell.execute_line("exit 3")?, Flow::Exit);
        assert_eq!(shell.execute_line("e\\x\\i\\t")?, Flow::Continue);
        Ok(())
    }

    #[test]
    fn test_variables_across_turns() -> Result<(), ShellError> {
        let mut shell = interpreter();
        shell.execute_line("set N 9")?;
        shell.execute_line("inc N")?;
        assert_eq!(shell.session.vars.get("N"), Some("10"));

        shell.execute_line("set X ab")?;
        shell.execute_line("set XY cd")?;
        shell.execute_line("set OUT $XY-$X")?;
        assert_eq!(shell.session.vars.get("OUT"), Some("cd-ab"));

        shell.execute_line("set A foo\\ bar")?;
        assert_eq!(shell.session.vars.get("A"), Some("foo\\ bar"));
        Ok(())
    }

    #[test]
    fn test_unbound_reference_line_is_a_no_op() -> Result<(), ShellError> {
        let mut shell = interpreter();
        assert_eq!(shell.execute_line("$NOTHING")?, Flow::Continue);
        assert!(shell.session.vars.is_empty());
        Ok(())
    }

    #[test]
    fn test_recoverable_errors_continue() -> Result<(), ShellError> {
        let mut shell = interpreter();
        assert_eq!(shell.execute_line("cd a b")?, Flow::Continue);
        assert_eq!(shell.execute_line("set bad-name x")?, Flow::Continue);
        assert_eq!(shell.execute_line("export MISSING")?, Flow::Continue);
        assert_eq!(shell.execute_line("no_such_command_zz")?, Flow::Continue);
        assert_eq!(shell.execute_line("/usr/bin/")?, Flow::Continue);
        assert!(shell.session.vars.is_empty());
        Ok(())
    }

    #[test]
    fn test_strict_path_error_is_fatal() {
        let mut shell = interpreter_with(
            Environment::detached([("PATH", "/nonexistent/bin")]),
            UnreadableDirPolicy::Abort,
        );
        assert!(matches!(
            shell.execute_line("ls"),
            Err(ShellError::CommandError(_))
        ));
    }

    #[test]
    fn test_external_command_prints_report() -> Result<(), Box<dyn std::error::Error>> {
        let bin = tempfile::tempdir()?;
        let (mut shell, captured) = printing_interpreter(&bin)?;

        assert_eq!(shell.execute_line("sh -c exit\\ 3")?, Flow::Continue);
        assert_eq!(shell.execute_line("sh -c exit\\ 0")?, Flow::Continue);
        assert_eq!(
            captured.text(),
            "Program exited with status 3\nProgram exited with status 0\n"
        );
        Ok(())
    }

    #[test]
    fn test_builtins_print_nothing() -> Result<(), Box<dyn std::error::Error>> {
        let bin = tempfile::tempdir()?;
        let (mut shell, captured) = printing_interpreter(&bin)?;

        shell.execute_line("set A 1")?;
        shell.execute_line("inc A")?;
        shell.execute_line("no_such_command_zz")?;
        assert!(captured.text().is_empty());
        Ok(())
    }

    #[test]
    fn test_stop_and_continue_lines_precede_report() -> Result<(), Box<dyn std::error::Error>> {
        let bin = tempfile::tempdir()?;
        let script = bin.path().join("pause.sh");
        std::fs::write(&script, "(sleep 1; kill -CONT $$) & kill -STOP $$; exit 4\n")?;
        let (mut shell, captured) = printing_interpreter(&bin)?;

        shell.execute_line(&format!("sh {}", script.display()))?;
        assert_eq!(
            captured.text(),
            format!(
                "Program stopped by signal {}\nProgram continued\nProgram exited with status 4\n",
                libc::SIGSTOP
            )
        );
        Ok(())
    }

    #[test]
    fn test_killed_child_report() -> Result<(), Box<dyn std::error::Error>> {
        let bin = tempfile::tempdir()?;
        let script = bin.path().join("die.sh");
        std::fs::write(&script, "kill -9 $$\n")?;
        let (mut shell, captured) = printing_interpreter(&bin)?;

        shell.execute_line(&format!("sh {}", script.display()))?;
        assert_eq!(
            captured.text(),
            format!("Program was killed by signal {}\n", libc::SIGKILL)
        );
        Ok(())
    }

    #[test]
    fn test_run_script_stops_at_exit() -> Result<(), ShellError> {
        let mut shell = interpreter();
        let flow = shell.run_script(["set A 1", "inc A", "exit", "inc A"])?;

        assert_eq!(flow, Flow::Exit);
        assert_eq!(shell.session.vars.get("A"), Some("2"));
        Ok(())
    }
}
