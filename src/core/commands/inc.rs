use super::{Command, CommandError};
use crate::core::decimal::Decimal;
use crate::core::ident::is_valid_name;
use crate::core::session::Session;
use crate::input::CommandLine;

/// `inc name`: add one to a numeric variable. Unbound or non-numeric
/// variables become `1`.
#[derive(Clone, Default)]
pub struct IncCommand;

impl IncCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for IncCommand {
    fn execute(&self, session: &mut Session, line: &CommandLine) -> Result<(), CommandError> {
        let [_, name] = line.args.as_slice() else {
            return Err(CommandError::InvalidArguments(
                "inc: please provide one valid argument".into(),
            ));
        };

        if !is_valid_name(name) {
            return Err(CommandError::InvalidArguments(
                "inc: invalid variable name".into(),
            ));
        }

        let next = match session.vars.get(name).map(str::parse::<Decimal>) {
            Some(Ok(number)) => number.increment().to_string(),
            _ => "1".to_string(),
        };
        session.vars.set(name, &next)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::env::Environment;
    use crate::input::preprocess;

    fn session() -> Session {
        Session::new(Environment::detached(Vec::<(String, String)>::new()))
    }

    fn inc(session: &mut Session, name: &str) -> Result<(), CommandError> {
        let line = preprocess(&format!("inc {}", name), &session.vars);
        IncCommand::new().execute(session, &line)
    }

    #[test]
    fn test_inc_unbound_starts_at_one() -> Result<(), CommandError> {
        let mut session = session();
        inc(&mut session, "N")?;
        assert_eq!(session.vars.get("N"), Some("1"));
        inc(&mut session, "N")?;
        assert_eq!(session.vars.get("N"), Some("2"));
        Ok(())
    }

    #[test]
    fn test_inc_numeric_values() -> Result<(), CommandError> {
        let mut session = session();
        for (start, expected) in [("9", "10"), ("-1", "1"), ("0.9", "1.9"), ("-0.25", "0.75")] {
            session.vars.set("N", start)?;
            inc(&mut session, "N")?;
            assert_eq!(session.vars.get("N"), Some(expected), "inc from {}", start);
        }
        Ok(())
    }

    #[test]
    fn test_inc_non_numeric_resets() -> Result<(), CommandError> {
        let mut session = session();
        for start in ["abc", "", "1.", ".5", "1 2"] {
            session.vars.set("N", start)?;
            inc(&mut session, "N")?;
            assert_eq!(session.vars.get("N"), Some("1"), "inc from {:?}", start);
        }
        Ok(())
    }

    #[test]
    fn test_inc_argument_errors() {
        let mut session = session();
        let line = preprocess("inc", &session.vars);
        assert!(matches!(
            IncCommand::new().execute(&mut session, &line),
            Err(CommandError::InvalidArguments(_))
        ));

        let line = preprocess("inc A B", &session.vars);
        assert!(matches!(
            IncCommand::new().execute(&mut session, &line),
            Err(CommandError::InvalidArguments(_))
        ));

        assert!(inc(&mut session, "a.b").is_err());
        assert!(session.vars.is_empty());
    }
}
