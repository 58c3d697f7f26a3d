use super::env::Environment;
use super::vars::VariableStore;

/// Mutable state of one shell session, passed explicitly to builtins and
/// the process executor.
#[derive(Clone, Debug)]
pub struct Session {
    pub vars: VariableStore,
    pub env: Environment,
}

impl Session {
    pub fn new(env: Environment) -> Self {
        Self {
            vars: VariableStore::new(),
            env,
        }
    }

    /// Session bound to the live process environment.
    pub fn capture() -> Self {
        Self::new(Environment::capture())
    }
}
