use std::collections::HashMap;
use std::fmt;

use super::ident::is_valid_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarError {
    InvalidName(String),
}

impl fmt::Display for VarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarError::InvalidName(name) => write!(f, "invalid variable name: {}", name),
        }
    }
}

impl std::error::Error for VarError {}

/// Session-local variables set by `set` and `inc`. Kept apart from the
/// process environment; only `export` copies entries across.
#[derive(Clone, Debug, Default)]
pub struct VariableStore {
    vars: HashMap<Box<str>, Box<str>>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), VarError> {
        if !is_valid_name(name) {
            return Err(VarError::InvalidName(name.to_string()));
        }
        self.vars.insert(name.into(), value.into());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|s| s.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Longest prefix of the identifier run `run` that names a bound
    /// variable, as `(prefix_len, value)`.
    pub fn longest_bound_prefix(&self, run: &str) -> Option<(usize, &str)> {
        (1..=run.len())
            .rev()
            .filter(|&len| run.is_char_boundary(len))
            .find_map(|len| self.get(&run[..len]).map(|value| (len, value)))
    }
}
