use super::EnvError;
use std::collections::BTreeMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::path::PathBuf;

/// The environment table handed to child processes.
///
/// A live table mirrors every write into the process environment so that
/// `getenv` in this process agrees with what children receive. A detached
/// table only ever changes its own copy. Entries are kept as raw OS
/// strings so children inherit them byte for byte.
#[derive(Clone, Debug)]
pub struct Environment {
    vars: BTreeMap<OsString, OsString>,
    live: bool,
}

impl Environment {
    pub fn capture() -> Self {
        Self {
            vars: snapshot(),
            live: true,
        }
    }

    pub fn detached<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            live: false,
        }
    }

    /// Re-read the process environment. Detached tables are left alone.
    pub fn refresh(&mut self) {
        if self.live {
            self.vars = snapshot();
        }
    }

    /// The entry for `name`, if it is set and valid UTF-8.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_os(name).and_then(OsStr::to_str)
    }

    pub fn get_os(&self, name: &str) -> Option<&OsStr> {
        self.vars.get(OsStr::new(name)).map(OsString::as_os_str)
    }

    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() || name.contains(['=', '\0']) {
            return Err(EnvError::InvalidName(name.to_string()));
        }
        if value.contains('\0') {
            return Err(EnvError::InvalidValue("value contains a NUL byte"));
        }

        if self.live {
            env::set_var(name, value);
        }
        self.vars.insert(name.into(), value.into());
        Ok(())
    }

    /// Directories listed in `PATH`, in order. Empty segments are dropped.
    pub fn search_paths(&self) -> Vec<PathBuf> {
        self.get_os("PATH")
            .map(|path| {
                path.as_bytes()
                    .split(|&b| b == b':')
                    .filter(|s| !s.is_empty())
                    .map(|s| PathBuf::from(OsStr::from_bytes(s)))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn home(&self) -> Result<PathBuf, EnvError> {
        match self.get_os("HOME") {
            Some(home) if !home.is_empty() => Ok(PathBuf::from(home)),
            _ => dirs::home_dir().ok_or(EnvError::HomeDirNotFound),
        }
    }

    /// `NAME=value` entries in the layout `execve` expects.
    pub fn to_envp(&self) -> Vec<OsString> {
        self.vars
            .iter()
            .map(|(k, v)| {
                let mut entry = OsString::with_capacity(k.len() + v.len() + 1);
                entry.push(k);
                entry.push("=");
                entry.push(v);
                entry
            })
            .collect()
    }
}

fn snapshot() -> BTreeMap<OsString, OsString> {
    env::vars_os().collect()
}
