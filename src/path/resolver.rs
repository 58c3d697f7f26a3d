use std::ffi::OsStr;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use super::source::{DirSource, EntryKind, FsSource};

#[derive(Debug)]
pub enum ResolveError {
    /// The command ends in `/`, naming a directory rather than a program.
    PureDirectory(String),
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::PureDirectory(_) => {
                write!(f, "Invalid command: need a command not a pure directory!")
            }
            ResolveError::Unreadable { path, source } => {
                write!(f, "invalid directory path {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ResolveError {}

/// What to do when a directory on the search path cannot be listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnreadableDirPolicy {
    #[default]
    Skip,
    Abort,
}

/// Finds programs by walking each search root depth-first.
///
/// Entries are visited in the order the source lists them. A subdirectory
/// is searched completely before the siblings that follow it, and the
/// first non-directory entry whose name equals the command wins.
#[derive(Debug, Clone)]
pub struct Resolver<S = FsSource> {
    source: S,
    policy: UnreadableDirPolicy,
}

impl Resolver<FsSource> {
    pub fn new(policy: UnreadableDirPolicy) -> Self {
        Self::with_source(FsSource, policy)
    }
}

impl<S: DirSource> Resolver<S> {
    pub fn with_source(source: S, policy: UnreadableDirPolicy) -> Self {
        Self { source, policy }
    }

    /// Resolve a command token. A token containing `/` is searched for only
    /// under its own directory part; a bare name is searched for under each
    /// of `search_paths` in turn.
    pub fn resolve(
        &self,
        token: &str,
        search_paths: &[PathBuf],
    ) -> Result<Option<PathBuf>, ResolveError> {
        match token.rfind('/') {
            Some(pos) => {
                let (dir, file) = token.split_at(pos + 1);
                if file.is_empty() {
                    return Err(ResolveError::PureDirectory(token.to_string()));
                }
                self.search_roots(&[PathBuf::from(dir)], OsStr::new(file))
            }
            None => self.search_roots(search_paths, OsStr::new(token)),
        }
    }

    fn search_roots(
        &self,
        roots: &[PathBuf],
        name: &OsStr,
    ) -> Result<Option<PathBuf>, ResolveError> {
        for root in roots {
            if let Some(found) = self.search(root, name)? {
                log::debug!("resolved {:?} to {}", name, found.display());
                return Ok(Some(found));
            }
        }
        Ok(None)
    }

    fn search(&self, dir: &Path, name: &OsStr) -> Result<Option<PathBuf>, ResolveError> {
        let entries = match self.source.read_dir(dir) {
            Ok(entries) => entries,
            Err(source) => match self.policy {
                UnreadableDirPolicy::Skip => {
                    log::warn!("skipping unreadable directory {}: {}", dir.display(), source);
                    return Ok(None);
                }
                UnreadableDirPolicy::Abort => {
                    return Err(ResolveError::Unreadable {
                        path: dir.to_path_buf(),
                        source,
                    })
                }
            },
        };

        for entry in entries {
            if entry.name == "." || entry.name == ".." {
                continue;
            }
            match entry.kind {
                EntryKind::Directory => {
                    if let Some(found) = self.search(&dir.join(&entry.name), name)? {
                        return Ok(Some(found));
                    }
                }
                EntryKind::File => {
                    if entry.name.as_os_str() == name {
                        return Ok(Some(dir.join(&entry.name)));
                    }
                }
            }
        }
        Ok(None)
    }
}
