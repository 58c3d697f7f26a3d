mod resolver;
mod source;

pub use resolver::{ResolveError, Resolver, UnreadableDirPolicy};
pub use source::{DirEntry, DirSource, EntryKind, FsSource};
