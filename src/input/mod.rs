mod expand;
mod tokenize;

pub use expand::expand_variables;
pub use tokenize::{prune_escapes, split_words};

use crate::core::vars::VariableStore;

/// One preprocessed input line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandLine {
    /// The line after substitution and backslash pruning, still holding
    /// its `\ ` escapes and original spacing.
    pub text: String,
    /// Argument words; `args[0]` is the command.
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn command(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    /// `text` from the start of its `index`-th space-delimited token to the
    /// end of the line. Escapes are not interpreted here.
    pub fn raw_from_word(&self, index: usize) -> Option<&str> {
        let mut rest = self.text.trim_start_matches(' ');
        for _ in 0..index {
            let end = rest.find(' ')?;
            rest = rest[end..].trim_start_matches(' ');
        }
        if rest.is_empty() {
            None
        } else {
            Some(rest)
        }
    }
}

pub fn preprocess(raw: &str, store: &VariableStore) -> CommandLine {
    let expanded = expand_variables(raw, store);
    let text = prune_escapes(&expanded);
    let args = split_words(&text);
    log::debug!("preprocessed {:?} into {:?}", raw, args);
    CommandLine { text, args }
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// True when the first word of the raw line is `exit`.
pub fn is_exit(line: &str) -> bool {
    line.split_whitespace().next() == Some("exit")
}
