#[derive(Clone, Copy, PartialEq, Eq)]
enum Region {
    Leading,
    Command,
    Arguments,
}

/// Normalize backslashes in an already expanded line.
///
/// Leading spaces are dropped and backslashes in the command word are
/// removed. Past the command word a `\ ` pair is kept as is, marking an
/// escaped space, and any other backslash is removed.
pub fn prune_escapes(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut region = Region::Leading;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match region {
            Region::Leading => {
                if c != ' ' {
                    region = Region::Command;
                    if c != '\\' {
                        out.push(c);
                    }
                }
            }
            Region::Command => {
                if c == ' ' {
                    region = Region::Arguments;
                }
                if c != '\\' {
                    out.push(c);
                }
            }
            Region::Arguments => {
                if c != '\\' {
                    out.push(c);
                } else if chars.peek() == Some(&' ') {
                    chars.next();
                    out.push_str("\\ ");
                }
            }
        }
    }

    out
}

/// Split a pruned line on spaces. `\ ` becomes a literal space inside the
/// current word.
pub fn split_words(line: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ' ' => {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            }
            '\\' if chars.peek() == Some(&' ') => {
                chars.next();
                current.push(' ');
            }
            _ => current.push(c),
        }
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prune_command_word() {
        assert_eq!(prune_escapes("  l\\s -a"), "ls -a");
        assert_eq!(prune_escapes("\\ls"), "ls");
    }

    #[test]
    fn test_prune_arguments() {
        assert_eq!(prune_escapes("echo a\\ b"), "echo a\\ b");
        assert_eq!(prune_escapes("echo a\\b"), "echo ab");
        assert_eq!(prune_escapes("echo a\\\\ b"), "echo a\\ b");
        assert_eq!(prune_escapes("echo trailing\\"), "echo trailing");
    }

    #[test]
    fn test_prune_keeps_inner_spacing() {
        assert_eq!(prune_escapes("set  A   x  y "), "set  A   x  y ");
    }

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("ls  -a   -l"), vec!["ls", "-a", "-l"]);
        assert_eq!(split_words("echo a\\ b c"), vec!["echo", "a b", "c"]);
        assert_eq!(split_words("echo \\ x"), vec!["echo", " x"]);
        assert!(split_words("").is_empty());
        assert!(split_words("   ").is_empty());
    }
}
