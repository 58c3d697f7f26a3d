/// Characters allowed in a variable name: `[A-Za-z0-9_]`.
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_ident_char)
}

/// Byte length of the identifier run at the start of `s`.
pub fn ident_run_len(s: &str) -> usize {
    s.find(|c: char| !is_ident_char(c)).unwrap_or(s.len())
}
