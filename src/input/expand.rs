use crate::core::ident::ident_run_len;
use crate::core::vars::VariableStore;

/// Replace `$name` references with their values from `store`.
///
/// After `$` the whole identifier run is read and the longest bound prefix
/// of it is substituted; the rest of the run stays as literal text. When no
/// prefix is bound the entire run is dropped. A `$` with no identifier after
/// it disappears. Substituted values are not scanned again.
pub fn expand_variables(line: &str, store: &VariableStore) -> String {
    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);

        let after = &rest[pos + 1..];
        let run_len = ident_run_len(after);
        match store.longest_bound_prefix(&after[..run_len]) {
            Some((len, value)) => {
                out.push_str(value);
                rest = &after[len..];
            }
            None => rest = &after[run_len..],
        }
    }

    out.push_str(rest);
    out
}
