/// Provenance line prepended to imported descriptions, since the internal
/// author may be a fallback user rather than the original one.
pub fn author_line(login: &str) -> String {
    format!("*Created by: {}*\n\n", login)
}

/// First `len` characters of `input`. Counts chars, so never splits a
/// multi-byte sequence.
pub fn char_prefix(input: &str, len: usize) -> &str {
    match input.char_indices().nth(len) {
        Some((idx, _)) => &input[..idx],
        None => input,
    }
}

pub fn is_hex(input: &str) -> bool {
    !input.is_empty() && input.chars().all(|ch| ch.is_ascii_hexdigit())
}
