/// Clean raw article text for indexing and summarization.
///
/// Collapses whitespace runs to a single space, drops every character
/// outside ASCII letters, digits, `,.!?` and space, and trims the ends.
/// Idempotent, so already-clean text passes through unchanged.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if !is_kept(c) {
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
    out
}

fn is_kept(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, ',' | '.' | '!' | '?')
}
