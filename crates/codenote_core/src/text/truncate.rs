//! Word-boundary truncation.

/// Marker appended to shortened output.
pub const ELLIPSIS: &str = "...";

/// Shortens `text` to at most `cap` chars plus [`ELLIPSIS`].
///
/// Text within the cap is returned trimmed and otherwise unchanged. Longer
/// text is cut at the last whitespace at or before char `cap`; trailing
/// separators (`,;:.-`) are dropped before the marker is appended. A single
/// word longer than `cap` is the only case cut inside a word.
pub fn truncate_at_word_boundary(text: &str, cap: usize) -> String {
    let text = text.trim();
    let Some((cap_byte, _)) = text.char_indices().nth(cap) else {
        return text.to_string();
    };

    let head = &text[..cap_byte];
    let cut = if text[cap_byte..].starts_with(char::is_whitespace) {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(space) => &head[..space],
            None => head,
        }
    };
    let cut = cut.trim_end_matches(|c: char| {
        c.is_whitespace() || matches!(c, ',' | ';' | ':' | '.' | '-')
    });

    format!("{cut}{ELLIPSIS}")
}
