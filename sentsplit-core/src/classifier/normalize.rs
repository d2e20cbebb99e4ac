//! Space normalization around classification passes

/// Collapse runs of spaces, drop spaces next to newlines and at either end
///
/// Only U+0020 is treated as a separator; tabs and other whitespace are
/// ordinary characters at this stage.
pub fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for ch in text.chars() {
        match ch {
            ' ' => pending_space = true,
            '\n' => {
                pending_space = false;
                out.push('\n');
            }
            _ => {
                if pending_space && !out.is_empty() && !out.ends_with('\n') {
                    out.push(' ');
                }
                pending_space = false;
                out.push(ch);
            }
        }
    }

    out
}

/// Final cleanup: normalized spaces and exactly one trailing newline
///
/// Returns an empty string when nothing but whitespace is left.
pub fn finish(text: &str) -> String {
    let mut out = collapse_spaces(text);
    let content_len = out.trim_end_matches('\n').len();
    out.truncate(content_len);

    if !out.is_empty() {
        out.push('\n');
    }
    out
}
