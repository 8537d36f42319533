/// Returns true for horizontal whitespace: ASCII space and tab plus the
/// Unicode space separators (no-break space, narrow no-break space, ...).
///
/// Line breaks are not blanks; an amount never spans lines.
#[inline]
pub fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t' || (c.is_whitespace() && !is_line_break(c))
}

#[inline]
const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Strip blanks from both ends of an amount text.
#[inline]
pub fn blank_trim(input: &str) -> &str {
    input.trim_matches(is_blank)
}

/// Returns true if the text is empty after blank-trimming.
#[inline]
pub fn is_blank_text(input: &str) -> bool {
    blank_trim(input).is_empty()
}
