//! Text helpers for rendering nested source.
//!
//! Nodes never share a mutable cursor while serializing. A composite node
//! renders each child to a standalone string, then shifts every line of that
//! string right before splicing it into its own output.

/// Number of spaces a composite node adds in front of each child line.
pub const INDENT_WIDTH: usize = 4;

/// Build a run of `count` spaces.
#[inline]
pub fn spaces(count: usize) -> String {
    " ".repeat(count)
}

/// Prefix every line of `text` with `width` spaces.
///
/// Lines are split on `\n` and rejoined with `\n`, so the number of lines is
/// preserved exactly. Empty input yields a single line holding only the
/// prefix, and an empty trailing line (after a final `\n`) is prefixed too.
///
/// ```
/// use jsir_core::text::indent;
/// assert_eq!(indent("a\nb", 2), "  a\n  b");
/// assert_eq!(indent("", 4), "    ");
/// ```
pub fn indent(text: &str, width: usize) -> String {
    let prefix = spaces(width);
    let mut out = String::with_capacity(text.len() + prefix.len());
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&prefix);
        out.push_str(line);
    }
    out
}
