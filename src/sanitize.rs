//! Cell text sanitization.
//!
//! Every cell in a grid table occupies exactly one output line, so values
//! that carry line breaks, tabs or other control characters have to be
//! flattened before their width is measured. A [`Sanitizer`] does that
//! flattening; tables own one and apply it to header names and rendered
//! values alike.
//!
//! ```rust
//! use rsttable::sanitize::{new_sanitizer, replace_newlines, replace_tabs};
//!
//! let sanitizer = new_sanitizer(vec![]);
//! assert_eq!(sanitizer.sanitize_str("two\nlines"), "two lines");
//!
//! let custom = new_sanitizer(vec![replace_tabs(" "), replace_newlines(" / ")]);
//! assert_eq!(custom.sanitize_str("a\tb\nc"), "a b / c");
//! ```

use unicode_width::UnicodeWidthStr;

/// Flattens cell text so it fits on a single grid line.
///
/// # Default Behavior
///
/// - **Newlines** (`\n`, `\r`): replaced with a single space
/// - **Tabs** (`\t`): replaced with four spaces
/// - **Other control characters**: removed
/// - **Printable characters**: kept unchanged
///
/// Configure with [`new_sanitizer`] and the option functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sanitizer {
    replace_newline: String,
    replace_tab: String,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            replace_newline: " ".to_string(),
            replace_tab: "    ".to_string(),
        }
    }
}

/// Configuration option applied by [`new_sanitizer`].
pub type SanitizerOpt = Box<dyn FnOnce(&mut Sanitizer)>;

/// Creates a sanitizer from the defaults plus `opts`, applied in order.
///
/// When two options set the same replacement the last one wins:
///
/// ```rust
/// use rsttable::sanitize::{new_sanitizer, replace_tabs};
///
/// let sanitizer = new_sanitizer(vec![replace_tabs("FIRST"), replace_tabs("SECOND")]);
/// assert_eq!(sanitizer.sanitize_str("a\tb"), "aSECONDb");
/// ```
pub fn new_sanitizer(opts: Vec<SanitizerOpt>) -> Sanitizer {
    let mut s = Sanitizer::default();
    for opt in opts {
        opt(&mut s);
    }
    s
}

/// Replaces each tab with `tab_repl`. Control characters in `tab_repl` are
/// dropped.
pub fn replace_tabs(tab_repl: &str) -> SanitizerOpt {
    let repl: String = tab_repl.chars().filter(|c| !c.is_control()).collect();
    Box::new(move |s: &mut Sanitizer| s.replace_tab = repl)
}

/// Replaces each `\n` and `\r` with `nl_repl`.
///
/// Control characters in `nl_repl` are dropped; a replacement containing a
/// line break would split the grid row.
pub fn replace_newlines(nl_repl: &str) -> SanitizerOpt {
    let repl: String = nl_repl.chars().filter(|c| !c.is_control()).collect();
    Box::new(move |s: &mut Sanitizer| s.replace_newline = repl)
}

impl Sanitizer {
    /// Returns `input` flattened to a single line.
    pub fn sanitize_str(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for ch in input.chars() {
            match ch {
                '\r' | '\n' => out.push_str(&self.replace_newline),
                '\t' => out.push_str(&self.replace_tab),
                c if c.is_control() => {}
                c => out.push(c),
            }
        }
        out
    }
}

/// Display width of already sanitized cell text.
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let sanitizer = Sanitizer::default();
        assert_eq!(sanitizer.sanitize_str("Hello\tworld\n"), "Hello    world ");
        assert_eq!(sanitizer.sanitize_str("a\r\nb"), "a  b");
    }

    #[test]
    fn test_control_chars_removed() {
        let sanitizer = new_sanitizer(vec![]);
        assert_eq!(sanitizer.sanitize_str("Text\x00\x07\x08\x7f"), "Text");
    }

    #[test]
    fn test_custom_replacements() {
        let sanitizer = new_sanitizer(vec![replace_tabs("->"), replace_newlines(" | ")]);
        assert_eq!(sanitizer.sanitize_str("a\tb\nc"), "a->b | c");
    }

    #[test]
    fn test_newline_replacement_cannot_reintroduce_breaks() {
        let sanitizer = new_sanitizer(vec![replace_newlines("<\n>")]);
        assert_eq!(sanitizer.sanitize_str("a\nb"), "a<>b");
    }

    #[test]
    fn test_printable_text_untouched() {
        let sanitizer = Sanitizer::default();
        assert_eq!(sanitizer.sanitize_str("plain text 123"), "plain text 123");
    }

    #[test]
    fn test_display_width_ascii() {
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("profession"), 10);
    }
}
