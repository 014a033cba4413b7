//! Receipt-style word wrapping for ticket task text.
//!
//! Wrapping preserves the structure of the input: blank-line-delimited
//! paragraphs stay separated, and explicit line breaks within a paragraph
//! are kept as intentional breaks. Only the individual logical lines are
//! re-flowed to the target column width.

/// Column width used when a template does not carry a usable one.
pub const DEFAULT_WIDTH: usize = 32;

/// Wrap `task` to `width` columns.
///
/// - Paragraphs (separated by a blank line) are wrapped independently and
///   rejoined with a blank line.
/// - Each logical line within a paragraph is word-wrapped on its own, so
///   intentional breaks survive. Whitespace-only lines become empty lines
///   and are preserved.
/// - Words are never split or hyphenated; a word longer than `width`
///   stays intact on its own line.
///
/// A `width` of zero should not occur (the template store sanitizes it),
/// but is treated as [`DEFAULT_WIDTH`] rather than panicking.
pub fn wrap(task: &str, width: usize) -> String {
    let width = if width == 0 { DEFAULT_WIDTH } else { width };

    let paragraphs: Vec<String> = task
        .split("\n\n")
        .map(|paragraph| {
            let lines: Vec<String> = paragraph
                .split('\n')
                .map(|line| {
                    if line.trim().is_empty() {
                        String::new()
                    } else {
                        fill(line, width)
                    }
                })
                .collect();
            lines.join("\n").trim_end().to_string()
        })
        .collect();

    paragraphs.join("\n\n").trim_end().to_string()
}

/// Greedy word wrap of a single logical line.
///
/// Runs of whitespace collapse to a single space. Counting is by char,
/// which is close enough for receipt printers fed monospaced text.
fn fill(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut current = 0usize;

    for word in line.split_whitespace() {
        let len = word.chars().count();
        if current == 0 {
            out.push_str(word);
            current = len;
        } else if current + 1 + len <= width {
            out.push(' ');
            out.push_str(word);
            current += 1 + len;
        } else {
            out.push('\n');
            out.push_str(word);
            current = len;
        }
    }

    out
}
