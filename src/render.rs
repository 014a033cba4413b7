//! Ticket text rendering: restricted placeholder substitution.
//!
//! Templates use `{name}` placeholders drawn from a fixed whitelist:
//! `{ticket_num}`, `{timestamp}`, `{task}` and `{wrapped_task}`. Literal
//! braces are written `{{` and `}}`. Anything else is a [`RenderError`],
//! never a panic and never a partially substituted ticket. An operator
//! typo in a template must not take the service down or print garbage.

use thiserror::Error;

use crate::wrap::wrap;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unknown placeholder '{{{0}}}'")]
    UnknownPlaceholder(String),
    #[error("unterminated '{{' in template")]
    UnterminatedBrace,
    #[error("unmatched '}}' in template")]
    UnmatchedBrace,
}

/// Render the final ticket text from a template.
///
/// Word-wraps `task` to `width` columns and substitutes the whitelisted
/// placeholders at their named positions.
pub fn render(
    template: &str,
    width: usize,
    ticket_num: u64,
    timestamp: &str,
    task: &str,
) -> Result<String, RenderError> {
    let wrapped_task = wrap(task, width);

    let mut out = String::with_capacity(template.len() + task.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => return Err(RenderError::UnterminatedBrace),
                    }
                }
                match name.as_str() {
                    "ticket_num" => out.push_str(&ticket_num.to_string()),
                    "timestamp" => out.push_str(timestamp),
                    "task" => out.push_str(task),
                    "wrapped_task" => out.push_str(&wrapped_task),
                    other => {
                        return Err(RenderError::UnknownPlaceholder(other.to_string()));
                    }
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(RenderError::UnmatchedBrace);
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_all_placeholders() {
        let text = render(
            "#{ticket_num} at {timestamp}\n{wrapped_task}\nraw: {task}",
            32,
            7,
            "2026-08-26 12:00:00",
            "Buy milk",
        )
        .unwrap();
        assert_eq!(
            text,
            "#7 at 2026-08-26 12:00:00\nBuy milk\nraw: Buy milk"
        );
    }

    #[test]
    fn wraps_task_before_substitution() {
        let text = render("{wrapped_task}", 10, 1, "", "The quick brown fox").unwrap();
        assert_eq!(text, "The quick\nbrown fox");
    }

    #[test]
    fn escaped_braces_are_literal() {
        let text = render("{{literal}} #{ticket_num}", 32, 3, "", "x").unwrap();
        assert_eq!(text, "{literal} #3");
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let err = render("{nope}", 32, 1, "", "x").unwrap_err();
        assert!(matches!(err, RenderError::UnknownPlaceholder(name) if name == "nope"));
    }

    #[test]
    fn unterminated_brace_is_an_error() {
        let err = render("broken {ticket_num", 32, 1, "", "x").unwrap_err();
        assert!(matches!(err, RenderError::UnterminatedBrace));
    }

    #[test]
    fn stray_closing_brace_is_an_error() {
        let err = render("oops }", 32, 1, "", "x").unwrap_err();
        assert!(matches!(err, RenderError::UnmatchedBrace));
    }
}
