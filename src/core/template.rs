//! Entry template interpolation
//!
//! Templates are plain text with `{key}` placeholders; `{{` and `}}`
//! escape literal braces. Every placeholder must resolve before anything
//! is emitted — an unknown key fails the whole render.

use super::error::{LoggerError, Result};

/// Render `template`, resolving each placeholder through `resolve`.
///
/// `resolve` returns `None` for unknown keys, which surfaces as
/// [`LoggerError::UnknownPlaceholder`]. An unterminated or empty
/// placeholder is a [`LoggerError::MalformedTemplate`].
pub fn render(template: &str, mut resolve: impl FnMut(&str) -> Option<String>) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 32);
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') => {
                            return Err(LoggerError::malformed_template(
                                "'{' inside a placeholder",
                            ));
                        }
                        Some(k) => key.push(k),
                        None => {
                            return Err(LoggerError::malformed_template(
                                "unterminated placeholder",
                            ));
                        }
                    }
                }
                if key.is_empty() {
                    return Err(LoggerError::malformed_template("empty placeholder"));
                }
                match resolve(&key) {
                    Some(value) => out.push_str(&value),
                    None => return Err(LoggerError::unknown_placeholder(key)),
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(LoggerError::malformed_template("unmatched '}'"));
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Collect the placeholder keys a template references, in order.
///
/// Useful for validating a template against a known key set before it is
/// installed on a logger.
pub fn placeholders(template: &str) -> Result<Vec<String>> {
    let mut keys = Vec::new();
    render(template, |key| {
        keys.push(key.to_string());
        Some(String::new())
    })?;
    Ok(keys)
}
