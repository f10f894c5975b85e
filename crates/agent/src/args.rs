//! Argument decoding for registered functions.
//!
//! The framework hands each function the raw text it extracted from the user
//! turn. Few-shot transcripts write structured arguments as Python-style dicts
//! (`{'customer_id': 6}`), so strict JSON is tried first and the Python literal
//! is rewritten as JSON on a second attempt.

use serde::de::DeserializeOwned;

use crate::errors::ToolError;

pub fn parse_json_arg<T: DeserializeOwned>(
    function: &'static str,
    input: &str,
) -> Result<T, ToolError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ToolError::invalid_argument(function, "expected a JSON object, got nothing"));
    }

    match serde_json::from_str(trimmed) {
        Ok(value) => Ok(value),
        Err(strict_error) => serde_json::from_str(&python_literal_to_json(trimmed))
            .map_err(|_| ToolError::invalid_argument(function, strict_error.to_string())),
    }
}

/// Rewrites a Python dict/list literal as JSON: string quotes become double
/// quotes and `True`/`False`/`None` become their JSON keywords. Text that is
/// not a Python literal passes through and fails in the JSON parser.
fn python_literal_to_json(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' | '"' => {
                output.push('"');
                while let Some(next) = chars.next() {
                    match next {
                        '\\' => match chars.next() {
                            Some('\'') => output.push('\''),
                            Some(escaped) => {
                                output.push('\\');
                                output.push(escaped);
                            }
                            None => output.push_str("\\\\"),
                        },
                        quote if quote == ch => break,
                        '"' => output.push_str("\\\""),
                        other => output.push(other),
                    }
                }
                output.push('"');
            }
            ch if ch.is_ascii_alphabetic() || ch == '_' => {
                let mut word = String::from(ch);
                while let Some(&next) = chars.peek() {
                    if !(next.is_ascii_alphanumeric() || next == '_') {
                        break;
                    }
                    word.push(next);
                    chars.next();
                }
                output.push_str(match word.as_str() {
                    "True" => "true",
                    "False" => "false",
                    "None" => "null",
                    _ => word.as_str(),
                });
            }
            other => output.push(other),
        }
    }

    output
}

pub fn parse_text_arg(function: &'static str, input: &str) -> Result<String, ToolError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ToolError::invalid_argument(function, "expected non-empty text"));
    }
    Ok(trimmed.to_string())
}
