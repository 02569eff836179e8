/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Field value cleanup.

fn is_end_punctuation(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':' | '/')
}

/// Strip trailing punctuation and surrounding whitespace.
///
/// Applying this twice gives the same result as applying it once.
pub fn clean_end_punctuation(value: &str) -> String {
    value.trim_start().trim_end_matches(is_end_punctuation).to_string()
}

/// Remove one level of enclosing brackets or parentheses.
///
/// `"[v. 3]"` becomes `"v. 3"`, while `"(a) (b)"` is left alone because the
/// opening parenthesis closes before the end of the value.
pub fn strip_brackets(value: &str) -> &str {
    let value = value.trim();
    let (open, close) = match value.chars().next() {
        Some('[') => ('[', ']'),
        Some('(') => ('(', ')'),
        _ => return value,
    };
    if !value.ends_with(close) || value.len() < 2 {
        return value;
    }

    let mut depth = 0usize;
    for (i, c) in value.char_indices() {
        if c == open {
            depth += 1;
        } else if c == close {
            depth = depth.saturating_sub(1);
            if depth == 0 && i + c.len_utf8() < value.len() {
                return value;
            }
        }
    }
    value[1..value.len() - 1].trim()
}

/// Clean a field value: unwrap brackets, then strip end punctuation.
pub fn clean_field(value: &str) -> String {
    clean_end_punctuation(strip_brackets(value))
}

/// Upper-case the first letter when the value starts lower-case.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => value.to_string(),
    }
}
