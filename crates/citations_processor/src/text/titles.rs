/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Title casing and quoting.

use super::clean::capitalize;

/// Connector words left lower-case in title case.
const SMALL_WORDS: &[&str] = &[
    "a", "an", "and", "but", "by", "for", "it", "of", "the", "to", "with",
];

/// Upper-case the first letter of a word, skipping leading punctuation.
fn capitalize_word(word: &str) -> String {
    match word.char_indices().find(|(_, c)| c.is_alphabetic()) {
        Some((i, c)) if c.is_lowercase() => {
            format!("{}{}", &word[..i], capitalize(&word[i..]))
        }
        _ => word.to_string(),
    }
}

fn bare_word(word: &str) -> String {
    word.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase()
}

/// Iterate words with a flag marking those that start a title or subtitle.
fn words_with_starts(title: &str) -> impl Iterator<Item = (bool, &str)> {
    let mut starts = true;
    title.split(' ').map(move |word| {
        let is_start = starts;
        if !word.is_empty() {
            starts = word.ends_with(':');
        }
        (is_start, word)
    })
}

/// Title case: capitalize every word except small connectors, which stay
/// lower-case unless they open the title or a subtitle.
pub fn title_case(title: &str) -> String {
    words_with_starts(title)
        .map(|(is_start, word)| {
            if !is_start && SMALL_WORDS.contains(&bare_word(word).as_str()) {
                word.to_lowercase()
            } else {
                capitalize_word(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Words with a capital past the first letter (acronyms, "McDonald",
/// "iPhone") are kept as written.
fn has_inner_capital(word: &str) -> bool {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .skip(1)
        .any(char::is_uppercase)
}

/// Sentence case: only the first word of the title and of any subtitle is
/// capitalized.
pub fn sentence_case(title: &str) -> String {
    words_with_starts(title)
        .map(|(is_start, word)| {
            if is_start {
                capitalize_word(word)
            } else if has_inner_capital(word) {
                word.to_string()
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn ends_with_ellipsis(value: &str) -> bool {
    value.ends_with("...") || value.ends_with('…')
}

/// Strip all trailing periods, keeping an ellipsis.
pub fn strip_trailing_periods(value: &str) -> &str {
    let value = value.trim_end();
    if ends_with_ellipsis(value) {
        value
    } else {
        value.trim_end_matches('.')
    }
}

/// Strip one trailing period, keeping an ellipsis.
pub fn strip_trailing_period(value: &str) -> &str {
    let value = value.trim_end();
    if ends_with_ellipsis(value) {
        value
    } else {
        value.strip_suffix('.').unwrap_or(value)
    }
}

fn is_quote_mark(c: char) -> bool {
    matches!(
        c,
        '"' | '\u{201C}' | '\u{201D}' | '\u{2018}' | '\u{2019}' | '\u{201E}' | '\u{201F}'
            | '\u{AB}' | '\u{BB}' | '\u{2039}' | '\u{203A}'
    )
}

/// Prepare the title of a contained work for double quotes: title case,
/// inner quotes turned into single quotes, trailing period removed.
pub fn quotable_title(title: &str) -> String {
    let cased = title_case(title);
    let single: String = cased
        .chars()
        .map(|c| if is_quote_mark(c) { '\'' } else { c })
        .collect();
    strip_trailing_period(&single).to_string()
}
