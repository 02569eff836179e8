/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Personal name handling.
//!
//! Names arrive in bibliographic order ("Surname, Given, Suffix"). Renderers
//! need them in reading order ("Given Surname, Suffix") or abbreviated
//! ("Surname, G.").

use super::clean::capitalize;

/// Generational and professional suffixes kept verbatim.
const SUFFIXES: &[&str] = &[
    "Jr.", "Jr", "Sr.", "Sr", "II", "III", "IV", "Ph.D.", "PhD", "M.D.", "Esq.",
];

/// Lower-case connectors that are never reduced to an initial.
const STOPWORDS: &[&str] = &[
    "van", "von", "de", "der", "den", "la", "le", "du", "da", "di", "del", "des", "of", "the",
    "and", "y",
];

fn is_suffix(part: &str) -> bool {
    SUFFIXES.contains(&part)
}

fn is_roman_numeral(token: &str) -> bool {
    let token = token.strip_suffix('.').unwrap_or(token);
    token.len() > 1 && token.chars().all(|c| matches!(c, 'I' | 'V' | 'X' | 'L' | 'C' | 'D' | 'M'))
}

/// A life-dates part such as `1950`, `1950-` or `1950-2010.`.
fn is_date_part(part: &str) -> bool {
    let part = part.strip_suffix('.').unwrap_or(part);
    let (birth, death) = match part.split_once('-') {
        Some((birth, death)) => (birth, Some(death)),
        None => (part, None),
    };
    let is_year = |s: &str| s.len() == 4 && s.chars().all(|c| c.is_ascii_digit());
    is_year(birth) && death.map_or(true, |d| d.is_empty() || is_year(d))
}

/// Corporate names are recognized by a parenthetical qualifier.
fn is_corporate(name: &str) -> bool {
    name.contains('(')
}

/// A name split into its components.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameParts {
    pub surname: String,
    pub given: String,
    pub suffixes: Vec<String>,
}

/// Split a personal name. Accepts bibliographic or reading order.
pub fn parse_name(name: &str) -> NameParts {
    let mut parts: Vec<&str> = name
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    while parts.len() > 1 && parts.last().is_some_and(|p| is_date_part(p)) {
        parts.pop();
    }

    let mut suffixes = Vec::new();
    while parts.len() > 1 && parts.last().is_some_and(|p| is_suffix(p)) {
        if let Some(suffix) = parts.pop() {
            suffixes.insert(0, suffix.to_string());
        }
    }

    if parts.len() > 1 {
        return NameParts {
            surname: parts[0].to_string(),
            given: parts[1..].join(", "),
            suffixes,
        };
    }

    let tokens: Vec<&str> = parts
        .first()
        .map(|p| p.split_whitespace().collect())
        .unwrap_or_default();
    let Some((last, leading)) = tokens.split_last() else {
        return NameParts {
            suffixes,
            ..NameParts::default()
        };
    };

    // Pull lower-case particles into the surname: "Jean de la Croix".
    let mut split = leading.len();
    while split > 1 && is_lower_case(leading[split - 1]) {
        split -= 1;
    }
    let mut surname: Vec<&str> = leading[split..].to_vec();
    surname.push(last);

    NameParts {
        surname: surname.join(" "),
        given: leading[..split].join(" "),
        suffixes,
    }
}

fn is_lower_case(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_uppercase)
}

/// Convert a name to reading order: "Given Surname, Suffix".
///
/// Corporate names pass through unchanged.
pub fn reading_order(name: &str) -> String {
    let name = name.trim();
    if is_corporate(name) {
        return name.to_string();
    }

    let parts = parse_name(name);
    let mut result = [parts.given.as_str(), parts.surname.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    for suffix in &parts.suffixes {
        if !result.is_empty() {
            result.push_str(", ");
        }
        result.push_str(suffix);
    }
    result
}

/// Abbreviate given names to initials: "Smith, John Paul" → "Smith, J. P.".
///
/// Corporate names pass through unchanged.
pub fn abbreviate(name: &str) -> String {
    let name = name.trim();
    if is_corporate(name) {
        return name.to_string();
    }

    let mut parts: Vec<&str> = name
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();
    if parts.len() > 1 && parts.last().is_some_and(|p| is_date_part(p)) {
        parts.pop();
    }
    let Some((surname, rest)) = parts.split_first() else {
        return String::new();
    };

    let mut result = surname.to_string();
    for part in rest {
        let reduced = part
            .split_whitespace()
            .map(initial)
            .collect::<Vec<_>>()
            .join(" ");
        result.push_str(", ");
        result.push_str(&reduced);
    }
    capitalize(&result)
}

fn initial(token: &str) -> String {
    if STOPWORDS.contains(&token) || token.contains('.') || is_roman_numeral(token) || is_suffix(token)
    {
        return token.to_string();
    }
    match token.chars().next() {
        Some(c) if c.is_alphabetic() => format!("{c}."),
        _ => token.to_string(),
    }
}
