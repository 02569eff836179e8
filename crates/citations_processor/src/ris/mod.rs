/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Interchange tag (RIS) output.
//!
//! Works from the record's raw fields rather than a built citation, so every
//! mapped field is exported, including ones no prose style displays.

pub mod sanitize;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;

use citations_core::{Field, RisConfig, Record};
use regex::Regex;

pub use sanitize::{Sanitizer, StrictSanitizer};

const TAG_TYPE: &str = "TY";
const TAG_END: &str = "ER";
const TAG_NOTE: &str = "N1";
const TAG_URL: &str = "UR";
const TAG_LIBRARY: &str = "DP";
const TAG_KEYWORD: &str = "KW";
const TYPE_GENERIC: &str = "GEN";
const LINE_ENDING: &str = "\r\n";

/// Author-type tags.
const AUTHOR_TAGS: &[&str] = &["AU", "A1", "A2", "A3", "A4"];

/// Characters rewritten to ASCII before sanitizing.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("\u{25BA}", ">"),
    ("\u{25B6}", ">"),
    ("\u{2022}", "*"),
    ("\u{B7}", "*"),
    ("\u{2013}", "-"),
    ("\u{2014}", "--"),
    ("\u{2192}", "->"),
    ("\u{2190}", "<-"),
    ("\u{2194}", "<->"),
    ("\u{21D2}", "=>"),
    ("\u{21D0}", "<="),
    ("\u{21D4}", "<=>"),
    ("\u{2264}", "<="),
    ("\u{2266}", "<="),
    ("\u{2265}", ">="),
    ("\u{2267}", ">="),
    ("\u{A9}", "(c)"),
    ("\u{AE}", "(R)"),
    ("\u{2019}", "'"),
    ("\u{2039}", "'"),
    ("\u{203A}", "'"),
    ("\u{AB}", "\""),
    ("\u{BB}", "\""),
];

fn is_author_tag(tag: &str) -> bool {
    AUTHOR_TAGS.contains(&tag)
}

/// Tags that keep one line per value.
fn is_repeatable(tag: &str) -> bool {
    is_author_tag(tag) || tag == TAG_KEYWORD || tag == TAG_NOTE
}

/// Role note for creators exported under an author tag.
fn role_suffix(field: &str, tag: &str) -> Option<&'static str> {
    if !matches!(tag, "AU" | "A1") {
        return None;
    }
    match Field::from_name(field) {
        Some(Field::Advisor) => Some(" (advisor)"),
        Some(Field::Editor) => Some(" (editor)"),
        _ => None,
    }
}

/// Last path segment of a URL, as used for download file names.
fn base_name(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/').rsplit('/').next().unwrap_or(path)
}

/// RIS renderer with its compiled tag check and sanitizer.
#[derive(Debug, Clone)]
pub struct Ris {
    valid_tag: Regex,
    sanitizer: StrictSanitizer,
}

impl Ris {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            valid_tag: Regex::new(r"^[A-Z0-9]{2}$")?,
            sanitizer: StrictSanitizer,
        })
    }

    /// Suggested file name: the record URL's last segment plus `extension`.
    pub fn file_name(&self, record: &Record, extension: Option<&str>) -> Option<String> {
        let url = record.url.as_deref()?.trim();
        let base = base_name(url);
        if base.is_empty() {
            return None;
        }
        Some(match extension {
            Some(ext) if !ext.is_empty() => format!("{base}.{ext}"),
            _ => base.to_string(),
        })
    }

    /// Collect values per tag, skipping invalid tag codes.
    fn tag_values(&self, record: &Record, config: &RisConfig) -> BTreeMap<String, Vec<String>> {
        let mut values: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for (field, field_values) in record.fields.iter() {
            let Some(tags) = config.field_tags.get(field) else {
                continue;
            };
            for tag in tags {
                let tag = tag.trim().to_uppercase();
                if !self.valid_tag.is_match(&tag) || tag == TAG_TYPE || tag == TAG_END {
                    tracing::warn!(%tag, %field, "skipping invalid RIS tag");
                    continue;
                }
                let suffix = role_suffix(field, &tag).unwrap_or("");
                let entry = values.entry(tag).or_default();
                entry.extend(field_values.iter().map(|v| format!("{v}{suffix}")));
            }
        }

        if let Some(url) = record.url.as_deref().filter(|u| !u.trim().is_empty()) {
            values
                .entry(TAG_NOTE.to_string())
                .or_default()
                .push(url.to_string());
        }
        values
    }

    fn clean_string(&self, value: &str) -> String {
        let replaced = REPLACEMENTS
            .iter()
            .fold(value.to_string(), |acc, (from, to)| acc.replace(from, to));
        self.sanitizer.sanitize(&replaced).trim().to_string()
    }

    /// Clean each line of a value, dropping empty lines.
    fn tag_value(&self, value: &str) -> String {
        value
            .replace("\\n", "\n")
            .split('\n')
            .map(|line| self.clean_string(line))
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(LINE_ENDING)
    }

    fn finish_value(&self, tag: &str, value: &str, max_length: usize) -> String {
        let mut value = self.tag_value(value);
        if !is_repeatable(tag) && tag != TAG_URL {
            value = value.replace('*', "#");
        }
        if is_author_tag(tag) || tag == TAG_KEYWORD {
            value = value.chars().take(max_length).collect();
        }
        value
    }

    pub fn render(&self, record: &Record, config: &RisConfig) -> String {
        let format = record.fields.first_of(Field::Format).trim().to_lowercase();
        let type_code = config
            .type_codes
            .get(&format)
            .map(|code| code.trim())
            .filter(|code| !code.is_empty())
            .unwrap_or(TYPE_GENERIC);

        let mut out = String::new();
        push_line(&mut out, TAG_TYPE, type_code);

        for (tag, values) in self.tag_values(record, config) {
            let merged: Vec<String> = if is_repeatable(&tag) {
                values
            } else if tag == TAG_URL {
                vec![values.join(" ; ")]
            } else if tag == TAG_LIBRARY {
                values.into_iter().take(1).collect()
            } else {
                vec![values.join(", ")]
            };

            for value in merged {
                let value = self.finish_value(&tag, &value, config.max_length);
                if !value.is_empty() {
                    push_line(&mut out, &tag, &value);
                }
            }
        }

        push_line(&mut out, TAG_END, "");
        out
    }
}

fn push_line(out: &mut String, tag: &str, value: &str) {
    out.push_str(tag);
    out.push_str("  - ");
    out.push_str(value);
    out.push_str(LINE_ENDING);
}
