/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Volume, issue, pages and edition.

use super::CitationBuilder;
use crate::text::{clean_end_punctuation, clean_field};
use citations_core::BuildOptions;

impl CitationBuilder {
    /// Prefix "vol." unless the value already carries a number label.
    pub fn setup_volume(&self, value: &str, opts: BuildOptions) -> String {
        self.labeled(value, opts.volume_prefix, "vol.")
    }

    /// Prefix "no." unless the value already carries a number label.
    pub fn setup_issue(&self, value: &str, opts: BuildOptions) -> String {
        self.labeled(value, opts.issue_prefix, "no.")
    }

    fn labeled(&self, value: &str, enabled: bool, label: &str) -> String {
        let value = clean_field(value);
        if enabled && !value.is_empty() && !self.number_label.is_match(&value) {
            format!("{label} {value}")
        } else {
            value
        }
    }
}

/// A page reference. All parts are empty when no page number was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRange {
    pub text: String,
    pub from: String,
    pub to: String,
}

impl CitationBuilder {
    pub fn setup_pages(&self, value: &str, opts: BuildOptions) -> PageRange {
        let stripped = self.page_label.replace_all(value, "");
        if !stripped.chars().any(|c| c.is_ascii_digit()) {
            return PageRange::default();
        }

        let parts: Vec<String> = self
            .page_separator
            .split(&stripped)
            .map(clean_field)
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [] => PageRange::default(),
            [page] => PageRange {
                text: if opts.pages_prefix {
                    format!("p. {page}")
                } else {
                    page.clone()
                },
                from: page.clone(),
                to: String::new(),
            },
            [from, to, ..] => PageRange {
                text: if opts.pages_prefix {
                    format!("pp. {from} - {to}")
                } else {
                    format!("{from} - {to}")
                },
                from: from.clone(),
                to: to.clone(),
            },
        }
    }

    pub fn setup_edition(&self, value: &str) -> String {
        let edition = clean_end_punctuation(value);
        let lower = edition.to_lowercase();
        let first_word = lower.split_whitespace().next().unwrap_or("");
        if edition.is_empty() || first_word == "1st" || first_word == "first" {
            return String::new();
        }

        // Already "... ed." / "... eds." once the period was cleaned off.
        if edition.ends_with(" ed") || edition.ends_with(" eds") {
            return format!("{edition}.");
        }

        if let Some(m) = self.edition_near_miss.find(&edition) {
            let word = m.as_str().to_lowercase();
            let fixed = if word == "eds" || word == "editions" {
                "eds."
            } else {
                "ed."
            };
            return format!("{}{fixed}", &edition[..m.start()]);
        }

        format!("{edition} ed.")
    }
}
