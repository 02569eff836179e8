/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Legal citation abbreviations.
//!
//! The tables are compiled once, when the processor is created, and are
//! read-only afterwards.

mod tables;

use regex::{NoExpand, Regex};

/// One compiled substitution.
#[derive(Debug, Clone)]
struct Abbreviation {
    pattern: Regex,
    replacement: &'static str,
}

fn whole_word(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)\b({pattern})\b"))
}

fn compile(entries: &[(&str, &'static str)]) -> Result<Vec<Abbreviation>, regex::Error> {
    entries
        .iter()
        .map(|(pattern, replacement)| {
            Ok(Abbreviation {
                pattern: whole_word(pattern)?,
                replacement,
            })
        })
        .collect()
}

fn apply(table: &[Abbreviation], text: &str) -> String {
    table.iter().fold(text.to_string(), |acc, entry| {
        entry
            .pattern
            .replace_all(&acc, NoExpand(entry.replacement))
            .into_owned()
    })
}

/// The compiled legal abbreviation tables.
#[derive(Debug, Clone)]
pub struct LegalTables {
    law_journals: Regex,
    case_names: Vec<Abbreviation>,
    geography: Vec<Abbreviation>,
    months: Vec<Abbreviation>,
    periodical_institutions: Vec<Abbreviation>,
}

impl LegalTables {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            law_journals: whole_word(&tables::LAW_JOURNAL_TERMS.join("|"))?,
            case_names: compile(tables::CASE_NAMES)?,
            geography: compile(tables::GEOGRAPHY)?,
            months: compile(tables::MONTHS)?,
            periodical_institutions: compile(tables::PERIODICAL_INSTITUTIONS)?,
        })
    }

    /// Whether a periodical title looks like a law journal.
    pub fn is_law_journal(&self, title: &str) -> bool {
        self.law_journals.is_match(title)
    }

    /// Abbreviate case names and institutional authors, then geography.
    pub fn abbreviate_names(&self, text: &str) -> String {
        let text = apply(&self.case_names, text);
        apply(&self.geography, &text)
    }

    /// Abbreviate a periodical title: institutions, then case names, then
    /// geography.
    pub fn abbreviate_periodical(&self, text: &str) -> String {
        let text = apply(&self.periodical_institutions, text);
        self.abbreviate_names(&text)
    }

    pub fn abbreviate_month(&self, month: &str) -> String {
        apply(&self.months, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> LegalTables {
        LegalTables::new().unwrap()
    }

    #[test]
    fn test_all_tables_compile() {
        let t = tables();
        assert_eq!(t.months.len(), 12);
        assert!(t.case_names.len() > 250);
        assert!(t.geography.len() > 250);
        assert!(t.periodical_institutions.len() > 75);
    }

    #[test]
    fn test_law_journal_detection() {
        let t = tables();
        assert!(t.is_law_journal("Harvard Law Review"));
        assert!(t.is_law_journal("Journal of Civil Rights and Economic Development"));
        assert!(t.is_law_journal("SUPREME COURT REVIEW"));
        assert!(!t.is_law_journal("Journal of Lawn Care"));
        assert!(!t.is_law_journal("Nature"));
    }

    #[test]
    fn test_months() {
        let t = tables();
        assert_eq!(t.abbreviate_month("September"), "Sept.");
        assert_eq!(t.abbreviate_month("May"), "May");
    }

    #[test]
    fn test_longer_phrases_win() {
        let t = tables();
        assert_eq!(t.abbreviate_names("West Virginia"), "W. Va.");
        assert_eq!(t.abbreviate_names("Northern Ireland"), "N. Ir.");
        assert_eq!(t.abbreviate_names("Civil Rights"), "C.R.");
    }

    #[test]
    fn test_case_insensitive_whole_words() {
        let t = tables();
        assert_eq!(t.abbreviate_names("virginia"), "Va.");
        assert_eq!(t.abbreviate_names("Virginian"), "Virginian");
    }

    #[test]
    fn test_periodical_title() {
        let t = tables();
        assert_eq!(t.abbreviate_periodical("Harvard Law Review"), "Harv. L. Rev.");
    }
}
