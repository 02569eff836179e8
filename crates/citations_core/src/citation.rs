/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The normalized, style-agnostic representation of one item.
//!
//! A [`Citation`] is produced once per request by the citation builder and is
//! read-only afterwards. Every prose style renders from it.

use serde::{Deserialize, Serialize};

/// A publication date as found in the record.
///
/// `year == 0` means no usable date was found; `month` and `day` are only
/// meaningful when the year is known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CitationDate {
    /// The raw text the date was matched from.
    pub text: String,
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl CitationDate {
    pub fn is_empty(&self) -> bool {
        self.year == 0
    }
}

/// A retrieval link: the target and the text shown to readers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
    pub text: String,
}

/// Creator names, each in bibliographic order as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creators {
    pub authors: Vec<String>,
    pub editors: Vec<String>,
    pub advisors: Vec<String>,
    pub compilers: Vec<String>,
    pub translators: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    /// An authoritative pre-formatted citation; overrides everything else.
    pub explicit: Vec<String>,
    pub is_article: bool,
    pub creators: Creators,
    pub title: String,
    pub journal: String,
    pub volume: String,
    pub issue: String,
    pub pages: String,
    pub page_from: String,
    pub page_to: String,
    pub edition: String,
    /// Publisher, combined with the place of publication when enabled.
    pub publisher: String,
    /// Cleaned publisher name alone.
    pub publisher_name: String,
    /// Cleaned place of publication alone.
    pub publisher_place: String,
    pub format: String,
    pub publication_type: String,
    pub data_source: String,
    /// Accession number of an archival item. Never set for articles.
    pub accession_number: String,
    /// Left empty when an accession number is present.
    pub date: CitationDate,
    pub link: Option<Link>,
}

impl Citation {
    pub fn has_explicit(&self) -> bool {
        !self.explicit.is_empty()
    }

    /// The explicit citation, one entry per line.
    pub fn explicit_text(&self) -> Option<String> {
        self.has_explicit().then(|| self.explicit.join("\n"))
    }
}
