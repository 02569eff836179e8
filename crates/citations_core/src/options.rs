/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation styles and their builder presets.

/// Switches that adjust how the citation builder prepares individual fields.
///
/// Each switch affects only its own field routine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Omit the URL scheme from displayed link text.
    pub strip_protocol: bool,
    /// Prefix bare volume numbers with "vol.".
    pub volume_prefix: bool,
    /// Prefix bare issue numbers with "no.".
    pub issue_prefix: bool,
    /// Prefix page ranges with "pp." and single pages with "p.".
    pub pages_prefix: bool,
    /// Combine the publisher name with the place of publication.
    pub publisher_place: bool,
}

crate::str_enum! {
    /// A supported citation style.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Style {
        /// Author-date.
        Apa = "apa",
        /// Language and literature.
        Mla = "mla",
        /// Footnote and bibliography.
        Chicago = "chicago",
        /// Legal citation.
        Bluebook = "bluebook",
        /// Explicit citation passthrough.
        CiteAs = "cite-as",
        /// Interchange tags.
        Ris = "ris",
    }
}

impl Style {
    /// Styles rendered together for the multi-result view.
    pub const PROSE: &'static [Style] = &[Style::Mla, Style::Apa, Style::Chicago, Style::Bluebook];

    /// Parse a style name or one of its aliases, ignoring case.
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        match name.as_str() {
            "cms" => Some(Style::Chicago),
            "lbb" => Some(Style::Bluebook),
            "citeas" | "cite_as" => Some(Style::CiteAs),
            other => Style::from_name(other),
        }
    }

    /// Builder preset for this style. `format` is the item's format value,
    /// which author-date style consults for newspaper page prefixes.
    pub fn build_options(&self, format: &str) -> BuildOptions {
        match self {
            Style::Apa => BuildOptions {
                pages_prefix: format == "news",
                publisher_place: true,
                ..BuildOptions::default()
            },
            Style::Mla => BuildOptions {
                strip_protocol: true,
                volume_prefix: true,
                issue_prefix: true,
                pages_prefix: true,
                publisher_place: false,
            },
            Style::Chicago => BuildOptions {
                strip_protocol: true,
                volume_prefix: true,
                issue_prefix: true,
                pages_prefix: true,
                publisher_place: true,
            },
            Style::Bluebook => BuildOptions {
                strip_protocol: true,
                ..BuildOptions::default()
            },
            Style::CiteAs | Style::Ris => BuildOptions::default(),
        }
    }
}

impl std::str::FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::parse(s).ok_or_else(|| format!("unknown citation style: {s}"))
    }
}
