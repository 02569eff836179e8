/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation building.
//!
//! Turns a record's raw fields into a [`Citation`] by running one setup
//! routine per field. Every routine degrades to an empty value on input it
//! cannot make sense of, so building never fails.

pub mod date;
pub mod link;
pub mod number;
pub mod publisher;
pub mod title;


use crate::text::clean_field;
use citations_core::{BuildOptions, Citation, CitationDate, Creators, Field, RawFields, Record};
use regex::Regex;

/// Patterns used by the field routines, compiled once.
#[derive(Debug, Clone)]
pub struct CitationBuilder {
    page_label: Regex,
    page_separator: Regex,
    edition_near_miss: Regex,
    year_only: Regex,
    year_month_day: Regex,
    leading_year: Regex,
    trailing_year: Regex,
    number_label: Regex,
}

impl CitationBuilder {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            page_label: Regex::new(r"(?i)\bpp?\.\s*")?,
            page_separator: Regex::new(r"\s*[-\u{2013}\u{2014}]+\s*")?,
            edition_near_miss: Regex::new(r"(?i)\b(eds?|edn|editions?)$")?,
            year_only: Regex::new(r"^\d{4}$")?,
            year_month_day: Regex::new(r"^(\d{4})[-/](\d{1,2})(?:[-/](\d{1,2}))?")?,
            leading_year: Regex::new(r"^\D*(\d{1,4})(?:\D|$)")?,
            trailing_year: Regex::new(r"(?:^|\D)(\d{1,4})\D*$")?,
            number_label: Regex::new(r"(?i)^(vol(ume)?|no|num(ber)?|iss(ue)?)\b")?,
        })
    }

    /// Build a citation from a record.
    pub fn build(&self, record: &Record, opts: BuildOptions) -> Citation {
        let raw = &record.fields;

        let explicit = names(raw, Field::Explicit);
        if !explicit.is_empty() {
            return Citation {
                explicit,
                ..Citation::default()
            };
        }

        let format = lower(raw.first_of(Field::Format));
        let (publisher, publisher_name, publisher_place) = publisher::setup_publisher(raw, opts);
        let pages = self.setup_pages(raw.first_of(Field::Pages), opts);
        let is_article = format == "article";

        // Archival accession numbers stand in for the date and never apply to articles.
        let accession_number = if is_article {
            String::new()
        } else {
            clean_field(raw.first_of(Field::AccessionNumber))
        };
        let date = if accession_number.is_empty() {
            self.setup_date(raw.first_of(Field::PublishedDate))
        } else {
            CitationDate::default()
        };

        let citation = Citation {
            explicit,
            is_article,
            creators: Creators {
                authors: names(raw, Field::Author),
                editors: names(raw, Field::Editor),
                advisors: names(raw, Field::Advisor),
                compilers: names(raw, Field::Compiler),
                translators: names(raw, Field::Translator),
            },
            title: title::setup_title(raw),
            journal: title::setup_journal(raw),
            volume: self.setup_volume(raw.first_of(Field::Volume), opts),
            issue: self.setup_issue(raw.first_of(Field::Issue), opts),
            pages: pages.text,
            page_from: pages.from,
            page_to: pages.to,
            edition: self.setup_edition(raw.first_of(Field::Edition)),
            publisher,
            publisher_name,
            publisher_place,
            format,
            publication_type: lower(raw.first_of(Field::PublicationType)),
            data_source: lower(raw.first_of(Field::DataSource)),
            accession_number,
            date,
            link: link::setup_link(raw, record.url.as_deref(), opts),
        };

        tracing::debug!(
            title = %citation.title,
            format = %citation.format,
            year = citation.date.year,
            "built citation"
        );
        citation
    }
}

/// Non-empty, trimmed values of a name-like field.
fn names(raw: &RawFields, field: Field) -> Vec<String> {
    raw.field(field)
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .collect()
}

fn lower(value: &str) -> String {
    value.trim().to_lowercase()
}
