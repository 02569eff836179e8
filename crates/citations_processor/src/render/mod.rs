/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Prose citation styles.
//!
//! Each style assembles a [`Citation`] left to right with a [`Joiner`],
//! formatting creators, titles and dates its own way.
//!
//! [`Joiner`]: crate::text::Joiner

pub mod apa;
pub mod bluebook;
pub mod chicago;
pub mod format;
pub mod html;
pub mod mla;
pub mod plain;

#[cfg(test)]
mod tests;

pub use apa::Apa;
pub use bluebook::Bluebook;
pub use chicago::Chicago;
pub use format::OutputFormat;
pub use html::Html;
pub use mla::Mla;
pub use plain::PlainText;

use citations_core::{Citation, CitationDate, Link};

/// A prose citation style.
pub trait CitationStyle {
    /// Assemble the citation from its fields.
    fn assemble<F: OutputFormat>(&self, citation: &Citation, fmt: &F) -> String;

    /// Render the citation. An explicit citation is returned verbatim.
    fn render<F: OutputFormat>(&self, citation: &Citation, fmt: &F) -> String {
        citation
            .explicit_text()
            .unwrap_or_else(|| self.assemble(citation, fmt))
    }
}

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Full English month name for 1-12, otherwise empty.
pub fn month_name(month: u32) -> &'static str {
    month
        .checked_sub(1)
        .and_then(|i| MONTHS.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Month name cut to three letters plus a period when longer.
pub fn short_month_name(month: u32) -> String {
    let name = month_name(month);
    if name.chars().count() > 3 {
        format!("{}.", &name[..3])
    } else {
        name.to_string()
    }
}

/// Day-month-year date for articles ("15 Mar. 2014", "Mar. 2014"); the
/// year alone otherwise.
pub fn day_month_year(date: &CitationDate, is_article: bool) -> String {
    if date.is_empty() {
        return String::new();
    }
    let month = short_month_name(date.month);
    match (is_article, month.is_empty(), date.day) {
        (true, false, 0) => format!("{} {}", month, date.year),
        (true, false, day) => format!("{} {} {}", day, month, date.year),
        _ => date.year.to_string(),
    }
}

/// Drop any creator that is really the publisher.
pub fn without_publisher<'a>(names: &'a [String], citation: &Citation) -> Vec<&'a str> {
    names
        .iter()
        .map(String::as_str)
        .filter(|name| {
            *name != citation.publisher.as_str() && *name != citation.publisher_name.as_str()
        })
        .collect()
}

/// Whether every name also appears in `role`.
pub fn all_in(names: &[&str], role: &[String]) -> bool {
    !names.is_empty() && names.iter().all(|n| role.iter().any(|r| r == n))
}

/// Join names, truncating long lists.
///
/// One name is shown alone; two to seven are separated by commas with
/// `last_sep` before the final name; more than seven show the first six, an
/// ellipsis and the final name.
pub fn truncated_list(names: &[String], last_sep: &str) -> String {
    let Some((last, rest)) = names.split_last() else {
        return String::new();
    };
    match names.len() {
        1 => last.clone(),
        2..=7 => format!("{}{}{}", rest.join(", "), last_sep, last),
        _ => format!("{}, ... {}", rest[..6].join(", "), last),
    }
}

/// Publisher with the place first ("London: Penguin") when both are known
/// and distinct.
pub fn place_first_publisher(citation: &Citation) -> String {
    let name = citation.publisher_name.as_str();
    let place = citation.publisher_place.as_str();
    if !name.is_empty() && !place.is_empty() && citation.publisher == format!("{name}: {place}") {
        format!("{place}: {name}")
    } else {
        citation.publisher.clone()
    }
}

pub fn render_link<F: OutputFormat>(link: Option<&Link>, fmt: &F) -> String {
    link.map(|l| fmt.link(&l.href, &l.text)).unwrap_or_default()
}
