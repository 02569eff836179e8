/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Legal citation style.
//!
//! The citation shape is picked from the item's data source and format:
//! thesis, book (also government documents), sound or video recording, or
//! article. Anything else falls back to the book shape, which only needs the
//! most common fields.

use super::{month_name, CitationStyle, OutputFormat};
use crate::abbreviations::LegalTables;
use crate::text::{reading_order, title_case};
use citations_core::{Citation, CitationDate};

#[derive(Debug, Clone, Copy)]
pub struct Bluebook<'a> {
    tables: &'a LegalTables,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Thesis,
    Book,
    Media,
    Article,
}

fn shape_of(c: &Citation) -> Shape {
    if c.data_source == "libraetd" || c.format == "thesis" {
        return Shape::Thesis;
    }
    match c.format.as_str() {
        "book" | "government_document" => Shape::Book,
        "sound" | "video" => Shape::Media,
        "article" => Shape::Article,
        _ => Shape::Book,
    }
}

/// Non-empty leading parts in small caps, separated by commas.
fn lead<F: OutputFormat>(parts: &[&str], fmt: &F) -> String {
    parts
        .iter()
        .filter(|part| !part.is_empty())
        .map(|part| fmt.small_caps(part))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Append " (group)" when the group has content.
fn push_group(res: &mut String, group: &str) {
    if group.is_empty() {
        return;
    }
    if !res.is_empty() {
        res.push(' ');
    }
    res.push('(');
    res.push_str(group);
    res.push(')');
}

/// End with a period; a citation with no content stays empty.
fn closed(res: String) -> String {
    if res.is_empty() {
        res
    } else {
        format!("{res}.")
    }
}

impl<'a> Bluebook<'a> {
    pub fn new(tables: &'a LegalTables) -> Self {
        Self { tables }
    }

    fn name(&self, name: &str) -> String {
        self.tables.abbreviate_names(&reading_order(name))
    }

    /// One name, "A & B", or "A et al.".
    fn names(&self, names: &[String]) -> String {
        match names {
            [] => String::new(),
            [only] => self.name(only),
            [first, second] => format!("{} & {}", self.name(first), self.name(second)),
            [first, ..] => format!("{} et al.", self.name(first)),
        }
    }

    fn editors(&self, names: &[String]) -> String {
        match names.len() {
            0 => String::new(),
            1 => format!("{} ed.", self.names(names)),
            _ => format!("{} eds.", self.names(names)),
        }
    }

    fn translators(&self, names: &[String]) -> String {
        if names.is_empty() {
            return String::new();
        }
        format!("{} trans.", self.names(names))
    }

    fn month(&self, month: u32) -> String {
        self.tables.abbreviate_month(month_name(month))
    }

    /// Law reviews are cited by year alone.
    fn law_review_date(&self, date: &CitationDate) -> String {
        if date.is_empty() {
            return String::new();
        }
        date.year.to_string()
    }

    /// "Mar. 15, 2014", degrading to "Mar. 2014" or "2014".
    fn newspaper_date(&self, date: &CitationDate) -> String {
        if date.is_empty() {
            return String::new();
        }
        let month = self.month(date.month);
        match (month.is_empty(), date.day) {
            (false, 0) => format!("{} {}", month, date.year),
            (false, day) => format!("{} {}, {}", month, day, date.year),
            (true, _) => date.year.to_string(),
        }
    }

    /// "Mar. 2014" or "2014".
    fn magazine_date(&self, date: &CitationDate) -> String {
        if date.is_empty() {
            return String::new();
        }
        let month = self.month(date.month);
        if month.is_empty() {
            date.year.to_string()
        } else {
            format!("{} {}", month, date.year)
        }
    }

    fn book<F: OutputFormat>(&self, c: &Citation, fmt: &F) -> String {
        let authors = self.names(&c.creators.authors);
        let mut res = lead(&[authors.as_str(), c.title.as_str()], fmt);

        let mut space_list = Vec::new();
        if !c.edition.is_empty() {
            space_list.push(c.edition.clone());
        }
        if !c.date.is_empty() {
            space_list.push(c.date.year.to_string());
        }

        let mut comma_list = Vec::new();
        let editors = self.editors(&c.creators.editors);
        if !editors.is_empty() {
            comma_list.push(editors);
        }
        let translators = self.translators(&c.creators.translators);
        if !translators.is_empty() {
            comma_list.push(translators);
        }
        if !space_list.is_empty() {
            comma_list.push(space_list.join(" "));
        }

        push_group(&mut res, &comma_list.join(", "));
        closed(res)
    }

    fn article<F: OutputFormat>(&self, c: &Citation, fmt: &F) -> String {
        let mut comma_list = Vec::new();

        let authors = self.names(&c.creators.authors);
        if !authors.is_empty() {
            comma_list.push(authors);
        }
        if !c.title.is_empty() {
            comma_list.push(fmt.emph(&title_case(&c.title)));
        }

        let kind = c.publication_type.as_str();
        let scholarly = matches!(kind, "academic journal" | "review");

        if scholarly && self.tables.is_law_journal(&c.journal) {
            let mut space_list = Vec::new();
            if !c.volume.is_empty() {
                space_list.push(c.volume.clone());
            }
            if !c.journal.is_empty() {
                let journal = self.tables.abbreviate_periodical(&c.journal);
                space_list.push(fmt.small_caps(&journal));
            }
            if !c.page_from.is_empty() {
                space_list.push(c.page_from.clone());
            }
            let date = self.law_review_date(&c.date);
            if !date.is_empty() {
                space_list.push(format!("({date})"));
            }
            if !space_list.is_empty() {
                comma_list.push(space_list.join(" "));
            }
        } else {
            if !c.journal.is_empty() {
                let mut journal = self.tables.abbreviate_periodical(&c.journal);
                if !c.volume.is_empty() {
                    journal = format!("{} {}", c.volume, journal);
                }
                comma_list.push(fmt.small_caps(&journal));
            }

            let date = match kind {
                "news" => self.newspaper_date(&c.date),
                _ => self.magazine_date(&c.date),
            };
            if !date.is_empty() {
                comma_list.push(date);
            }

            if !c.page_from.is_empty() {
                comma_list.push(format!("at {}", c.page_from));
            }
        }

        closed(comma_list.join(", "))
    }

    fn media<F: OutputFormat>(&self, c: &Citation, fmt: &F) -> String {
        let authors = if c.format == "sound" {
            self.names(&c.creators.authors)
        } else {
            String::new()
        };
        let mut res = lead(&[authors.as_str(), c.title.as_str()], fmt);

        let mut space_list = Vec::new();
        if !c.publisher.is_empty() {
            space_list.push(c.publisher.clone());
        }
        if !c.date.is_empty() {
            space_list.push(c.date.year.to_string());
        }
        push_group(&mut res, &space_list.join(" "));
        closed(res)
    }

    fn thesis(&self, c: &Citation) -> String {
        let author = c
            .creators
            .authors
            .first()
            .map(|a| self.name(a))
            .unwrap_or_default();
        let mut res = [author.as_str(), c.title.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        push_group(&mut res, &self.newspaper_date(&c.date));
        push_group(&mut res, &c.publisher);
        closed(res)
    }
}

impl CitationStyle for Bluebook<'_> {
    fn assemble<F: OutputFormat>(&self, c: &Citation, fmt: &F) -> String {
        let shape = shape_of(c);
        tracing::debug!(?shape, format = %c.format, "legal citation shape");
        match shape {
            Shape::Thesis => self.thesis(c),
            Shape::Book => self.book(c, fmt),
            Shape::Media => self.media(c, fmt),
            Shape::Article => self.article(c, fmt),
        }
    }
}
