/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Language and literature style.

use super::{
    all_in, day_month_year, render_link, truncated_list, without_publisher, CitationStyle,
    OutputFormat,
};
use crate::text::{
    capitalize, clean_end_punctuation, quotable_title, reading_order, title_case, Joiner, Sep,
};
use citations_core::Citation;

#[derive(Debug, Clone, Copy, Default)]
pub struct Mla;

/// First name as written, the rest in reading order.
fn creator_list(names: &[&str]) -> String {
    let ordered: Vec<String> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == 0 {
                capitalize(name)
            } else {
                reading_order(name)
            }
        })
        .collect();
    truncated_list(&ordered, ", and ")
}

/// Container editors: first as written, then "et al." or the second name in
/// reading order.
fn editor_list(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first}, and {}", reading_order(second)),
        [first, ..] => format!("{first}, et al."),
    }
}

/// Title of a contained work in quotes, anything else in italics.
pub(crate) fn work_title<F: OutputFormat>(c: &Citation, fmt: &F) -> String {
    if c.is_article {
        format!("\"{}.\"", quotable_title(&c.title))
    } else {
        format!("{}.", fmt.emph(&title_case(&c.title)))
    }
}

impl CitationStyle for Mla {
    fn assemble<F: OutputFormat>(&self, c: &Citation, fmt: &F) -> String {
        let mut j = Joiner::new();

        let authors = without_publisher(&c.creators.authors, c);
        let creators = if authors.is_empty() {
            without_publisher(&c.creators.editors, c)
        } else {
            authors
        };

        if !creators.is_empty() {
            j.push(Sep::None, &clean_end_punctuation(&creator_list(&creators)));
            if all_in(&creators, &c.creators.editors) {
                j.push_str(if creators.len() > 1 { ", editors" } else { ", editor" });
            }
            j.push_str(".");
        }

        if !c.title.is_empty() {
            j.push(Sep::Space, &work_title(c, fmt));
        }

        if !c.journal.is_empty() {
            j.push(Sep::Space, &fmt.emph(&title_case(&c.journal)));
        }

        j.push(Sep::Comma, &clean_end_punctuation(&c.edition));

        let container_editors: Vec<&str> = c
            .creators
            .editors
            .iter()
            .map(String::as_str)
            .filter(|e| !creators.contains(e))
            .collect();
        j.push(Sep::Comma, &clean_end_punctuation(&editor_list(&container_editors)));
        j.push(Sep::Comma, &c.accession_number);

        j.push(Sep::Comma, &c.publisher);
        j.push(Sep::Comma, &c.volume);
        j.push(Sep::Comma, &c.issue);
        j.push(Sep::Comma, &day_month_year(&c.date, c.is_article));
        j.push(Sep::Comma, &c.pages);
        j.push(Sep::Comma, &render_link(c.link.as_ref(), fmt));

        j.terminate();
        j.finish()
    }
}
