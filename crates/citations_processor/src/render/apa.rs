/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Author-date style.

use super::{
    all_in, month_name, place_first_publisher, render_link, truncated_list, without_publisher,
    CitationStyle, OutputFormat,
};
use crate::text::{abbreviate, sentence_case, title_case, Joiner, Sep};
use citations_core::{Citation, CitationDate};

#[derive(Debug, Clone, Copy, Default)]
pub struct Apa;

fn abbreviated_list<F: OutputFormat>(names: &[&str], fmt: &F) -> String {
    let names: Vec<String> = names.iter().map(|n| abbreviate(n)).collect();
    truncated_list(&names, &format!(", {} ", fmt.ampersand()))
}

/// "(2020)" for books; "(2020, March 15)" for articles when known.
fn date_label(date: &CitationDate, is_article: bool) -> String {
    let month = month_name(date.month);
    let text = match (is_article, month.is_empty(), date.day) {
        (true, false, 0) => format!("{}, {}", date.year, month),
        (true, false, day) => format!("{}, {} {}", date.year, month, day),
        _ => date.year.to_string(),
    };
    format!("({text}).")
}

impl CitationStyle for Apa {
    fn assemble<F: OutputFormat>(&self, c: &Citation, fmt: &F) -> String {
        let mut j = Joiner::new();

        let authors = without_publisher(&c.creators.authors, c);
        let creators = if authors.is_empty() {
            without_publisher(&c.creators.editors, c)
        } else {
            authors
        };

        if !creators.is_empty() {
            j.push(Sep::None, &abbreviated_list(&creators, fmt));
            if all_in(&creators, &c.creators.editors) {
                j.push_str(if creators.len() > 1 { " (Eds.)." } else { " (Ed.)." });
            }
        }

        if c.date.is_empty() {
            if !j.is_empty() && !j.ends_with(".") {
                j.push_str(".");
            }
        } else {
            j.push(Sep::Space, &date_label(&c.date, c.is_article));
        }

        if !c.title.is_empty() {
            let title = sentence_case(&c.title);
            let title = if c.is_article { title } else { fmt.emph(&title) };
            j.push(Sep::Space, &title);
        }

        // Editors of the containing work, when they are not the creators.
        let container_editors: Vec<&str> = c
            .creators
            .editors
            .iter()
            .map(String::as_str)
            .filter(|e| !creators.contains(e))
            .collect();
        if !container_editors.is_empty() {
            if !j.is_empty() && !j.ends_with(".") {
                j.push_str(".");
            }
            let label = if container_editors.len() > 1 { "(Eds.)" } else { "(Ed.)" };
            let list = abbreviated_list(&container_editors, fmt);
            j.push(Sep::Space, &format!("{list} {label}"));
        }

        if !c.journal.is_empty() {
            j.push(Sep::Period, &fmt.emph(&title_case(&c.journal)));
        }

        if !c.edition.is_empty() {
            j.push(Sep::Space, &format!("({}).", c.edition));
        } else if c.journal.is_empty() && !j.is_empty() && !j.ends_with(".") {
            j.push_str(".");
        }

        j.push(Sep::Comma, &c.volume);
        if !c.issue.is_empty() {
            let sep = if c.volume.is_empty() { Sep::Space } else { Sep::None };
            j.push(sep, &format!("({})", c.issue));
        }
        j.push(Sep::Comma, &c.pages);
        j.push(Sep::Comma, &c.accession_number);

        let publisher = place_first_publisher(c);
        if !publisher.is_empty() {
            j.push(Sep::Comma, &publisher).push_str(".");
        }

        j.terminate();

        let link = render_link(c.link.as_ref(), fmt);
        if !link.is_empty() {
            j.push(Sep::Space, &format!("Retrieved from {link}"));
        }

        j.finish()
    }
}
