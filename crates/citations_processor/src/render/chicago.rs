/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Footnote and bibliography style.

use super::{
    all_in, day_month_year, mla::work_title, place_first_publisher, render_link,
    without_publisher, CitationStyle, OutputFormat,
};
use crate::text::{capitalize, clean_end_punctuation, reading_order, title_case, Joiner, Sep};
use citations_core::Citation;

#[derive(Debug, Clone, Copy, Default)]
pub struct Chicago;

/// The role the leading creators turned out to hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Author,
    Editor,
    Compiler,
    Translator,
}

/// Leading creator list: the first name as written, then ", and" with the
/// second in reading order, or ", et al" for three or more.
fn leading_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [only] => capitalize(only),
        [first, second] => format!("{}, and {}", capitalize(first), reading_order(second)),
        [first, ..] => format!("{}, et al", capitalize(first)),
    }
}

/// Names in reading order: "A", "A and B", "A, B, and C".
fn reading_list(names: &[&str]) -> String {
    let ordered: Vec<String> = names.iter().map(|n| reading_order(n)).collect();
    match ordered.as_slice() {
        [] => String::new(),
        [only] => only.clone(),
        [first, second] => format!("{first} and {second}"),
        [rest @ .., last] => format!("{}, and {last}", rest.join(", ")),
    }
}

fn role_names<'a>(names: &'a [String], c: &Citation) -> Vec<&'a str> {
    without_publisher(names, c)
}

impl CitationStyle for Chicago {
    fn assemble<F: OutputFormat>(&self, c: &Citation, fmt: &F) -> String {
        let mut j = Joiner::new();

        let editors = role_names(&c.creators.editors, c);
        let compilers = role_names(&c.creators.compilers, c);
        let translators = role_names(&c.creators.translators, c);

        let authors: Vec<&str> = without_publisher(&c.creators.authors, c)
            .into_iter()
            .filter(|a| !compilers.contains(a) && !translators.contains(a))
            .collect();

        let (creators, role) = if !authors.is_empty() {
            let role = if all_in(&authors, &c.creators.editors) {
                Role::Editor
            } else {
                Role::Author
            };
            (authors, role)
        } else if !editors.is_empty() {
            (editors.clone(), Role::Editor)
        } else if !compilers.is_empty() {
            (compilers.clone(), Role::Compiler)
        } else {
            (translators.clone(), Role::Translator)
        };

        if !creators.is_empty() {
            j.push(Sep::None, &clean_end_punctuation(&leading_names(&creators)));
            let plural = creators.len() > 1;
            j.push_str(match role {
                Role::Author => "",
                Role::Editor if plural => ", eds",
                Role::Editor => ", ed",
                Role::Compiler if plural => ", comps",
                Role::Compiler => ", comp",
                Role::Translator => ", trans",
            });
            j.push_str(".");
        }

        if !c.title.is_empty() {
            j.push(Sep::Space, &work_title(c, fmt));
        }

        let credits = [
            ("Edited", &editors, Role::Editor),
            ("Compiled", &compilers, Role::Compiler),
            ("Translated", &translators, Role::Translator),
        ];
        for (action, names, credited) in credits {
            if names.is_empty() || (role == credited && !creators.is_empty()) {
                continue;
            }
            j.push(Sep::Space, &format!("{action} by {}.", reading_list(names)));
        }

        if !c.journal.is_empty() {
            j.push(Sep::Space, &fmt.emph(&title_case(&c.journal)));
        }

        j.push(Sep::Comma, &clean_end_punctuation(&c.edition));
        j.push(Sep::Comma, &c.accession_number);
        j.push(Sep::Comma, &c.volume);
        j.push(Sep::Comma, &c.issue);
        j.push(Sep::Period, &place_first_publisher(c));
        j.push(Sep::Comma, &day_month_year(&c.date, c.is_article));

        if !c.pages.is_empty() {
            if j.ends_with_digit() {
                j.push_str(",");
            }
            j.push(Sep::Colon, &c.pages);
        }

        j.push(Sep::Comma, &render_link(c.link.as_ref(), fmt));

        j.terminate();
        j.finish()
    }
}
