/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use std::path::PathBuf;

use citations_core::{Config, RawFields, Record, Style};
use citations_processor::{io::load_record, Html, PlainText, Processor};

// --- Helper Functions for Test Data Construction ---

/// Build a record from `(field, values)` pairs.
pub fn record(pairs: &[(&str, &[&str])]) -> Record {
    let mut fields = RawFields::default();
    for (key, values) in pairs {
        fields.insert(*key, values.iter().map(|v| v.to_string()).collect());
    }
    Record::new(fields)
}

/// A single-author book.
pub fn make_book(author: &str, title: &str, year: &str) -> Record {
    record(&[
        ("author", &[author]),
        ("title", &[title]),
        ("published_date", &[year]),
        ("format", &["book"]),
    ])
}

/// A journal article with the usual numbering fields.
pub fn make_article(authors: &[&str], title: &str, journal: &str, date: &str) -> Record {
    record(&[
        ("author", authors),
        ("title", &[title]),
        ("journal", &[journal]),
        ("published_date", &[date]),
        ("format", &["article"]),
    ])
}

/// A book with `count` authors named Author1, Author2, ...
pub fn make_book_many_authors(count: usize) -> Record {
    let authors: Vec<String> = (1..=count).map(|i| format!("Author{i}, Ann")).collect();
    let mut fields = RawFields::default();
    fields.insert("author", authors);
    fields.insert("title", vec!["Big Study".to_string()]);
    fields.insert("published_date", vec!["2001".to_string()]);
    Record::new(fields)
}

pub fn fixture(name: &str) -> Record {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    load_record(&path).expect("fixture should load")
}

// --- Rendering shortcuts ---

pub fn processor() -> Processor {
    Processor::new(Config::default()).expect("built-in patterns compile")
}

pub fn render_html(style: Style, record: &Record) -> String {
    processor()
        .render(style, record, &Html)
        .expect("style should render")
        .body
}

pub fn render_plain(style: Style, record: &Record) -> String {
    processor()
        .render(style, record, &PlainText)
        .expect("style should render")
        .body
}
