/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use citations_core::Style;
use citations_processor::Html;

fn tags(body: &str) -> Vec<&str> {
    body.split("\r\n")
        .filter(|line| !line.is_empty())
        .map(|line| &line[..2])
        .collect()
}

#[test]
fn test_ris_article_scenario() {
    let record = record(&[
        ("author", &["Doe, Jane"]),
        ("title", &["Paper"]),
        ("format", &["article"]),
    ]);
    let rendered = processor().render(Style::Ris, &record, &Html).unwrap();
    assert_eq!(rendered.body, "TY  - JOUR\r\nAU  - Doe, Jane\r\nTI  - Paper\r\nER  - \r\n");
    assert_eq!(rendered.content_type, "application/x-research-info-systems");
    assert_eq!(rendered.label, "RIS");
    assert_eq!(rendered.filename, None);
}

#[test]
fn test_ris_tags_are_sorted_between_type_and_end() {
    let record = fixture("book.json");
    let rendered = processor().render(Style::Ris, &record, &Html).unwrap();
    let tags = tags(&rendered.body);

    assert_eq!(tags.first(), Some(&"TY"));
    assert_eq!(tags.last(), Some(&"ER"));
    let inner = &tags[1..tags.len() - 1];
    let mut sorted = inner.to_vec();
    sorted.sort();
    assert_eq!(inner, sorted.as_slice());

    assert!(rendered.body.starts_with("TY  - BOOK\r\n"));
    assert!(rendered.body.contains("A4  - Maude, Louise\r\n"));
    assert!(rendered.body.contains("CY  - London\r\n"));
    assert!(rendered
        .body
        .contains("N1  - https://search.example.edu/sources/uva_library/items/u1001\r\n"));
    assert_eq!(rendered.filename.as_deref(), Some("u1001.ris"));
}

#[test]
fn test_ris_ignores_explicit_citation() {
    let record = record(&[("explicit", &["Custom citation"]), ("title", &["Paper"])]);
    let body = render_html(Style::Ris, &record);
    assert!(body.contains("TI  - Paper\r\n"));
    assert!(!body.contains("Custom"));
}

#[test]
fn test_ris_sanitizes_and_normalizes_values() {
    let record = record(&[("title", &["<b>Bold</b> &amp; more \u{2014} text"])]);
    let body = render_html(Style::Ris, &record);
    assert!(body.contains("TI  - Bold & more -- text\r\n"));
}

#[test]
fn test_ris_decodes_named_references_outside_basic_set() {
    let record = record(&[("title", &["Caf&eacute; Society &ndash; &hellip; &#8217;"])]);
    let body = render_html(Style::Ris, &record);
    assert!(body.contains("TI  - Caf\u{e9} Society \u{2013} \u{2026} \u{2019}\r\n"));
}

#[test]
fn test_ris_editor_exported_as_secondary_author() {
    let record = record(&[("editor", &["Roe, Rick"]), ("title", &["Essays"])]);
    let body = render_html(Style::Ris, &record);
    assert!(body.contains("A2  - Roe, Rick\r\n"));
}
