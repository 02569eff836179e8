/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use citations_core::Style;

#[test]
fn test_chicago_two_creators() {
    let record = record(&[
        ("author", &["Smith, John", "Doe, Jane"]),
        ("title", &["The Thing"]),
        ("publisher", &["Penguin"]),
        ("published_location", &["London"]),
        ("published_date", &["2020"]),
    ]);
    assert_eq!(
        render_html(Style::Chicago, &record),
        "Smith, John, and Jane Doe. <em>The Thing</em>. London: Penguin, 2020."
    );
}

#[test]
fn test_chicago_three_creators_use_et_al() {
    let record = record(&[
        ("author", &["Smith, John", "Doe, Jane", "Roe, Rick"]),
        ("title", &["The Thing"]),
    ]);
    assert_eq!(
        render_html(Style::Chicago, &record),
        "Smith, John, et al. <em>The Thing</em>."
    );
}

#[test]
fn test_chicago_compilers_as_creators() {
    let record = record(&[
        ("compiler", &["Doe, Jane", "Roe, Rick"]),
        ("title", &["Anthology"]),
    ]);
    assert_eq!(
        render_html(Style::Chicago, &record),
        "Doe, Jane, and Rick Roe, comps. <em>Anthology</em>."
    );
}

#[test]
fn test_chicago_translated_book_fixture() {
    let record = fixture("book.json");
    assert_eq!(
        render_html(Style::Chicago, &record),
        "Tolstoy, Leo. <em>War and Peace</em>. Translated by Louise Maude. 2nd ed. \
         London: Oxford University Press, 1922."
    );
}

#[test]
fn test_chicago_pages_follow_colon_without_digit() {
    let mut record = make_article(&["Doe, Jane"], "Paper", "Review", "");
    record.fields.insert("pages", vec!["45-67".to_string()]);
    assert_eq!(
        render_html(Style::Chicago, &record),
        "Doe, Jane. \"Paper.\" <em>Review</em>: pp. 45 - 67."
    );
}

#[test]
fn test_chicago_pages_follow_comma_after_year() {
    let mut record = make_article(&["Doe, Jane"], "Paper", "Law Review", "2014");
    record.fields.insert("volume", vec!["12".to_string()]);
    record.fields.insert("pages", vec!["45-67".to_string()]);
    assert_eq!(
        render_html(Style::Chicago, &record),
        "Doe, Jane. \"Paper.\" <em>Law Review</em>, vol. 12, 2014, pp. 45 - 67."
    );
}
