/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use citations_core::{Config, Style};
use citations_processor::{Html, Processor, ProcessorError, Status};

#[test]
fn test_explicit_citation_is_returned_verbatim_by_every_prose_style() {
    let records = [
        record(&[("explicit", &["Doe, J. A Custom Citation."])]),
        record(&[
            ("explicit", &["First line", "Second <em>line</em>"]),
            ("author", &["Smith, John"]),
            ("title", &["Ignored Title"]),
            ("published_date", &["2020"]),
            ("format", &["article"]),
        ]),
    ];
    let expected = ["Doe, J. A Custom Citation.", "First line\nSecond <em>line</em>"];

    for (record, expected) in records.iter().zip(expected) {
        for style in [Style::Apa, Style::Mla, Style::Chicago, Style::Bluebook, Style::CiteAs] {
            assert_eq!(render_html(style, record), expected, "style {style}");
        }
    }
}

#[test]
fn test_cite_as_requires_explicit_citation() {
    let record = make_book("Smith, John", "The Thing", "2020");
    let err = processor().render(Style::CiteAs, &record, &Html).unwrap_err();
    assert!(matches!(err, ProcessorError::NoExplicitCitation));
    assert_eq!(err.status(), Status::Internal);
}

#[test]
fn test_explicit_only_style_refuses_to_assemble() {
    let mut config = Config::default();
    config.formats.bluebook.explicit_only = true;
    let processor = Processor::new(config).unwrap();

    let record = make_book("Smith, John", "The Thing", "2020");
    let err = processor.render(Style::Bluebook, &record, &Html).unwrap_err();
    assert_eq!(err.to_string(), "non-explicit LBB citations not yet implemented");

    let explicit = record_with_explicit();
    let rendered = processor.render(Style::Bluebook, &explicit, &Html).unwrap();
    assert_eq!(rendered.body, "Given citation.");
}

fn record_with_explicit() -> citations_core::Record {
    record(&[("explicit", &["Given citation."])])
}

#[test]
fn test_render_all_skips_failing_styles() {
    let mut config = Config::default();
    config.formats.bluebook.explicit_only = true;
    let processor = Processor::new(config).unwrap();

    let record = make_book("Smith, John", "The Thing", "2020");
    let labels: Vec<String> = processor
        .render_all(&record, &Html)
        .into_iter()
        .map(|c| c.label)
        .collect();
    assert_eq!(labels, ["MLA", "APA", "CMS"]);
}

#[test]
fn test_render_all_covers_every_prose_style() {
    let record = make_book("Smith, John", "The Thing", "2020");
    let all = processor().render_all(&record, &Html);
    assert_eq!(all.len(), 4);
    assert_eq!(all[1].label, "APA");
    assert_eq!(all[1].value, "Smith, J. (2020). <em>The thing</em>.");
}

#[test]
fn test_render_named_resolves_aliases() {
    let record = make_book("Smith, John", "The Thing", "2020");
    let by_alias = processor().render_named("CMS", &record, &Html).unwrap();
    assert_eq!(by_alias.body, render_html(Style::Chicago, &record));

    let err = processor().render_named("harvard", &record, &Html).unwrap_err();
    assert!(matches!(err, ProcessorError::UnknownStyle(ref name) if name == "harvard"));
    assert_eq!(err.status().http_code(), 400);
}
