/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::*;
use citations_core::raw_fields;

fn ris() -> Ris {
    Ris::new().unwrap()
}

fn render(record: &Record) -> String {
    ris().render(record, &RisConfig::default())
}

#[test]
fn test_clean_string_normalizes_characters() {
    let r = ris();
    assert_eq!(r.clean_string("1990\u{2013}2000"), "1990-2000");
    assert_eq!(r.clean_string("A \u{2192} B"), "A -> B");
    assert_eq!(r.clean_string("\u{A9} 2001 \u{AB}x\u{BB}"), "(c) 2001 \"x\"");
    assert_eq!(r.clean_string("  <em>Title</em> &amp; more "), "Title & more");
}

#[test]
fn test_clean_string_decodes_every_named_reference() {
    let r = ris();
    assert_eq!(r.clean_string("Caf&eacute; Society &hellip;"), "Caf\u{e9} Society \u{2026}");
    assert_eq!(
        r.clean_string("Nov&aacute;k &amp; Dvo&rcaron;&aacute;k"),
        "Nov\u{e1}k & Dvo\u{159}\u{e1}k"
    );
}

#[test]
fn test_tag_value_splits_escaped_newlines() {
    let r = ris();
    assert_eq!(r.tag_value("first\\n\\n second "), "first\r\nsecond");
}

#[test]
fn test_generic_type_when_format_unmapped() {
    let out = render(&Record::new(raw_fields! { "title" => ["Thing"], "format" => ["widget"] }));
    assert!(out.starts_with("TY  - GEN\r\n"));
    assert!(out.ends_with("ER  - \r\n"));
}

#[test]
fn test_asterisks_replaced_outside_repeatable_tags() {
    let out = render(&Record::new(raw_fields! {
        "title" => ["Stars *and* more"],
        "keyword" => ["wild*card"],
    }));
    assert!(out.contains("TI  - Stars #and# more\r\n"));
    assert!(out.contains("KW  - wild*card\r\n"));
}

#[test]
fn test_merging_rules() {
    let out = render(&Record::new(raw_fields! {
        "publisher" => ["One", "Two"],
        "library" => ["Main", "Branch"],
        "url" => ["https://a.example/x", "https://b.example/y"],
        "keyword" => ["k1", "k2"],
    }));
    assert!(out.contains("PB  - One, Two\r\n"));
    assert!(out.contains("DP  - Main\r\n"));
    assert!(!out.contains("Branch"));
    assert!(out.contains("UR  - https://a.example/x ; https://b.example/y\r\n"));
    assert!(out.contains("KW  - k1\r\nKW  - k2\r\n"));
}

#[test]
fn test_advisor_role_suffix() {
    let out = render(&Record::new(raw_fields! {
        "author" => ["Doe, Jane"],
        "advisor" => ["Roe, Rick"],
    }));
    assert!(out.contains("AU  - Doe, Jane\r\nAU  - Roe, Rick (advisor)\r\n"));
}

#[test]
fn test_author_values_truncated() {
    let long = "x".repeat(300);
    let out = render(&Record::new(raw_fields! { "author" => [long] }));
    let line = out.lines().find(|l| l.starts_with("AU")).unwrap();
    assert_eq!(line.chars().count(), "AU  - ".len() + 255);
}

#[test]
fn test_invalid_tags_are_skipped() {
    let mut config = RisConfig::default();
    config
        .field_tags
        .insert("title".to_string(), vec!["title".to_string(), "T1".to_string()]);
    let out = ris().render(&Record::new(raw_fields! { "title" => ["Thing"] }), &config);
    assert!(out.contains("T1  - Thing\r\n"));
    assert!(!out.contains("TITLE"));
}

#[test]
fn test_record_url_note_and_file_name() {
    let record = Record::new(raw_fields! { "title" => ["Thing"] })
        .with_url("https://search.example.edu/sources/uva_library/items/u4321");
    let out = render(&record);
    assert!(out.contains("N1  - https://search.example.edu/sources/uva_library/items/u4321\r\n"));
    assert_eq!(ris().file_name(&record, Some("ris")).as_deref(), Some("u4321.ris"));
    assert_eq!(ris().file_name(&Record::default(), Some("ris")), None);
}
