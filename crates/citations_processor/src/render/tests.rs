/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::*;
use crate::abbreviations::LegalTables;
use citations_core::Creators;

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn date(year: u32, month: u32, day: u32) -> CitationDate {
    CitationDate {
        text: format!("{year}-{month}-{day}"),
        year,
        month,
        day,
    }
}

fn authored(authors: &[&str], title: &str) -> Citation {
    Citation {
        creators: Creators {
            authors: strings(authors),
            ..Creators::default()
        },
        title: title.to_string(),
        ..Citation::default()
    }
}

fn numbered_authors(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("Author{i}, Ann")).collect()
}

// --- shared helpers ---

#[test]
fn test_month_names() {
    assert_eq!(month_name(3), "March");
    assert_eq!(month_name(0), "");
    assert_eq!(month_name(13), "");
    assert_eq!(short_month_name(5), "May");
    assert_eq!(short_month_name(3), "Mar.");
}

#[test]
fn test_day_month_year() {
    assert_eq!(day_month_year(&date(2014, 3, 15), true), "15 Mar. 2014");
    assert_eq!(day_month_year(&date(2014, 3, 0), true), "Mar. 2014");
    assert_eq!(day_month_year(&date(2014, 3, 15), false), "2014");
    assert_eq!(day_month_year(&CitationDate::default(), true), "");
}

#[test]
fn test_truncated_list_boundaries() {
    let seven = strings(&["A", "B", "C", "D", "E", "F", "G"]);
    assert_eq!(truncated_list(&seven, " & "), "A, B, C, D, E, F & G");

    let eight = strings(&["A", "B", "C", "D", "E", "F", "G", "H"]);
    assert_eq!(truncated_list(&eight, " & "), "A, B, C, D, E, F, ... H");

    assert_eq!(truncated_list(&strings(&["A"]), " & "), "A");
    assert_eq!(truncated_list(&[], " & "), "");
}

#[test]
fn test_place_first_publisher() {
    let mut c = Citation {
        publisher: "Penguin: London".to_string(),
        publisher_name: "Penguin".to_string(),
        publisher_place: "London".to_string(),
        ..Citation::default()
    };
    assert_eq!(place_first_publisher(&c), "London: Penguin");

    c.publisher = "Penguin".to_string();
    assert_eq!(place_first_publisher(&c), "Penguin");
}

#[test]
fn test_output_formats() {
    assert_eq!(Html.emph("x"), "<em>x</em>");
    assert_eq!(Html.emph(""), "");
    assert_eq!(
        Html.link("https://a.example", "a.example"),
        r#"<a href="https://a.example">a.example</a>"#
    );
    assert_eq!(PlainText.emph("x"), "_x_");
    assert_eq!(PlainText.small_caps("x"), "x");
    assert_eq!(PlainText.link("https://a.example", "a.example"), "https://a.example");
    assert_eq!(Html.ampersand(), "&amp;");
    assert_eq!(PlainText.ampersand(), "&");
}

#[test]
fn test_explicit_text_wins_in_every_style() {
    let c = Citation {
        explicit: strings(&["Line one", "Line two"]),
        title: "Ignored".to_string(),
        ..Citation::default()
    };
    let tables = LegalTables::new().unwrap();
    let expected = "Line one\nLine two";
    assert_eq!(Apa.render(&c, &Html), expected);
    assert_eq!(Mla.render(&c, &Html), expected);
    assert_eq!(Chicago.render(&c, &Html), expected);
    assert_eq!(Bluebook::new(&tables).render(&c, &Html), expected);
}

// --- author-date ---

#[test]
fn test_apa_book() {
    let mut c = authored(&["Smith, John"], "The Thing");
    c.date = date(2020, 0, 0);
    assert_eq!(Apa.render(&c, &Html), "Smith, J. (2020). <em>The thing</em>.");
}

#[test]
fn test_apa_article() {
    let mut c = authored(&["Doe, Jane", "Roe, Richard"], "Testing things");
    c.is_article = true;
    c.journal = "journal of tests".to_string();
    c.volume = "12".to_string();
    c.issue = "3".to_string();
    c.pages = "45 - 67".to_string();
    c.date = date(2014, 3, 15);
    assert_eq!(
        Apa.render(&c, &Html),
        "Doe, J., &amp; Roe, R. (2014, March 15). Testing things. \
         <em>Journal of Tests</em>, 12(3), 45 - 67."
    );
}

#[test]
fn test_apa_edited_book_with_place() {
    let c = Citation {
        creators: Creators {
            editors: strings(&["Smith, John"]),
            ..Creators::default()
        },
        title: "Collected Essays".to_string(),
        edition: "2nd ed.".to_string(),
        publisher: "Penguin: London".to_string(),
        publisher_name: "Penguin".to_string(),
        publisher_place: "London".to_string(),
        date: date(1999, 0, 0),
        ..Citation::default()
    };
    assert_eq!(
        Apa.render(&c, &Html),
        "Smith, J. (Ed.). (1999). <em>Collected essays</em> (2nd ed.). London: Penguin."
    );
}

#[test]
fn test_apa_link() {
    let c = Citation {
        title: "Data".to_string(),
        date: date(2020, 0, 0),
        link: Some(Link {
            href: "https://doi.org/10.1/x".to_string(),
            text: "https://doi.org/10.1/x".to_string(),
        }),
        ..Citation::default()
    };
    assert_eq!(
        Apa.render(&c, &Html),
        r#"(2020). <em>Data</em>. Retrieved from <a href="https://doi.org/10.1/x">https://doi.org/10.1/x</a>"#
    );
}

#[test]
fn test_apa_seven_authors_not_truncated() {
    let mut c = authored(&[], "Big Study");
    c.creators.authors = numbered_authors(7);
    let out = Apa.render(&c, &PlainText);
    assert!(!out.contains("..."));
    assert!(out.starts_with("Author1, A., Author2, A., "));
    assert!(out.contains("Author6, A., & Author7, A."));
}

#[test]
fn test_apa_eight_authors_truncated() {
    let mut c = authored(&[], "Big Study");
    c.creators.authors = numbered_authors(8);
    let out = Apa.render(&c, &PlainText);
    assert!(out.contains("Author6, A., ... Author8, A."));
    assert!(!out.contains("Author7"));
}

#[test]
fn test_apa_publisher_creator_dropped() {
    let mut c = authored(&["Acme Press"], "Catalogue");
    c.publisher = "Acme Press".to_string();
    c.publisher_name = "Acme Press".to_string();
    assert_eq!(Apa.render(&c, &PlainText), "_Catalogue_. Acme Press.");
}

#[test]
fn test_apa_accession_number_before_publisher() {
    let mut c = authored(&["Smith, John"], "The Thing");
    c.accession_number = "MS 1043".to_string();
    c.publisher = "Penguin".to_string();
    c.publisher_name = "Penguin".to_string();
    assert_eq!(
        Apa.render(&c, &Html),
        "Smith, J. <em>The thing</em>. MS 1043, Penguin."
    );
}

// --- language and literature ---

#[test]
fn test_mla_book() {
    let mut c = authored(&["Smith, John", "Doe, Jane"], "the thing");
    c.publisher = "Penguin".to_string();
    c.date = date(2020, 0, 0);
    assert_eq!(
        Mla.render(&c, &Html),
        "Smith, John, and Jane Doe. <em>The Thing</em>. Penguin, 2020."
    );
}

#[test]
fn test_mla_article() {
    let mut c = authored(&["Doe, Jane"], "on being human");
    c.is_article = true;
    c.journal = "modern philology".to_string();
    c.volume = "vol. 12".to_string();
    c.issue = "no. 3".to_string();
    c.pages = "pp. 45 - 67".to_string();
    c.date = date(2014, 3, 0);
    assert_eq!(
        Mla.render(&c, &Html),
        "Doe, Jane. \"On Being Human.\" <em>Modern Philology</em>, vol. 12, no. 3, \
         Mar. 2014, pp. 45 - 67."
    );
}

#[test]
fn test_mla_editor_as_creator() {
    let c = Citation {
        creators: Creators {
            editors: strings(&["Smith, John"]),
            ..Creators::default()
        },
        title: "Essays".to_string(),
        ..Citation::default()
    };
    assert_eq!(Mla.render(&c, &Html), "Smith, John, editor. <em>Essays</em>.");
}

#[test]
fn test_mla_accession_number_after_container_editors() {
    let mut c = authored(&["Smith, John"], "The Thing");
    c.creators.editors = strings(&["Doe, Jane"]);
    c.accession_number = "MS 1043".to_string();
    c.publisher = "Penguin".to_string();
    assert_eq!(
        Mla.render(&c, &Html),
        "Smith, John. <em>The Thing</em>. Doe, Jane, MS 1043, Penguin."
    );
}

// --- footnote and bibliography ---

#[test]
fn test_chicago_two_creators() {
    let mut c = authored(&["Smith, John", "Doe, Jane"], "The Thing");
    c.publisher = "Penguin: London".to_string();
    c.publisher_name = "Penguin".to_string();
    c.publisher_place = "London".to_string();
    c.date = date(2020, 0, 0);
    assert_eq!(
        Chicago.render(&c, &Html),
        "Smith, John, and Jane Doe. <em>The Thing</em>. London: Penguin, 2020."
    );
}

#[test]
fn test_chicago_three_creators() {
    let c = authored(&["Smith, John", "Doe, Jane", "Roe, Rick"], "The Thing");
    let out = Chicago.render(&c, &Html);
    assert!(out.starts_with("Smith, John, et al. <em>The Thing</em>"));
    assert!(!out.contains("Doe"));
}

#[test]
fn test_chicago_roles() {
    let c = Citation {
        creators: Creators {
            editors: strings(&["Doe, Jane"]),
            translators: strings(&["Roe, Rick"]),
            ..Creators::default()
        },
        title: "Letters".to_string(),
        ..Citation::default()
    };
    assert_eq!(
        Chicago.render(&c, &Html),
        "Doe, Jane, ed. <em>Letters</em>. Translated by Rick Roe."
    );
}

#[test]
fn test_chicago_pages_after_digit() {
    let mut c = authored(&["Doe, Jane"], "Paper");
    c.is_article = true;
    c.journal = "Law Review".to_string();
    c.volume = "vol. 12".to_string();
    c.issue = "no. 3".to_string();
    c.pages = "pp. 45 - 67".to_string();
    c.date = date(2014, 0, 0);
    assert_eq!(
        Chicago.render(&c, &Html),
        "Doe, Jane. \"Paper.\" <em>Law Review</em>, vol. 12, no. 3, 2014, pp. 45 - 67."
    );
}

#[test]
fn test_chicago_accession_number_before_publisher() {
    let mut c = authored(&["Smith, John"], "The Thing");
    c.accession_number = "MS 1043".to_string();
    c.publisher = "Penguin".to_string();
    c.publisher_name = "Penguin".to_string();
    assert_eq!(
        Chicago.render(&c, &Html),
        "Smith, John. <em>The Thing</em>. MS 1043. Penguin."
    );
}

// --- legal ---

#[test]
fn test_bluebook_book() {
    let tables = LegalTables::new().unwrap();
    let mut c = authored(&["Smith, John"], "The Law of Torts");
    c.format = "book".to_string();
    c.creators.translators = strings(&["Roe, Rick"]);
    c.edition = "2d ed.".to_string();
    c.date = date(1999, 0, 0);
    assert_eq!(
        Bluebook::new(&tables).render(&c, &PlainText),
        "John Smith, The Law of Torts (Rick Roe trans., 2d ed. 1999)."
    );
}

#[test]
fn test_bluebook_book_small_caps() {
    let tables = LegalTables::new().unwrap();
    let c = authored(&["Smith, John"], "Torts");
    assert_eq!(
        Bluebook::new(&tables).render(&c, &Html),
        r#"<span style="font-variant:small-caps">John Smith</span>, <span style="font-variant:small-caps">Torts</span>."#
    );
}

#[test]
fn test_bluebook_law_review() {
    let tables = LegalTables::new().unwrap();
    let mut c = authored(&["Doe, Jane", "Roe, Rick"], "a theory of torts");
    c.is_article = true;
    c.format = "article".to_string();
    c.publication_type = "academic journal".to_string();
    c.journal = "Harvard Law Review".to_string();
    c.volume = "12".to_string();
    c.page_from = "45".to_string();
    c.date = date(2014, 3, 15);
    assert_eq!(
        Bluebook::new(&tables).render(&c, &PlainText),
        "Jane Doe & Rick Roe, _A Theory of Torts_, 12 Harv. L. Rev. 45 (2014)."
    );
}

#[test]
fn test_bluebook_newspaper() {
    let tables = LegalTables::new().unwrap();
    let mut c = authored(&[], "headline");
    c.is_article = true;
    c.format = "article".to_string();
    c.publication_type = "news".to_string();
    c.journal = "Daily Planet".to_string();
    c.page_from = "4".to_string();
    c.date = date(2014, 3, 15);
    assert_eq!(
        Bluebook::new(&tables).render(&c, &PlainText),
        "_Headline_, Daily Planet, Mar. 15, 2014, at 4."
    );
}

#[test]
fn test_bluebook_thesis() {
    let tables = LegalTables::new().unwrap();
    let mut c = authored(&["Smith, John"], "My Thesis");
    c.data_source = "libraetd".to_string();
    c.publisher = "University of Virginia".to_string();
    c.date = date(2020, 5, 1);
    assert_eq!(
        Bluebook::new(&tables).render(&c, &Html),
        "John Smith, My Thesis (May 1, 2020) (University of Virginia)."
    );
}

#[test]
fn test_bluebook_media_omits_authors_for_video() {
    let tables = LegalTables::new().unwrap();
    let mut c = authored(&["Jones, Dee"], "Film");
    c.format = "video".to_string();
    c.publisher = "Studio".to_string();
    c.date = date(2001, 0, 0);
    assert_eq!(Bluebook::new(&tables).render(&c, &PlainText), "Film (Studio 2001).");

    c.format = "sound".to_string();
    assert_eq!(
        Bluebook::new(&tables).render(&c, &PlainText),
        "Dee Jones, Film (Studio 2001)."
    );
}

#[test]
fn test_bluebook_missing_title_leaves_no_dangling_comma() {
    let tables = LegalTables::new().unwrap();
    let bluebook = Bluebook::new(&tables);

    let mut c = authored(&["Smith, John"], "");
    c.date = date(1999, 0, 0);
    assert_eq!(bluebook.render(&c, &PlainText), "John Smith (1999).");

    c.format = "sound".to_string();
    assert_eq!(bluebook.render(&c, &PlainText), "John Smith (1999).");

    c.format = "thesis".to_string();
    assert_eq!(bluebook.render(&c, &PlainText), "John Smith (1999).");
}

#[test]
fn test_bluebook_empty_record_renders_nothing() {
    let tables = LegalTables::new().unwrap();
    let bluebook = Bluebook::new(&tables);
    for format in ["", "book", "video", "thesis", "article"] {
        let c = Citation {
            format: format.to_string(),
            ..Citation::default()
        };
        assert_eq!(bluebook.render(&c, &Html), "", "format {format:?}");
    }
}
