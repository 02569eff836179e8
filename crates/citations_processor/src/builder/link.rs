/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use citations_core::{BuildOptions, Field, Link, RawFields};

const DOI_RESOLVER: &str = "https://doi.org/";

fn strip_doi_prefix(doi: &str) -> &str {
    let doi = doi.trim();
    match doi.get(..4) {
        Some(prefix) if prefix.eq_ignore_ascii_case("doi:") => doi[4..].trim_start(),
        _ => doi,
    }
}

fn strip_scheme(url: &str) -> &str {
    url.split_once("://").map_or(url, |(_, rest)| rest)
}

/// Online-only items with no ISBN/ISSN-like identifiers.
fn is_born_digital(raw: &RawFields) -> bool {
    raw.is_flagged(Field::IsOnlineOnly) && raw.field(Field::SerialNumber).is_empty()
}

/// Pick the link target. A DOI always wins; other links are only shown for
/// born-digital items.
pub fn setup_link(raw: &RawFields, record_url: Option<&str>, opts: BuildOptions) -> Option<Link> {
    let doi = strip_doi_prefix(raw.first_of(Field::Doi));
    let href = if !doi.is_empty() {
        format!("{DOI_RESOLVER}{doi}")
    } else {
        if !is_born_digital(raw) {
            return None;
        }
        let url = raw.first_of(Field::Url).trim();
        if url.contains("doi.org/") {
            url.to_string()
        } else if raw.is_flagged(Field::IsVirgoUrl) {
            let url = if url.is_empty() {
                record_url.unwrap_or("").trim()
            } else {
                url
            };
            if url.is_empty() {
                return None;
            }
            url.to_string()
        } else {
            return None;
        }
    };

    let text = if opts.strip_protocol {
        strip_scheme(&href).to_string()
    } else {
        href.clone()
    };
    Some(Link { href, text })
}
