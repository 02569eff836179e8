/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::text::{clean_end_punctuation, strip_trailing_periods};
use citations_core::{Field, RawFields};

/// Title and subtitle joined with ": ", trailing periods removed.
pub fn setup_title(raw: &RawFields) -> String {
    let title = raw
        .first_of(Field::Title)
        .trim()
        .trim_end_matches([':', ';', '/', ' ']);
    let subtitle = raw.first_of(Field::Subtitle).trim();

    let combined = match (title.is_empty(), subtitle.is_empty()) {
        (false, false) => format!("{title}: {subtitle}"),
        (false, true) => title.to_string(),
        (true, _) => subtitle.to_string(),
    };
    strip_trailing_periods(&combined).to_string()
}

pub fn setup_journal(raw: &RawFields) -> String {
    clean_end_punctuation(raw.first_of(Field::Journal))
}
