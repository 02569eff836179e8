/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use crate::text::clean_field;
use citations_core::{BuildOptions, Field, RawFields};

/// Returns the publisher to display plus the cleaned name and place.
///
/// With `publisher_place` enabled and both parts present, the result is
/// "name: place" unless one already contains the other. Otherwise the more
/// specific of the two is used.
pub fn setup_publisher(raw: &RawFields, opts: BuildOptions) -> (String, String, String) {
    let name = clean_field(raw.first_of(Field::Publisher));
    let place = clean_field(raw.first_of(Field::PublishedLocation));

    let distinct = !name.is_empty()
        && !place.is_empty()
        && !name.contains(place.as_str())
        && !place.contains(name.as_str());

    let publisher = if opts.publisher_place && distinct {
        format!("{name}: {place}")
    } else if place.contains(name.as_str()) {
        place.clone()
    } else {
        name.clone()
    };
    (publisher, name, place)
}
