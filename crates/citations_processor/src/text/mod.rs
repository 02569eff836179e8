/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Text helpers shared by the builder and every renderer.

pub mod clean;
pub mod names;
pub mod punctuation;
pub mod titles;

pub use clean::{capitalize, clean_end_punctuation, clean_field, strip_brackets};
pub use names::{abbreviate, parse_name, reading_order, NameParts};
pub use punctuation::{Joiner, Sep};
pub use titles::{quotable_title, sentence_case, strip_trailing_periods, title_case};
