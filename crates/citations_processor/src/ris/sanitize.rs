/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Untrusted text cleanup for interchange output.
//!
//! Values are parsed as an HTML fragment and only their visible text is kept,
//! so every character reference the HTML standard knows is decoded.

use scraper::Html;

/// Elements whose content is never shown to readers.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "template"];

/// Turns untrusted, possibly marked-up text into plain text.
pub trait Sanitizer {
    fn sanitize(&self, text: &str) -> String;
}

/// Strips every element and decodes character references.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictSanitizer;

impl Sanitizer for StrictSanitizer {
    fn sanitize(&self, text: &str) -> String {
        let fragment = Html::parse_fragment(text);
        fragment
            .root_element()
            .descendants()
            .filter_map(|node| {
                let text = node.value().as_text()?;
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
                });
                (!hidden).then_some(&**text)
            })
            .collect()
    }
}
