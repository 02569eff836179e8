/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Output format trait for pluggable markup.

/// How the prose styles mark up emphasis, small caps, links and ampersands.
///
/// Citation assembly is markup-agnostic; it calls into an implementation of
/// this trait wherever the output needs formatting.
pub trait OutputFormat: Default + Clone {
    /// Render content with emphasis (typically italics).
    fn emph(&self, content: &str) -> String;

    /// Render content in small capitals.
    fn small_caps(&self, content: &str) -> String;

    /// Hyperlink `content` to `url`.
    fn link(&self, url: &str, content: &str) -> String;

    /// The ampersand as it must appear in output.
    fn ampersand(&self) -> &'static str;
}
