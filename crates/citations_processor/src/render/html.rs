/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! HTML output format.

use super::format::OutputFormat;

#[derive(Debug, Default, Clone)]
pub struct Html;

impl OutputFormat for Html {
    fn emph(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        format!("<em>{}</em>", content)
    }

    fn small_caps(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        format!(
            r#"<span style="font-variant:small-caps">{}</span>"#,
            content
        )
    }

    fn link(&self, url: &str, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        format!(r#"<a href="{}">{}</a>"#, url, content)
    }

    fn ampersand(&self) -> &'static str {
        "&amp;"
    }
}
