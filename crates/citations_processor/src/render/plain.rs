/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Plain text output format.

use super::format::OutputFormat;

#[derive(Debug, Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    fn emph(&self, content: &str) -> String {
        if content.is_empty() {
            return String::new();
        }
        format!("_{}_", content)
    }

    fn small_caps(&self, content: &str) -> String {
        content.to_string()
    }

    fn link(&self, url: &str, _content: &str) -> String {
        // Plain text shows the full target
        url.to_string()
    }

    fn ampersand(&self) -> &'static str {
        "&"
    }
}
