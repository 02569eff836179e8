/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Left-to-right citation assembly with punctuation joining.

/// The separator required before the next fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sep {
    /// Append directly.
    None,
    /// A space, unless the result already ends with one.
    Space,
    /// "," unless the result ends with a space, "." or ","; then a space.
    Comma,
    /// "." unless the result ends with a space, "." or ","; then a space.
    Period,
    /// ":" unless the result ends with a space, ".", "," or ":"; then a space.
    Colon,
}

/// Accumulates citation text, inserting separators only where needed.
///
/// No separator is ever added to an empty result, and empty fragments are
/// ignored entirely.
#[derive(Debug, Clone, Default)]
pub struct Joiner {
    result: String,
}

impl Joiner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.result.is_empty()
    }

    pub fn ends_with(&self, pattern: &str) -> bool {
        self.result.ends_with(pattern)
    }

    /// Whether the result ends with an ASCII digit.
    pub fn ends_with_digit(&self) -> bool {
        self.result.chars().last().is_some_and(|c| c.is_ascii_digit())
    }

    /// Insert `sep` according to its rule.
    pub fn separate(&mut self, sep: Sep) -> &mut Self {
        if self.result.is_empty() {
            return self;
        }
        match sep {
            Sep::None => {}
            Sep::Space => self.space(),
            Sep::Comma => self.mark(',', &[' ', '.', ',']),
            Sep::Period => self.mark('.', &[' ', '.', ',']),
            Sep::Colon => self.mark(':', &[' ', '.', ',', ':']),
        }
        self
    }

    fn mark(&mut self, mark: char, terminators: &[char]) {
        if !self.result.ends_with(terminators) {
            self.result.push(mark);
        }
        self.space();
    }

    fn space(&mut self) {
        if !self.result.is_empty() && !self.result.ends_with(' ') {
            self.result.push(' ');
        }
    }

    /// Append `fragment` after `sep`. Does nothing when `fragment` is empty.
    pub fn push(&mut self, sep: Sep, fragment: &str) -> &mut Self {
        if fragment.is_empty() {
            return self;
        }
        self.separate(sep);
        self.result.push_str(fragment);
        self
    }

    /// Append text verbatim, even to an empty result.
    pub fn push_str(&mut self, text: &str) -> &mut Self {
        self.result.push_str(text);
        self
    }

    /// Add a period unless the result is empty or already ends with one.
    pub fn terminate(&mut self) -> &mut Self {
        if !self.result.is_empty() && !self.result.ends_with('.') {
            self.result.push('.');
        }
        self
    }

    pub fn finish(self) -> String {
        self.result
    }
}
