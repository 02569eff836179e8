/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use super::CitationBuilder;
use citations_core::CitationDate;

impl CitationBuilder {
    /// Parse a publication date, trying in turn: a bare year, a
    /// year-month[-day] value, then a leading or trailing run of digits.
    ///
    /// Unusable input yields an empty date.
    pub fn setup_date(&self, value: &str) -> CitationDate {
        let text = value.trim();
        let (year, month, day) = self
            .strict_date(text)
            .or_else(|| self.loose_year(text).map(|y| (y, 0, 0)))
            .unwrap_or_default();

        if year == 0 {
            return CitationDate::default();
        }
        CitationDate {
            text: text.to_string(),
            year,
            month,
            day,
        }
    }

    fn strict_date(&self, text: &str) -> Option<(u32, u32, u32)> {
        if self.year_only.is_match(text) {
            return Some((text.parse().ok()?, 0, 0));
        }

        let caps = self.year_month_day.captures(text)?;
        let year: u32 = caps.get(1)?.as_str().parse().ok()?;
        let month: u32 = caps.get(2)?.as_str().parse().ok()?;
        let day: u32 = match caps.get(3) {
            Some(d) => d.as_str().parse().ok()?,
            None => 0,
        };
        if !(1..=12).contains(&month) || day > 31 {
            return None;
        }
        Some((year, month, day))
    }

    fn loose_year(&self, text: &str) -> Option<u32> {
        self.leading_year
            .captures(text)
            .or_else(|| self.trailing_year.captures(text))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }
}
