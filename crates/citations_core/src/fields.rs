/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Raw bibliographic fields as supplied by a catalog record.
//!
//! A catalog record arrives as a mapping of field name to one or more string
//! values. The core never mutates it; every renderer reads from the same
//! [`RawFields`] value.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

crate::str_enum! {
    /// The field vocabulary understood by the citation builder.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Field {
        /// An authoritative, pre-formatted citation.
        Explicit = "explicit",
        Author = "author",
        Editor = "editor",
        Advisor = "advisor",
        Compiler = "compiler",
        Translator = "translator",
        Title = "title",
        Subtitle = "subtitle",
        /// Item format, e.g. `article`, `book`, `sound`.
        Format = "format",
        Journal = "journal",
        Volume = "volume",
        Issue = "issue",
        Pages = "pages",
        Edition = "edition",
        Publisher = "publisher",
        PublishedLocation = "published_location",
        /// Periodical kind, e.g. `academic journal`, `news`, `magazines`.
        PublicationType = "publication_type",
        DataSource = "data_source",
        PublishedDate = "published_date",
        Url = "url",
        Doi = "doi",
        /// ISBN/ISSN-like identifiers.
        SerialNumber = "serial_number",
        IsOnlineOnly = "is_online_only",
        IsVirgoUrl = "is_virgo_url",
        // Interchange-only fields.
        Keyword = "keyword",
        Language = "language",
        Abstract = "abstract",
        Note = "note",
        Library = "library",
        CallNumber = "call_number",
        AccessionNumber = "accession_number",
    }
}

/// A single value or a list of values, as found in hand-written input files.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl From<OneOrMany> for Vec<String> {
    fn from(value: OneOrMany) -> Self {
        match value {
            OneOrMany::One(s) => vec![s],
            OneOrMany::Many(v) => v,
        }
    }
}

/// Field name to ordered values. Keys keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "IndexMap<String, OneOrMany>",
    into = "IndexMap<String, Vec<String>>"
)]
pub struct RawFields {
    values: IndexMap<String, Vec<String>>,
}

impl From<IndexMap<String, OneOrMany>> for RawFields {
    fn from(map: IndexMap<String, OneOrMany>) -> Self {
        let mut fields = RawFields::default();
        for (key, value) in map {
            fields.insert(key, value.into());
        }
        fields
    }
}

impl From<RawFields> for IndexMap<String, Vec<String>> {
    fn from(fields: RawFields) -> Self {
        fields.values
    }
}

impl RawFields {
    /// Set the values of `key`. Empty lists are not stored.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) {
        let key = key.into();
        if values.is_empty() {
            self.values.shift_remove(&key);
        } else {
            self.values.insert(key, values);
        }
    }

    /// All values of `key`, or an empty slice.
    pub fn values(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first value of `key`, or an empty string.
    pub fn first(&self, key: &str) -> &str {
        self.values(key).first().map(String::as_str).unwrap_or("")
    }

    /// All values of a vocabulary field.
    pub fn field(&self, field: Field) -> &[String] {
        self.values(field.as_str())
    }

    /// The first value of a vocabulary field, or an empty string.
    pub fn first_of(&self, field: Field) -> &str {
        self.first(field.as_str())
    }

    /// Whether a boolean-ish flag field is set (`true`, `yes`, `y`, `1`).
    pub fn is_flagged(&self, field: Field) -> bool {
        matches!(
            self.first_of(field).trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        )
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

/// One catalog item: its raw fields plus the catalog URL it was fetched from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Catalog URL of the item, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub fields: RawFields,
}

impl Record {
    pub fn new(fields: RawFields) -> Self {
        Self { url: None, fields }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}
