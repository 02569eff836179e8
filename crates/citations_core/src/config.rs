/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Service configuration.
//!
//! Every field has a default, so an empty document (or no document at all)
//! yields a working configuration.

use crate::options::Style;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const HTML: &str = "text/html";
const RIS: &str = "application/x-research-info-systems";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub formats: FormatsConfig,

    #[serde(default)]
    pub ris: RisConfig,
}

/// Presentation settings for one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    pub label: String,

    #[serde(default = "default_content_type")]
    pub content_type: String,

    /// Suggested file extension for downloadable output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Only render explicit citations; anything else is reported as not
    /// implemented.
    #[serde(default)]
    pub explicit_only: bool,
}

impl FormatConfig {
    fn html(label: &str) -> Self {
        Self {
            label: label.to_string(),
            content_type: default_content_type(),
            extension: None,
            explicit_only: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatsConfig {
    #[serde(default = "default_apa")]
    pub apa: FormatConfig,

    #[serde(default = "default_mla")]
    pub mla: FormatConfig,

    #[serde(default = "default_chicago")]
    pub chicago: FormatConfig,

    #[serde(default = "default_bluebook")]
    pub bluebook: FormatConfig,

    #[serde(default = "default_cite_as")]
    pub cite_as: FormatConfig,

    #[serde(default = "default_ris_format")]
    pub ris: FormatConfig,
}

impl FormatsConfig {
    pub fn get(&self, style: Style) -> &FormatConfig {
        match style {
            Style::Apa => &self.apa,
            Style::Mla => &self.mla,
            Style::Chicago => &self.chicago,
            Style::Bluebook => &self.bluebook,
            Style::CiteAs => &self.cite_as,
            Style::Ris => &self.ris,
        }
    }
}

impl Default for FormatsConfig {
    fn default() -> Self {
        Self {
            apa: default_apa(),
            mla: default_mla(),
            chicago: default_chicago(),
            bluebook: default_bluebook(),
            cite_as: default_cite_as(),
            ris: default_ris_format(),
        }
    }
}

/// Interchange-tag settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RisConfig {
    /// Record field name to the tag codes it is emitted under.
    #[serde(default = "default_field_tags")]
    pub field_tags: IndexMap<String, Vec<String>>,

    /// Item format to `TY` type code.
    #[serde(default = "default_type_codes")]
    pub type_codes: IndexMap<String, String>,

    /// Maximum length, in characters, of author and keyword values.
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for RisConfig {
    fn default() -> Self {
        Self {
            field_tags: default_field_tags(),
            type_codes: default_type_codes(),
            max_length: default_max_length(),
        }
    }
}

fn default_content_type() -> String {
    HTML.to_string()
}

fn default_apa() -> FormatConfig {
    FormatConfig::html("APA")
}

fn default_mla() -> FormatConfig {
    FormatConfig::html("MLA")
}

fn default_chicago() -> FormatConfig {
    FormatConfig::html("CMS")
}

fn default_bluebook() -> FormatConfig {
    FormatConfig::html("LBB")
}

fn default_cite_as() -> FormatConfig {
    FormatConfig::html("CiteAs")
}

fn default_ris_format() -> FormatConfig {
    FormatConfig {
        label: "RIS".to_string(),
        content_type: RIS.to_string(),
        extension: Some("ris".to_string()),
        explicit_only: false,
    }
}

fn default_field_tags() -> IndexMap<String, Vec<String>> {
    [
        ("author", "AU"),
        ("advisor", "AU"),
        ("editor", "A2"),
        ("compiler", "A2"),
        ("translator", "A4"),
        ("title", "TI"),
        ("journal", "JO"),
        ("volume", "VL"),
        ("issue", "IS"),
        ("pages", "SP"),
        ("edition", "ET"),
        ("publisher", "PB"),
        ("published_location", "CY"),
        ("published_date", "PY"),
        ("url", "UR"),
        ("doi", "DO"),
        ("serial_number", "SN"),
        ("keyword", "KW"),
        ("language", "LA"),
        ("abstract", "AB"),
        ("note", "N1"),
        ("library", "DP"),
        ("call_number", "CN"),
        ("accession_number", "AN"),
    ]
    .into_iter()
    .map(|(field, tag)| (field.to_string(), vec![tag.to_string()]))
    .collect()
}

fn default_type_codes() -> IndexMap<String, String> {
    [
        ("article", "JOUR"),
        ("book", "BOOK"),
        ("government_document", "GOVDOC"),
        ("sound", "SOUND"),
        ("video", "VIDEO"),
        ("thesis", "THES"),
        ("map", "MAP"),
        ("manuscript", "MANSCPT"),
        ("musical_score", "MUSIC"),
        ("journal", "JFULL"),
        ("news", "NEWS"),
    ]
    .into_iter()
    .map(|(format, code)| (format.to_string(), code.to_string()))
    .collect()
}

fn default_max_length() -> usize {
    255
}
