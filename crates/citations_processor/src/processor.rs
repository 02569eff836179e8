/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! The processor facade: one record in, one rendered citation out.

use serde::Serialize;

use citations_core::{Citation, Config, Field, Record, Style};

use crate::abbreviations::LegalTables;
use crate::builder::CitationBuilder;
use crate::error::{ProcessorError, Result};
use crate::render::{Apa, Bluebook, Chicago, CitationStyle, Mla, OutputFormat};
use crate::ris::Ris;

/// A rendered citation with its presentation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub label: String,
    pub content_type: String,
    /// Suggested download file name, for file-oriented formats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    pub body: String,
}

/// One entry of the multi-style result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabeledCitation {
    pub label: String,
    pub value: String,
}

/// Renders records in any supported style.
///
/// Everything that needs compiling (patterns, abbreviation tables) is built
/// once in [`Processor::new`]; rendering itself never mutates the processor.
#[derive(Debug, Clone)]
pub struct Processor {
    config: Config,
    builder: CitationBuilder,
    tables: LegalTables,
    ris: Ris,
}

impl Processor {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            config,
            builder: CitationBuilder::new()?,
            tables: LegalTables::new()?,
            ris: Ris::new()?,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build the intermediate citation for `style`.
    pub fn build(&self, style: Style, record: &Record) -> Citation {
        let format = record.fields.first_of(Field::Format).trim().to_lowercase();
        self.builder.build(record, style.build_options(&format))
    }

    /// Render `record` in the style named `name` (aliases accepted).
    pub fn render_named<F: OutputFormat>(
        &self,
        name: &str,
        record: &Record,
        fmt: &F,
    ) -> Result<Rendered> {
        let style = Style::parse(name).ok_or_else(|| ProcessorError::UnknownStyle(name.to_string()))?;
        self.render(style, record, fmt)
    }

    pub fn render<F: OutputFormat>(&self, style: Style, record: &Record, fmt: &F) -> Result<Rendered> {
        let format = self.config.formats.get(style);
        tracing::debug!(style = %style, "rendering citation");

        let mut filename = None;
        let body = if style == Style::Ris {
            filename = self.ris.file_name(record, format.extension.as_deref());
            self.ris.render(record, &self.config.ris)
        } else {
            self.render_prose(style, record, fmt)?
        };

        Ok(Rendered {
            label: format.label.clone(),
            content_type: format.content_type.clone(),
            filename,
            body,
        })
    }

    fn render_prose<F: OutputFormat>(&self, style: Style, record: &Record, fmt: &F) -> Result<String> {
        let citation = self.build(style, record);
        if let Some(text) = citation.explicit_text() {
            return Ok(text);
        }

        let format = self.config.formats.get(style);
        if format.explicit_only && style != Style::CiteAs {
            return Err(ProcessorError::NotImplemented(format.label.clone()));
        }

        let body = match style {
            Style::Apa => Apa.assemble(&citation, fmt),
            Style::Mla => Mla.assemble(&citation, fmt),
            Style::Chicago => Chicago.assemble(&citation, fmt),
            Style::Bluebook => Bluebook::new(&self.tables).assemble(&citation, fmt),
            Style::CiteAs | Style::Ris => return Err(ProcessorError::NoExplicitCitation),
        };
        Ok(body)
    }

    /// Render every prose style, skipping any that fails.
    pub fn render_all<F: OutputFormat>(&self, record: &Record, fmt: &F) -> Vec<LabeledCitation> {
        Style::PROSE
            .iter()
            .filter_map(|style| match self.render(*style, record, fmt) {
                Ok(rendered) => Some(LabeledCitation {
                    label: rendered.label,
                    value: rendered.body,
                }),
                Err(err) => {
                    tracing::warn!(style = %style, error = %err, "skipping style");
                    None
                }
            })
            .collect()
    }
}
