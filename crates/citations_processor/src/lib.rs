/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Citation Processor
//!
//! Turns library catalog records into formatted citations. A record's raw
//! fields are normalized into a [`citations_core::Citation`] once, then
//! rendered by one of the prose styles (author-date, language and
//! literature, footnote, legal) or exported as RIS interchange tags.
//!
//! # Example
//!
//! ```rust
//! use citations_core::{raw_fields, Config, Record, Style};
//! use citations_processor::{Html, Processor};
//!
//! let processor = Processor::new(Config::default()).unwrap();
//! let record = Record::new(raw_fields! {
//!     "title" => ["The Thing"],
//!     "author" => ["Smith, John"],
//!     "published_date" => ["2020"],
//!     "format" => ["book"],
//! });
//!
//! let rendered = processor.render(Style::Apa, &record, &Html).unwrap();
//! assert_eq!(rendered.body, "Smith, J. (2020). <em>The thing</em>.");
//! assert_eq!(rendered.content_type, "text/html");
//! ```

pub mod abbreviations;
pub mod builder;
pub mod error;
pub mod io;
pub mod processor;
pub mod render;
pub mod ris;
pub mod text;

pub use error::{ProcessorError, Result, Status};
pub use processor::{LabeledCitation, Processor, Rendered};
pub use render::{Html, OutputFormat, PlainText};
