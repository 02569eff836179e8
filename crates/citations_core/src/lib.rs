/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Data model for rendering library catalog records as citations.
//!
//! The raw input is a [`Record`]: a mapping of field names to values plus the
//! catalog URL. The processor turns it into a [`Citation`] and renders that
//! in one of the supported [`Style`]s.

pub mod macros;

pub mod citation;
pub mod config;
pub mod fields;
pub mod options;

pub use citation::{Citation, CitationDate, Creators, Link};
pub use config::{Config, FormatConfig, FormatsConfig, RisConfig};
pub use fields::{Field, RawFields, Record};
pub use options::{BuildOptions, Style};
