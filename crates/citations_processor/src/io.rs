/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use std::fs;
use std::path::Path;

use citations_core::{Config, RawFields, Record};

use crate::ProcessorError;

/// Load a record from a file given its path.
///
/// Supports JSON and YAML. The document may be a full record
/// (`{url, fields}`) or a bare field map.
pub fn load_record(path: &Path) -> Result<Record, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))?;

            if let Ok(record) = serde_json::from_slice::<Record>(&bytes) {
                return Ok(record);
            }
            serde_json::from_slice::<RawFields>(&bytes)
                .map(Record::new)
                .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string()))
        }
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))?;

            if let Ok(record) = serde_yaml::from_str::<Record>(&content) {
                return Ok(record);
            }
            serde_yaml::from_str::<RawFields>(&content)
                .map(Record::new)
                .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string()))
        }
    }
}

/// Load configuration from a YAML, JSON or TOML file.
pub fn load_config(path: &Path) -> Result<Config, ProcessorError> {
    let content = fs::read_to_string(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => serde_json::from_str(&content)
            .map_err(|e| ProcessorError::ParseError("JSON".to_string(), e.to_string())),
        "toml" => toml::from_str(&content)
            .map_err(|e| ProcessorError::ParseError("TOML".to_string(), e.to_string())),
        _ => serde_yaml::from_str(&content)
            .map_err(|e| ProcessorError::ParseError("YAML".to_string(), e.to_string())),
    }
}
