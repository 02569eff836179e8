/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Failures reported to callers of the processor.
///
/// Malformed field values never produce an error; they degrade to empty
/// output instead.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("non-explicit {0} citations not yet implemented")]
    NotImplemented(String),

    #[error("no explicit citation available")]
    NoExplicitCitation,

    #[error("unknown citation style: {0}")]
    UnknownStyle(String),

    #[error("failed to parse {0}: {1}")]
    ParseError(String, String),

    #[error("invalid abbreviation pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an error for the serving layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    BadRequest,
    Internal,
}

impl Status {
    pub fn http_code(&self) -> u16 {
        match self {
            Status::BadRequest => 400,
            Status::Internal => 500,
        }
    }
}

impl ProcessorError {
    pub fn status(&self) -> Status {
        match self {
            ProcessorError::UnknownStyle(_) | ProcessorError::ParseError(..) => Status::BadRequest,
            _ => Status::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProcessorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ProcessorError::UnknownStyle("x".into()).status().http_code(),
            400
        );
        assert_eq!(ProcessorError::NoExplicitCitation.status(), Status::Internal);
        assert_eq!(
            ProcessorError::NotImplemented("APA".into()).to_string(),
            "non-explicit APA citations not yet implemented"
        );
    }
}
