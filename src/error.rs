// src/error.rs

use std::fmt;

use thiserror::Error;

/// What was wrong with a rejected timesheet line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordDefect {
    FieldCount { found: usize },
    InvalidInteger { field: &'static str, value: String },
    InvalidDate { field: &'static str, value: String },
}

impl fmt::Display for RecordDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordDefect::FieldCount { found } => {
                write!(f, "expected 4 fields, found {found}")
            }
            RecordDefect::InvalidInteger { field, value } => {
                write!(f, "{field} '{value}' is not a non-negative integer")
            }
            RecordDefect::InvalidDate { field, value } => {
                write!(f, "{field} '{value}' is not a recognised date")
            }
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("only CSV files are supported, got '{file_name}'")]
    UnsupportedFileType { file_name: String },

    #[error("line {line}: {reason}")]
    MalformedRecord { line: usize, reason: RecordDefect },
}
