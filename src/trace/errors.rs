//! Error types for trace loading
//!
//! This module defines [`TraceError`], covering everything that can go wrong
//! while pulling records out of a trace: malformed lines, unparseable fields,
//! and I/O failures from the underlying reader.
//!
//! All loader errors are fatal: the feed stops at the first bad line and the
//! caller gets the 1-based line number for diagnostics.

use std::fmt;
use std::io;

/// Errors that can occur while loading a trace
#[derive(Debug)]
pub enum TraceError {
    /// Line does not have the `<kind> <addr>,<size>` shape
    MalformedRecord { line: usize, text: String },

    /// Kind symbol is not one of `I`, `L`, `S`, `M`
    UnknownKind { line: usize, symbol: char },

    /// Address field is not valid hex
    BadAddress { line: usize, text: String },

    /// Size field is not a valid decimal count
    BadSize { line: usize, text: String },

    /// Reading from the trace source failed
    Io(io::Error),
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::MalformedRecord { line, text } => {
                write!(f, "Malformed trace record at line {}: '{}'", line, text)
            }
            TraceError::UnknownKind { line, symbol } => {
                write!(f, "Unknown access kind '{}' at line {}", symbol, line)
            }
            TraceError::BadAddress { line, text } => {
                write!(f, "Invalid address '{}' at line {}", text, line)
            }
            TraceError::BadSize { line, text } => {
                write!(f, "Invalid access size '{}' at line {}", text, line)
            }
            TraceError::Io(err) => {
                write!(f, "Trace read failed: {}", err)
            }
        }
    }
}

impl std::error::Error for TraceError {}

impl From<io::Error> for TraceError {
    fn from(err: io::Error) -> Self {
        TraceError::Io(err)
    }
}
