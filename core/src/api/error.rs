//! Public error types.
//!
//! Internal errors are converted to these types at the session boundary.

use thiserror::Error;

use crate::parser::{ParseError, Span};
use crate::region::RegionError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The expression could not be parsed.
    ///
    /// Contains one or more diagnostics and the source they point into.
    #[error("Compilation failed with {} error(s)", .diagnostics.len())]
    Compilation {
        diagnostics: Vec<Diagnostic>,
        src: String,
    },

    /// The session's region could not be created.
    #[error("Region error: {0}")]
    Region(#[from] RegionError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::Compilation {
            diagnostics: vec![err.to_diagnostic()],
            src: err.source,
        }
    }
}

/// A diagnostic message (error, warning, or info) with source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// Severity level (error, warning, info).
    pub severity: Severity,

    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Related locations that provide additional context.
    pub related: Vec<RelatedInfo>,

    /// Help text suggesting how to fix the issue.
    pub help: Vec<String>,

    /// Optional error code (e.g., "P001").
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// Related information for a diagnostic (e.g., "opened here").
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedInfo {
    pub span: Span,
    pub message: String,
}
