use thiserror::Error;

use crate::api::{Diagnostic, RelatedInfo, Severity};
use crate::parser::Span;
use crate::region::RegionError;

/// Parser error with the source it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub source: String,
    pub span: Span,
}

/// Specific kinds of parse errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseErrorKind {
    /// A character outside the expression alphabet.
    #[error("Unknown character {found:?}")]
    UnknownToken { found: char },

    /// Integer literal that does not fit in 64 bits.
    #[error("Invalid number literal '{text}'")]
    InvalidNumber { text: String },

    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    /// Input ended while a group was still open.
    #[error("Unclosed delimiter '{delimiter}'")]
    UnclosedDelimiter { delimiter: char, opened_at: Span },

    #[error("Expression nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { depth: usize, max_depth: usize },

    #[error("Out of region memory: {0}")]
    OutOfRegion(#[from] RegionError),
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, source: String, span: Span) -> Self {
        Self { kind, source, span }
    }

    pub fn code(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::UnknownToken { .. } => "P001",
            ParseErrorKind::InvalidNumber { .. } => "P002",
            ParseErrorKind::UnexpectedToken { .. } => "P003",
            ParseErrorKind::UnclosedDelimiter { .. } => "P004",
            ParseErrorKind::MaxDepthExceeded { .. } => "P005",
            ParseErrorKind::OutOfRegion(_) => "P006",
        }
    }

    /// Convert to a Diagnostic for API boundary
    pub fn to_diagnostic(&self) -> Diagnostic {
        let help = match &self.kind {
            ParseErrorKind::UnknownToken { .. } => {
                vec!["Expressions may only contain digits, '.', '+', '-', '*', '/', '(' and ')'".to_string()]
            }
            ParseErrorKind::InvalidNumber { .. } => {
                vec!["Integer literals must fit in a signed 64-bit integer".to_string()]
            }
            ParseErrorKind::UnexpectedToken { .. } => vec![],
            ParseErrorKind::UnclosedDelimiter { .. } => {
                vec!["Add the missing closing delimiter".to_string()]
            }
            ParseErrorKind::MaxDepthExceeded { .. } => {
                vec!["Reduce nesting or simplify the expression".to_string()]
            }
            ParseErrorKind::OutOfRegion(_) => {
                vec!["Use a larger region capacity".to_string()]
            }
        };

        let related = match &self.kind {
            ParseErrorKind::UnclosedDelimiter { opened_at, .. } => vec![RelatedInfo {
                span: opened_at.clone(),
                message: "unclosed delimiter opened here".to_string(),
            }],
            _ => vec![],
        };

        Diagnostic {
            severity: Severity::Error,
            message: self.kind.to_string(),
            span: self.span.clone(),
            related,
            help,
            code: Some(self.code().to_string()),
        }
    }
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let diagnostic = self.to_diagnostic();
        write!(f, "{}: {}", diagnostic.severity, diagnostic.message)?;

        if let Some(ref code) = diagnostic.code {
            write!(f, " [{}]", code)?;
        }

        for help_msg in &diagnostic.help {
            write!(f, "\nhelp: {}", help_msg)?;
        }

        Ok(())
    }
}

impl std::error::Error for ParseError {}
