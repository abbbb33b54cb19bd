//! Tally - arena-backed arithmetic expression evaluation
//!
//! # Overview
//!
//! Tally parses integer and decimal arithmetic (`+`, `-`, `*`, `/` and
//! parentheses) into a tree whose nodes all live in a fixed-capacity bump
//! [`Region`], then evaluates the tree to an `f64`.
//!
//! # Quick Start
//!
//! ```
//! use tally::{Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions::default()).unwrap();
//! assert_eq!(session.evaluate("(1 + 2) * 3").unwrap(), 9.0);
//! ```
//!
//! # Working with the tree directly
//!
//! ```
//! use tally::{Region, evaluate, parse};
//!
//! let mut region = Region::new(4096).unwrap();
//! {
//!     let parsed = parse(&region, "6 / 2 / 3").unwrap();
//!     assert_eq!(parsed.expr.to_string(), "((6 / 2) / 3)");
//!     assert_eq!(evaluate(parsed.expr), 1.0);
//! }
//! region.reset();
//! ```

mod error_renderer;

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};

// Re-export public API from tally_core
pub use tally_core::api::{Diagnostic, Error, RelatedInfo, Session, SessionOptions, Severity};

// Re-export the building blocks
pub use tally_core::evaluator::evaluate;
pub use tally_core::lexer::{self, Lexer, Token, TokenKind};
pub use tally_core::parser::{
    self, BinaryOp, Expr, ParseError, ParsedExpr, Span, parse, parse_with_max_depth,
};
pub use tally_core::region::{self, Region, RegionError};
pub use tally_core::text;
