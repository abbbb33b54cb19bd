mod parsed_expr;
pub mod parser;
mod syntax;
pub mod error;

// Re-export the parser entry points for external use
pub use parser::DEFAULT_MAX_DEPTH;
pub use parser::Parser;
pub use parser::parse;
pub use parser::parse_with_max_depth;

pub use parsed_expr::{Expr, ParsedExpr};
pub use syntax::{BinaryOp, Span};
pub use error::{ParseError, ParseErrorKind};
