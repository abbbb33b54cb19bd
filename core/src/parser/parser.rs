//! Recursive-descent parser with one routine per precedence level.
//!
//! ```text
//! expression := factor (('+' | '-') factor)*
//! factor     := atom   (('*' | '/') atom)*
//! atom       := NUMBER | '(' expression ')'
//! ```
//!
//! Both levels are left-associative: the running left operand is folded into a
//! new node before the next right operand is parsed. Operator chains are
//! parsed by loops, so only group nesting drives recursion.

use crate::{
    lexer::{InvalidToken, Lexer, Token, TokenKind},
    parser::{
        BinaryOp, Expr, ParsedExpr, Span,
        error::{ParseError, ParseErrorKind},
    },
    region::Region,
    text,
};

/// Default bound on group nesting.
///
/// Each level costs four parser frames; 256 levels fit a 2 MiB thread stack in
/// unoptimized builds.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse `source` into a tree allocated in `region`.
pub fn parse<'r>(region: &'r Region, source: &str) -> Result<ParsedExpr<'r>, ParseError> {
    parse_with_max_depth(region, source, DEFAULT_MAX_DEPTH)
}

/// Like [`parse`], with a custom depth limit.
///
/// `max_depth` is the number of parenthesized groups that may be open at once.
/// Operator chains do not count against it, so `0` still accepts `1 + 2` but
/// rejects `(1 + 2)`.
pub fn parse_with_max_depth<'r>(
    region: &'r Region,
    source: &str,
    max_depth: usize,
) -> Result<ParsedExpr<'r>, ParseError> {
    let source = text::until_nul(source);
    let source = region.alloc_str(source).map_err(|e| {
        ParseError::new(
            ParseErrorKind::OutOfRegion(e),
            source.to_string(),
            Span::new(0, source.len()),
        )
    })?;
    Parser::new(region, source, max_depth).parse()
}

/// Parser state: the lexer, the single token of lookahead, and the region that
/// receives every node.
pub struct Parser<'r> {
    region: &'r Region,
    lexer: Lexer<'r>,
    current: Token,
    depth: usize,
    max_depth: usize,
}

impl<'r> Parser<'r> {
    pub fn new(region: &'r Region, source: &'r str, max_depth: usize) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            region,
            lexer,
            current,
            depth: 0,
            max_depth,
        }
    }

    /// Parse a complete expression; anything left over is an error.
    pub fn parse(mut self) -> Result<ParsedExpr<'r>, ParseError> {
        let root = self.parse_expression()?;
        if !self.current.is_eof() {
            return Err(self.unexpected("an operator or end of input"));
        }

        tracing::trace!(used = self.region.used(), "parsed expression");
        Ok(ParsedExpr {
            source: self.lexer.source(),
            expr: root,
        })
    }

    /// Move to the next token, returning the one just consumed.
    fn advance(&mut self) -> Token {
        let next = self.lexer.next_token();
        core::mem::replace(&mut self.current, next)
    }

    fn parse_expression(&mut self) -> Result<&'r Expr<'r>, ParseError> {
        let mut left = self.parse_factor()?;

        while let Some(op) = self.additive_op() {
            let op_token = self.advance();
            let right = self.parse_factor()?;
            left = self.binary(op, left, right, op_token.span)?;
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<&'r Expr<'r>, ParseError> {
        let mut left = self.parse_atom()?;

        while let Some(op) = self.multiplicative_op() {
            let op_token = self.advance();
            let right = self.parse_atom()?;
            left = self.binary(op, left, right, op_token.span)?;
        }
        Ok(left)
    }

    fn parse_atom(&mut self) -> Result<&'r Expr<'r>, ParseError> {
        match self.current.kind {
            TokenKind::Int(value) => {
                let token = self.advance();
                self.number(value as f64, token.span)
            }
            TokenKind::Float(value) => {
                let token = self.advance();
                self.number(value, token.span)
            }
            TokenKind::LParen => self.parse_group(),
            _ => Err(self.unexpected("a number or '('")),
        }
    }

    fn parse_group(&mut self) -> Result<&'r Expr<'r>, ParseError> {
        let open = self.advance();

        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.error(
                ParseErrorKind::MaxDepthExceeded {
                    depth: self.depth,
                    max_depth: self.max_depth,
                },
                open.span,
            ));
        }
        let inner = self.parse_expression()?;
        self.depth -= 1;

        match self.current.kind {
            TokenKind::RParen => {
                self.advance();
                Ok(inner)
            }
            TokenKind::Eof => Err(self.error(
                ParseErrorKind::UnclosedDelimiter {
                    delimiter: '(',
                    opened_at: open.span,
                },
                self.current.span.clone(),
            )),
            _ => Err(self.unexpected("an operator or ')'")),
        }
    }

    fn additive_op(&self) -> Option<BinaryOp> {
        match self.current.kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    fn multiplicative_op(&self) -> Option<BinaryOp> {
        match self.current.kind {
            TokenKind::Star => Some(BinaryOp::Mul),
            TokenKind::Slash => Some(BinaryOp::Div),
            _ => None,
        }
    }

    fn number(&self, value: f64, span: Span) -> Result<&'r Expr<'r>, ParseError> {
        self.alloc(Expr::Number(value), span)
    }

    fn binary(
        &self,
        op: BinaryOp,
        left: &'r Expr<'r>,
        right: &'r Expr<'r>,
        op_span: Span,
    ) -> Result<&'r Expr<'r>, ParseError> {
        self.alloc(Expr::Binary { op, left, right }, op_span)
    }

    fn alloc(&self, expr: Expr<'r>, span: Span) -> Result<&'r Expr<'r>, ParseError> {
        match self.region.alloc(expr) {
            Ok(expr) => Ok(expr),
            Err(e) => Err(self.error(e.into(), span)),
        }
    }

    /// Error for the current token, which did not match `expected`. Lexical
    /// problems take precedence over the grammar mismatch.
    fn unexpected(&self, expected: &str) -> ParseError {
        let span = self.current.span.clone();
        let kind = match self.current.kind {
            TokenKind::Invalid(InvalidToken::UnknownCharacter(found)) => {
                ParseErrorKind::UnknownToken { found }
            }
            TokenKind::Invalid(InvalidToken::IntegerOverflow) => ParseErrorKind::InvalidNumber {
                text: span.str_of(self.lexer.source()).to_string(),
            },
            kind => ParseErrorKind::UnexpectedToken {
                expected: expected.to_string(),
                found: kind.to_string(),
            },
        };
        self.error(kind, span)
    }

    fn error(&self, kind: ParseErrorKind, span: Span) -> ParseError {
        ParseError::new(kind, self.lexer.source().to_string(), span)
    }
}
