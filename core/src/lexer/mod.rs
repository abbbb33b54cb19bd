//! Tokenizer for arithmetic expressions.
//!
//! The lexer hands out one [`Token`] per call to [`Lexer::next_token`]. Whitespace
//! (space, tab, newline, vertical tab, form feed, carriage return) separates
//! tokens and is never returned. The input ends at its last byte or at the first
//! NUL, whichever comes first; from then on every call returns [`TokenKind::Eof`].


use core::fmt;

use logos::Logos;

use crate::{parser::Span, text};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\x0B\x0C]+")]
enum RawToken {
    #[regex(r"[0-9]+", lex_fraction)]
    Number,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("/")]
    Slash,
}

// Extends an integer run with `.digits` when present. A trailing point without
// digits is left for the next token.
fn lex_fraction(lex: &mut logos::Lexer<RawToken>) {
    if let Some(fraction) = lex.remainder().strip_prefix('.') {
        let digits = fraction.bytes().take_while(u8::is_ascii_digit).count();
        if digits > 0 {
            lex.bump(digits + 1);
        }
    }
}

/// What a token is, with its decoded payload for numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    Int(i64),
    Float(f64),
    LParen,
    RParen,
    Plus,
    Minus,
    Star,
    Slash,
    Eof,
    Invalid(InvalidToken),
}

/// Why a span of input could not be turned into a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidToken {
    UnknownCharacter(char),
    IntegerOverflow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(value) => write!(f, "number {}", value),
            TokenKind::Float(value) => write!(f, "number {}", value),
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::Plus => write!(f, "'+'"),
            TokenKind::Minus => write!(f, "'-'"),
            TokenKind::Star => write!(f, "'*'"),
            TokenKind::Slash => write!(f, "'/'"),
            TokenKind::Eof => write!(f, "end of input"),
            TokenKind::Invalid(InvalidToken::UnknownCharacter(c)) => {
                write!(f, "unknown character {:?}", c)
            }
            TokenKind::Invalid(InvalidToken::IntegerOverflow) => {
                write!(f, "integer overflow")
            }
        }
    }
}

/// Pull-based lexer over a borrowed source.
pub struct Lexer<'src> {
    source: &'src str,
    inner: logos::Lexer<'src, RawToken>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        let source = text::until_nul(source);
        Self {
            source,
            inner: RawToken::lexer(source),
        }
    }

    /// The input actually being tokenized (cut at the first NUL).
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Byte offset just past the last token produced.
    pub fn cursor(&self) -> usize {
        self.inner.span().end
    }

    /// Produce the next token, or `Eof` once the input is exhausted.
    pub fn next_token(&mut self) -> Token {
        let Some(raw) = self.inner.next() else {
            let end = self.source.len();
            return Token {
                kind: TokenKind::Eof,
                span: Span::new(end, end),
            };
        };

        let span = self.inner.span();
        let kind = match raw {
            Ok(RawToken::Number) => decode_number(self.inner.slice()),
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::Plus) => TokenKind::Plus,
            Ok(RawToken::Minus) => TokenKind::Minus,
            Ok(RawToken::Star) => TokenKind::Star,
            Ok(RawToken::Slash) => TokenKind::Slash,
            Err(()) => return self.unknown_character(span.start),
        };

        Token {
            kind,
            span: Span(span),
        }
    }

    // Report exactly one character, so the next token starts on a char boundary.
    fn unknown_character(&mut self, start: usize) -> Token {
        let c = self.source[start..].chars().next().unwrap_or('\u{FFFD}');
        let end = start + c.len_utf8();
        let consumed = self.inner.span().end;
        if consumed < end {
            self.inner.bump(end - consumed);
        }
        Token {
            kind: TokenKind::Invalid(InvalidToken::UnknownCharacter(c)),
            span: Span::new(start, end),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields every token before `Eof`.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

fn decode_number(text: &str) -> TokenKind {
    let decoded = if text.contains('.') {
        text::parse_double(text).map(TokenKind::Float)
    } else {
        text::parse_int(text).map(TokenKind::Int)
    };
    decoded.unwrap_or(TokenKind::Invalid(InvalidToken::IntegerOverflow))
}

/// Tokenize a whole source, ending with the `Eof` token.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
