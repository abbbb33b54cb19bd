use reedline::{ValidationResult, Validator};
use tally::{Lexer, TokenKind};

/// Number of groups still open at the end of `buffer`.
///
/// Returns `None` when the buffer contains a character the lexer rejects,
/// since submitting it is the quickest way to see the error.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: usize = 0;

    for token in Lexer::new(buffer) {
        match token.kind {
            TokenKind::LParen => depth += 1,
            TokenKind::RParen => depth = depth.saturating_sub(1),
            TokenKind::Invalid(_) => return None,
            _ => {}
        }
    }

    Some(depth)
}

/// Keeps the editor open on Enter while a group is unclosed.
pub struct GroupValidator;

impl Validator for GroupValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}
