use nu_ansi_term::{Color, Style};
use reedline::StyledText;
use tally::{Lexer, TokenKind};

fn color_of(kind: &TokenKind) -> Color {
    match kind {
        TokenKind::Int(_) | TokenKind::Float(_) => Color::Cyan,
        TokenKind::Plus | TokenKind::Minus | TokenKind::Star | TokenKind::Slash => Color::Magenta,
        TokenKind::LParen | TokenKind::RParen => Color::White,
        TokenKind::Invalid(_) => Color::Red,
        TokenKind::Eof => Color::White,
    }
}

/// Colors the input line token by token using the expression lexer.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _: usize) -> StyledText {
        let mut output = StyledText::new();
        let plain = Style::new().fg(Color::White);
        let mut curr_end = 0;

        for token in Lexer::new(line) {
            let span = token.span.0;
            if span.start > curr_end {
                output.push((plain, line[curr_end..span.start].to_string()));
            }
            let style = Style::new().fg(color_of(&token.kind));
            output.push((style, line[span.clone()].to_string()));
            curr_end = span.end;
        }

        // Whitespace after the last token, and anything past a NUL.
        if curr_end < line.len() {
            output.push((plain, line[curr_end..].to_string()));
        }

        output
    }
}
