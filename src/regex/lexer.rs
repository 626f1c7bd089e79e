use crate::errors::LexError;
use crate::regex::tokens::{Token, TokenKind};

/// Converts a pattern string into a sequence of tokens.
///
/// Whitespace separates adjacent labels without producing a token, so
/// `"a b"` lexes the same as `"ab"`. A backslash escapes the following
/// character, operators included.
///
/// # Errors
///
/// Returns a [`LexError`] for a dangling escape at the end of the pattern.
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut iter = input.char_indices();
    let mut column = 0;

    while let Some((idx, ch)) = iter.next() {
        column = idx + 1;
        if ch.is_whitespace() {
            continue;
        }
        let kind = match ch {
            '\\' => {
                let (_, next) = iter
                    .next()
                    .ok_or_else(|| LexError::new(column, "dangling escape"))?;
                TokenKind::Char(next)
            }
            '|' => TokenKind::Or,
            '*' => TokenKind::Star,
            '+' => TokenKind::Plus,
            '?' => TokenKind::QMark,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ => TokenKind::Char(ch),
        };
        tokens.push(Token::new(kind, column));
    }

    tokens.push(Token::new(TokenKind::Eos, column + 1));
    Ok(tokens)
}
