use super::cursor::TokenCursor;
use crate::error::Result;
use crate::lexing::*;

/// Copies the text that follows an already-emitted identifier.
///
/// Usually that's a single token (`(`, `;`, an operator, whitespace). When
/// it's a `.`, the whole member access chain is copied untouched: it runs
/// until a symbol other than `.`, or until a word that comes after
/// whitespace with no `.` in between. That closing word is copied raw too.
pub fn consume_tail(cursor: &mut TokenCursor, origin: &Token) -> Result<String> {
    let mut token = cursor.advance("the end of an expression", origin)?;
    if token.lexeme() != "." {
        return Ok(String::from(token.lexeme()));
    }

    let mut tail = String::new();
    let mut after_whitespace = false;
    loop {
        tail += token.lexeme();
        match token.kind {
            TokenKind::Whitespace => after_whitespace = true,
            TokenKind::Identifier | TokenKind::Keyword => {
                if after_whitespace {
                    return Ok(tail);
                }
            }
            TokenKind::Symbol => {
                if token.lexeme() == "." {
                    after_whitespace = false;
                } else {
                    return Ok(tail);
                }
            }
        }
        token = cursor.advance("a member access chain", origin)?;
    }
}
