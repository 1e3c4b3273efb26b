use crate::error::{Error, Result};
use crate::lexing::Token;

/// A read position over a lexed token list, shared by the main rewrite loop
/// and every lookahead that consumes tokens on its behalf.
pub struct TokenCursor<'a> {
    tokens: &'a [Token],
    position: usize,
}

impl<'a> TokenCursor<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        TokenCursor {
            tokens,
            position: 0,
        }
    }

    pub fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    /// Like `next`, but running out of tokens is an error. `origin` is the
    /// token whose lookahead needed more input.
    pub fn advance(&mut self, context: &'static str, origin: &Token) -> Result<&'a Token> {
        self.next().ok_or_else(|| Error::UnexpectedEnd {
            context,
            span: Some(origin.span.clone()),
        })
    }

    pub fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }
}
