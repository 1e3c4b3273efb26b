pub mod lexer;
pub mod token;

pub use lexer::{is_boundary, is_reserved, is_whitespace, Lexer};
pub use token::{Token, TokenKind, TokenString};
