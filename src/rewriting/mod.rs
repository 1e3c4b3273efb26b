mod chain;
mod cursor;
mod exempt;
mod final_pass;
mod rewriter;

pub use chain::consume_tail;
pub use cursor::TokenCursor;
pub use exempt::ExemptIdentifiers;
pub use final_pass::{finish, LANGUAGE_RUNES};
pub use rewriter::{Rewriter, Rewritten};
