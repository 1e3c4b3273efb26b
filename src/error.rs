use crate::source::Span;
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("couldn't read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("couldn't read standard input: {0}")]
    Stdin(io::Error),

    #[error("couldn't write standard output: {0}")]
    Stdout(io::Error),

    /// A lookahead ran off the end of the token stream. The span points at
    /// the token that started the lookahead.
    #[error("unexpected end of input while reading {context}")]
    UnexpectedEnd {
        context: &'static str,
        span: Option<Span>,
    },

    #[error("no class declaration found, can't name the output file in {}", .directory.display())]
    MissingClassName { directory: PathBuf },

    #[error("couldn't write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl Error {
    pub fn span(&self) -> Option<&Span> {
        match self {
            Error::UnexpectedEnd { span, .. } => span.as_ref(),
            _ => None,
        }
    }
}
