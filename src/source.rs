use crate::error::{Error, Result};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::rc::Rc;

#[derive(Debug)]
pub struct SourceImpl {
    pub name: String,
    pub content: String,
}

pub type Source = Rc<SourceImpl>;

pub fn file(path: &Path) -> Result<Source> {
    let content = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Rc::new(SourceImpl {
        name: path.display().to_string(),
        content,
    }))
}

pub fn stdin() -> Result<Source> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(Error::Stdin)?;
    Ok(Rc::new(SourceImpl {
        name: String::from("<stdin>"),
        content,
    }))
}

pub fn text(text: &str) -> Source {
    Rc::new(SourceImpl {
        name: String::from("<input>"),
        content: String::from(text),
    })
}

impl SourceImpl {
    pub fn length(&self) -> usize {
        self.content.len()
    }

    pub fn lexeme(&self, index: usize, length: usize) -> &str {
        let end = index + length;
        &self.content[index..end]
    }
}

/// A byte range of a source, along with the line it starts on.
#[derive(Clone)]
pub struct Span {
    pub source: Source,
    pub index: usize,
    pub length: usize,
    pub line: usize,
}

impl Span {
    pub fn new(source: &Source, index: usize, length: usize, line: usize) -> Self {
        Span {
            source: Rc::clone(source),
            index,
            length,
            line,
        }
    }

    pub fn lexeme(&self) -> &str {
        self.source.lexeme(self.index, self.length)
    }

    /// The full line containing the start of this span, and the column
    /// (in characters) at which the span begins within it.
    pub fn entire_line(&self) -> (&str, usize) {
        let content = &self.source.content;
        let start = content[..self.index]
            .rfind('\n')
            .map(|i| i + 1)
            .unwrap_or(0);
        let end = content[self.index..]
            .find('\n')
            .map(|i| self.index + i)
            .unwrap_or_else(|| content.len());
        let offset = content[start..self.index].chars().count();
        (&content[start..end], offset)
    }

    pub fn location(&self) -> String {
        format!("{}:{}", self.source.name, self.line)
    }
}

impl PartialEq for Span {
    fn eq(&self, other: &Span) -> bool {
        self.index == other.index && self.length == other.length && self.line == other.line
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Span(index: {}, length: {}, line: {})",
            self.index, self.length, self.line
        )
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.location())
    }
}
