use super::token::*;
use crate::source::*;
use log::debug;

const RESERVED: &[&str] = &[
    "class",
    "interface",
    "enum",
    "public",
    "private",
    "protected",
    "abstract",
    "static",
    "this",
    "extends",
    "Override",
    "super",
    "new",
    "import",
    "assert",
    "package",
    "throws",
    "throw",
    "try",
    "catch",
    "if",
    "else",
    "for",
    "while",
    "return",
    "instanceof",
    "final",
    "void",
    "int",
    "long",
    "char",
    "float",
    "double",
    "boolean",
    "true",
    "false",
    "break",
];

const BOUNDARIES: &[char] = &[
    '.', ',', '(', ')', '<', '>', '@', '[', ']', '{', '}', '/', '+', '-', '*', '%', '&', '=', '?',
    ':', ';',
];

pub fn is_reserved(word: &str) -> bool {
    RESERVED.contains(&word)
}

/// Characters that end the current word and become tokens of their own.
pub fn is_boundary(character: char) -> bool {
    BOUNDARIES.contains(&character)
}

pub fn is_whitespace(character: char) -> bool {
    matches!(character, ' ' | '\t' | '\n' | '\r')
}

/// Splits source text into whitespace runs, words and boundary symbols.
///
/// Nothing is dropped: the lexemes of the returned tokens, joined in order,
/// are the input text.
pub struct Lexer {
    source: Source,
    start: usize,
    start_line: usize,
    current: usize,
    line: usize,
    in_whitespace: bool,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new(source: Source) -> Self {
        Lexer {
            source,
            start: 0,
            start_line: 1,
            current: 0,
            line: 1,
            in_whitespace: false,
            tokens: Vec::new(),
        }
    }

    pub fn lex(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            let character = self.advance();
            self.scan(character);
        }

        self.flush(self.current);

        debug!(target: "lexer", "Lexed {} tokens from {}", self.tokens.len(), self.source.name);
        self.tokens
    }

    fn scan(&mut self, character: char) {
        let position = self.current - character.len_utf8();

        if self.in_whitespace {
            if !is_whitespace(character) {
                self.flush(position);
                self.in_whitespace = false;
                if is_boundary(character) {
                    self.symbol(position);
                }
            }
        } else if is_whitespace(character) {
            self.flush(position);
            self.in_whitespace = true;
        } else if is_boundary(character) {
            self.flush(position);
            self.symbol(position);
        }

        if character == '\n' {
            self.line += 1;
        }
    }

    /// Emits the buffered text up to `end`, if there is any.
    fn flush(&mut self, end: usize) {
        if end > self.start {
            let kind = if self.in_whitespace {
                TokenKind::Whitespace
            } else if is_reserved(self.source.lexeme(self.start, end - self.start)) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            self.push(kind, self.start, end);
        }
        self.start = end;
        self.start_line = self.line;
    }

    fn symbol(&mut self, position: usize) {
        self.push(TokenKind::Symbol, position, self.current);
        self.start = self.current;
        self.start_line = self.line;
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        let span = Span::new(&self.source, start, end - start, self.start_line);
        self.tokens.push(Token::new(kind, span));
    }

    fn advance(&mut self) -> char {
        let character = self.peek();
        self.current += character.len_utf8();
        character
    }

    fn peek(&self) -> char {
        self.source.content[self.current..]
            .chars()
            .next()
            .unwrap_or('\0')
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.length()
    }
}
