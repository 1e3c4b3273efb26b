use super::chain::consume_tail;
use super::cursor::TokenCursor;
use super::exempt::ExemptIdentifiers;
use crate::error::Result;
use crate::lexing::*;
use crate::runes::transliterate;
use log::{debug, trace};

pub struct Rewritten {
    pub text: String,
    /// Transliterated name of the first declared class, if there was one.
    pub class_name: Option<String>,
    /// The exempt set as it stood at the end, imports included.
    pub exempt: ExemptIdentifiers,
}

/// Walks the tokens once, transliterating identifiers and copying
/// everything else.
pub struct Rewriter<'a> {
    cursor: TokenCursor<'a>,
    exempt: ExemptIdentifiers,
    output: String,
    class_name: Option<String>,
    class_name_captured: bool,
}

impl<'a> Rewriter<'a> {
    pub fn rewrite(tokens: &'a [Token], exempt: ExemptIdentifiers) -> Result<Rewritten> {
        let mut writer = Rewriter {
            cursor: TokenCursor::new(tokens),
            exempt,
            output: String::new(),
            class_name: None,
            class_name_captured: false,
        };

        while let Some(token) = writer.cursor.next() {
            writer.rewrite_token(token)?;
        }

        Ok(Rewritten {
            text: writer.output,
            class_name: writer.class_name,
            exempt: writer.exempt,
        })
    }

    fn rewrite_token(&mut self, token: &'a Token) -> Result<()> {
        match token.kind {
            TokenKind::Whitespace | TokenKind::Symbol => self.output += token.lexeme(),
            TokenKind::Identifier => self.rewrite_identifier(token)?,
            TokenKind::Keyword => {
                self.output += token.lexeme();
                match token.lexeme() {
                    "import" => self.rewrite_import(token)?,
                    "package" => self.rewrite_package(token)?,
                    "class" | "interface" | "enum" if !self.class_name_captured => {
                        self.rewrite_declaration(token)?
                    }
                    _ => (),
                }
            }
        }
        Ok(())
    }

    fn rewrite_identifier(&mut self, token: &'a Token) -> Result<()> {
        let name = token.lexeme();
        if self.exempt.contains(name) {
            self.output += name;
        } else {
            self.output += &transliterate(name);
        }

        let tail = consume_tail(&mut self.cursor, token)?;
        self.output += &tail;
        Ok(())
    }

    /// Copies through the closing `;` and exempts whatever came right
    /// before it, so the imported name keeps working.
    fn rewrite_import(&mut self, keyword: &'a Token) -> Result<()> {
        let mut last = None;
        loop {
            let token = self.cursor.advance("an import statement", keyword)?;
            self.output += token.lexeme();
            if token.is_symbol(";") {
                break;
            }
            last = Some(token);
        }

        if let Some(imported) = last {
            trace!(target: "rewriter", "Exempting imported name {}", imported.lexeme());
            self.exempt.insert(imported.lexeme());
        }
        Ok(())
    }

    fn rewrite_package(&mut self, keyword: &'a Token) -> Result<()> {
        loop {
            let token = self.cursor.advance("a package statement", keyword)?;
            self.output += token.lexeme();
            if token.is_symbol(";") {
                return Ok(());
            }
        }
    }

    /// Handles the header of the first type declaration, up to its `{` or
    /// the next keyword. Its last identifier names the output file.
    fn rewrite_declaration(&mut self, keyword: &'a Token) -> Result<()> {
        let mut name = None;
        loop {
            let token = self.cursor.advance("a class declaration", keyword)?;
            if token.is_symbol("{") || token.kind == TokenKind::Keyword {
                self.output += token.lexeme();
                break;
            }

            if token.kind == TokenKind::Identifier {
                let runes = transliterate(token.lexeme());
                self.output += &runes;
                name = Some(runes);
            } else {
                self.output += token.lexeme();
            }
        }

        debug!(target: "rewriter", "Detected class name {:?}", name);
        self.class_name = name;
        self.class_name_captured = true;
        Ok(())
    }
}
