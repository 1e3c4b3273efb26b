pub use runic::diagnostic::*;
use std::cell::RefCell;
use std::rc::Rc;

pub type TestResult = std::result::Result<(), String>;

#[allow(dead_code)]
pub mod test_token {

    use runic::lexing::*;
    use runic::source::{self, Span};

    pub fn test(kind: TokenKind, text: &str) -> Token {
        let source = source::text(text);
        let span = Span::new(&source, 0, text.len(), 1);
        Token::new(kind, span)
    }

    pub fn ws(text: &str) -> Token {
        test(TokenKind::Whitespace, text)
    }

    pub fn keyword(text: &str) -> Token {
        test(TokenKind::Keyword, text)
    }

    pub fn ident(text: &str) -> Token {
        test(TokenKind::Identifier, text)
    }

    pub fn symbol(text: &str) -> Token {
        test(TokenKind::Symbol, text)
    }
}

#[allow(dead_code)]
pub mod test_rewrite {

    use runic::lexing::Lexer;
    use runic::rewriting::*;
    use runic::source;

    pub fn rewrite(text: &str, exempt: ExemptIdentifiers) -> runic::Result<Rewritten> {
        let tokens = Lexer::new(source::text(text)).lex();
        Rewriter::rewrite(&tokens, exempt)
    }

    pub fn rewrite_text(text: &str) -> Result<String, String> {
        rewrite(text, ExemptIdentifiers::builtin())
            .map(|r| r.text)
            .map_err(|e| e.to_string())
    }
}

pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCapture {
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl TestReporter {
    #[allow(dead_code)]
    pub fn new() -> (Rc<dyn Reporter>, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            Rc::new(TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            }),
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }
}

#[allow(dead_code)]
pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.len() != expected.len() {
        let one_line = format!(
            "Expected {} {}, got {}",
            expected.len(),
            kind,
            got.len(),
        );
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}

#[allow(dead_code)]
pub fn assert_text(got: &str, expected: &str) -> TestResult {
    if got == expected {
        Ok(())
    } else {
        println!("Expected:\n  {}\nGot:\n  {}", expected, got);
        Err(format!("Expected {:?}, got {:?}", expected, got))
    }
}
