use crate::error::Error;
use crate::source::Span;
use colored::*;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Severity {
    Error,
    // Warning,
}

#[derive(Debug, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub span: Option<Span>,
    pub message: String,
}

impl Diagnostic {
    pub fn error(span: &Span, message: &str) -> Self {
        Diagnostic {
            severity: Severity::Error,
            span: Some(span.clone()),
            message: String::from(message),
        }
    }

    pub fn error_message(message: &str) -> Self {
        Diagnostic {
            severity: Severity::Error,
            span: None,
            message: String::from(message),
        }
    }
}

impl From<&Error> for Diagnostic {
    fn from(error: &Error) -> Self {
        let message = error.to_string();
        match error.span() {
            Some(span) => Diagnostic::error(span, &message),
            None => Diagnostic::error_message(&message),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.span {
            Some(span) => write!(f, "Diagnostic({}, {:?})", self.message, span),
            None => write!(f, "Diagnostic({})", self.message),
        }
    }
}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        let diags = self
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        String::from("Vec(") + &diags + ")"
    }
}

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Rc<Self> {
        Rc::new(DefaultReporter {})
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        let header = match diagnostic.severity {
            Severity::Error => "• Error:".red().bold(),
        };
        eprintln!("\n{} {}\n", header, diagnostic.message);

        if let Some(span) = &diagnostic.span {
            let (line, offset) = span.entire_line();
            eprintln!("  {}", line);

            let offset = (0..offset).map(|_| " ").collect::<String>();
            let width = span.lexeme().chars().count().max(1);
            let underline = (0..width).map(|_| "^").collect::<String>();
            eprintln!("  {}{}", offset, underline);
            eprintln!("  {}\n", span.location());
        }
    }
}
