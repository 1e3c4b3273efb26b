pub mod config;
pub mod diagnostic;
pub mod error;
pub mod lexing;
pub mod output;
pub mod rewriting;
pub mod runes;
pub mod source;

pub use config::Config;
pub use error::{Error, Result};

use diagnostic::*;
use lexing::Lexer;
use log::debug;
use output::Destination;
use rewriting::{ExemptIdentifiers, Rewriter};
use source::Source;
use std::rc::Rc;

/// A fully rewritten program.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    pub class_name: Option<String>,
}

/// Lexes and rewrites `source`, then applies the final replacement pass.
/// Nothing is produced if any step fails.
pub fn translate(source: &Source, exempt: ExemptIdentifiers) -> Result<Translation> {
    let tokens = Lexer::new(Rc::clone(source)).lex();
    let rewritten = Rewriter::rewrite(&tokens, exempt)?;
    debug!(
        "Rewrote {} ({} exempt names at the end)",
        source.name,
        rewritten.exempt.len()
    );

    Ok(Translation {
        text: rewriting::finish(&rewritten.text),
        class_name: rewritten.class_name,
    })
}

pub fn run(config: Config) -> Result<()> {
    run_with_reporter(config, DefaultReporter::new())
}

pub fn run_with_reporter(config: Config, reporter: Rc<dyn Reporter>) -> Result<()> {
    let result = run_config(&config);
    if let Err(error) = &result {
        reporter.report(Diagnostic::from(error));
    }
    result
}

fn run_config(config: &Config) -> Result<()> {
    let source = match &config.input {
        Some(path) => source::file(path)?,
        None => source::stdin()?,
    };

    let translation = translate(&source, config.exempt_identifiers())?;
    let destination = Destination::from_option(config.output_dir.as_deref());
    output::write(&translation, &destination)
}
