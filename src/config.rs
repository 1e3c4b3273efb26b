use crate::rewriting::ExemptIdentifiers;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Translates Java source into runic Java.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "runic", version)]
pub struct Config {
    /// File to translate; reads standard input when omitted
    #[arg(value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Directory to place the translated `<Class>.java` in; prints to
    /// standard output when omitted
    #[arg(short, long = "output", value_name = "DIRECTORY")]
    pub output_dir: Option<PathBuf>,

    /// Extra names to leave untranslated when renaming them would break
    /// the program (e.g. ArrayList); repeat the flag for each name
    #[arg(short, long, value_name = "KEEP", action = ArgAction::Append)]
    pub keep: Vec<String>,
}

impl Config {
    pub fn exempt_identifiers(&self) -> ExemptIdentifiers {
        ExemptIdentifiers::builtin().with_additions(&self.keep)
    }
}
