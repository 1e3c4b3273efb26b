use crate::error::{Error, Result};
use crate::Translation;
use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub enum Destination {
    Stdout,
    Directory(PathBuf),
}

impl Destination {
    pub fn from_option(directory: Option<&Path>) -> Self {
        match directory {
            Some(dir) => Destination::Directory(dir.to_path_buf()),
            None => Destination::Stdout,
        }
    }
}

/// Path of the file a translation is written to, named after its class.
pub fn file_path(translation: &Translation, directory: &Path) -> Result<PathBuf> {
    match &translation.class_name {
        Some(name) => Ok(directory.join(format!("{}.java", name))),
        None => Err(Error::MissingClassName {
            directory: directory.to_path_buf(),
        }),
    }
}

pub fn write(translation: &Translation, destination: &Destination) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", translation.text).map_err(Error::Stdout)
        }
        Destination::Directory(directory) => {
            let path = file_path(translation, directory)?;
            fs::write(&path, translation.text.as_bytes()).map_err(|source| Error::Write {
                path: path.clone(),
                source,
            })?;
            info!("Wrote {}", path.display());
            Ok(())
        }
    }
}
