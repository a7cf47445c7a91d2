//! Translation units.

use std::path::{Path, PathBuf};

use crate::FrontEndError;

/// One source file, already in memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub source: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, source: impl Into<String>) -> Self {
        SourceUnit {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Read a unit from disk. The file must be UTF-8.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FrontEndError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| FrontEndError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(SourceUnit::new(path, source))
    }

    /// The path as shown in diagnostics.
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}
