//! File Operations
//!
//! A thin wrapper around a path giving the processor the three primitives it
//! needs: existence checks, whole-file reads and atomic whole-file writes.
//!
//! ## Atomic writes
//!
//! [`File::write_atomic`] writes into a temporary file created next to the
//! destination, flushes it to disk, and then renames it over the
//! destination. Until the rename happens the destination is untouched; if
//! any step fails the temporary file is removed when it is dropped.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// A file on disk addressed by path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct File {
    path: PathBuf,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads the whole file. The handle is closed before returning.
    pub fn read_all(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    /// Reads the whole file as UTF-8 text.
    ///
    /// Invalid UTF-8 surfaces as an `InvalidData` I/O error.
    pub fn read_to_string(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }

    /// Replaces the file contents with `data` in one step.
    ///
    /// Parent directories are created as needed. On error the destination
    /// keeps whatever it had before (or stays absent).
    ///
    /// An existing destination keeps its permissions. A new file is created
    /// owner-only (`0600` on Unix).
    pub fn write_atomic(&self, data: &[u8]) -> io::Result<()> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(data)?;
        if let Some(existing) = fs::metadata(&self.path).ok().filter(fs::Metadata::is_file) {
            tmp.as_file().set_permissions(existing.permissions())?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        Ok(())
    }
}
