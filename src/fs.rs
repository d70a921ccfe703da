//! Filesystem capabilities used by the generator.
//!
//! The pipeline only needs four operations, so they sit behind a trait: the
//! binary uses [`OsFileSystem`], unit tests use an in-memory implementation.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::error::BoxedCause;

pub trait FileSystem {
    /// Names of the immediate subdirectories of `dir`, in enumeration order.
    fn list_dirs(&self, dir: &Path) -> io::Result<Vec<String>>;

    /// Regular files matching a glob `pattern`.
    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, BoxedCause>;

    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;
}

/// The real filesystem, backed by `std::fs` and the `glob` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn list_dirs(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, BoxedCause> {
        let mut files = Vec::new();
        for entry in glob::glob(pattern)? {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }
        Ok(files)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }
}
