//! In-memory filesystem for unit tests.

use std::{
    cell::{Cell, RefCell},
    io,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use indexmap::{IndexMap, IndexSet};

use crate::{error::BoxedCause, fs::FileSystem};

/// Files keyed by path, in insertion order.
///
/// Directory listings follow the order in which files were added, which lets
/// tests exercise unsorted enumeration. Every call is counted so tests can
/// assert that a failure happened before the filesystem was touched.
#[derive(Debug, Default)]
pub struct MemoryFileSystem {
    files: RefCell<IndexMap<PathBuf, Vec<u8>>>,
    calls: Cell<usize>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let fs = Self::new();
        for (path, content) in files {
            fs.add_file(path, content);
        }
        fs
    }

    pub fn add_file(&self, path: &str, content: &str) {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), content.as_bytes().to_vec());
    }

    pub fn contents(&self, path: &str) -> Option<String> {
        self.files
            .borrow()
            .get(Path::new(path))
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn record_call(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl FileSystem for MemoryFileSystem {
    fn list_dirs(&self, dir: &Path) -> io::Result<Vec<String>> {
        self.record_call();
        let mut names = IndexSet::new();
        let mut exists = false;
        for path in self.files.borrow().keys() {
            let Ok(rest) = path.strip_prefix(dir) else {
                continue;
            };
            exists = true;
            let mut components = rest.components();
            if let (Some(first), Some(_)) = (components.next(), components.next()) {
                names.insert(first.as_os_str().to_string_lossy().into_owned());
            }
        }
        if !exists {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such directory: {}", dir.display()),
            ));
        }
        Ok(names.into_iter().collect())
    }

    fn glob(&self, pattern: &str) -> Result<Vec<PathBuf>, BoxedCause> {
        self.record_call();
        let pattern = Pattern::new(pattern)?;
        let options = MatchOptions {
            require_literal_separator: true,
            ..MatchOptions::new()
        };
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|path| pattern.matches_path_with(path, options))
            .cloned()
            .collect())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.record_call();
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.record_call();
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), contents.as_bytes().to_vec());
        Ok(())
    }
}
