//! Locating files and folders beneath a configured root.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Searches a directory tree for files and folders by name.
///
/// The walk is depth-first in name order; a directory's own files are checked
/// before descending into its sub-directories. Unreadable directories are
/// skipped.
#[derive(Debug, Clone)]
pub struct FileLocator {
    root: PathBuf,
    max_depth: Option<usize>,
}

#[derive(Clone, Copy)]
enum Target {
    File,
    Dir,
}

impl FileLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_depth: None,
        }
    }

    /// Limits how many directory levels below the root are searched.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// First regular file called `name`.
    pub fn find_file(&self, name: &str) -> Option<PathBuf> {
        self.search(&self.root, 0, Target::File, &|path: &Path| {
            path.file_name().is_some_and(|file| file == name)
        })
    }

    /// First directory called `name`, the root included.
    pub fn find_dir(&self, name: &str) -> Option<PathBuf> {
        if self.root.file_name().is_some_and(|file| file == name) {
            return Some(self.root.clone());
        }
        self.search(&self.root, 0, Target::Dir, &|path: &Path| {
            path.file_name().is_some_and(|file| file == name)
        })
    }

    /// First directory whose trailing components are the `/`-separated names
    /// in `partial`, e.g. `"reports/2024"`.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidPartialPath`] for input containing a
    /// backslash or no folder names.
    pub fn find_subroot(&self, partial: &str) -> Result<Option<PathBuf>> {
        let names: Vec<&str> = partial.split('/').filter(|name| !name.is_empty()).collect();
        if partial.contains('\\') || names.is_empty() {
            return Err(IngestError::InvalidPartialPath {
                input: partial.to_string(),
            });
        }
        let suffix: PathBuf = names.iter().collect();
        if self.root.ends_with(&suffix) {
            return Ok(Some(self.root.clone()));
        }
        Ok(self.search(&self.root, 0, Target::Dir, &|path: &Path| path.ends_with(&suffix)))
    }

    fn search(
        &self,
        dir: &Path,
        depth: usize,
        target: Target,
        matches: &dyn Fn(&Path) -> bool,
    ) -> Option<PathBuf> {
        let mut files = Vec::new();
        let mut dirs = Vec::new();
        match fs::read_dir(dir) {
            Ok(entries) => {
                for entry in entries.flatten() {
                    let path = entry.path();
                    match entry.file_type() {
                        Ok(kind) if kind.is_dir() => dirs.push(path),
                        Ok(kind) if kind.is_file() => files.push(path),
                        _ => {}
                    }
                }
            }
            Err(error) => {
                debug!(dir = %dir.display(), %error, "skipping unreadable directory");
                return None;
            }
        }
        files.sort();
        dirs.sort();

        let candidates = match target {
            Target::File => &files,
            Target::Dir => &dirs,
        };
        if let Some(found) = candidates.iter().find(|path| matches(path)) {
            return Some(found.clone());
        }
        if self.max_depth.is_some_and(|max| depth >= max) {
            return None;
        }
        dirs.iter()
            .find_map(|sub| self.search(sub, depth + 1, target, matches))
    }
}

/// Creates `path` if it does not exist yet. Parent directories must exist.
///
/// Returns `true` when the directory was created and `false` when it was
/// already there.
pub fn ensure_folder(path: &Path) -> Result<bool> {
    match fs::create_dir(path) {
        Ok(()) => {
            info!(path = %path.display(), "Successfully created the directory");
            Ok(true)
        }
        Err(error) if error.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(false),
        Err(source) => Err(IngestError::CreateFolder {
            path: path.to_path_buf(),
            source,
        }),
    }
}
