mod filter;

pub use filter::{FileFilter, SourceFilter};

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

/// Recognized source file flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Cpp,
    Header,
    Sketch,
}

impl SourceKind {
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "cpp" => Some(Self::Cpp),
            "h" => Some(Self::Header),
            "ino" => Some(Self::Sketch),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Cpp => "cpp",
            Self::Header => "h",
            Self::Sketch => "ino",
        }
    }
}

/// A file of the corpus. Never mutated by any rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: SourceKind,
}

impl SourceFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        SourceKind::from_path(&path).map(|kind| Self { path, kind })
    }
}

/// Enumerates the corpus under a root directory.
///
/// Each call to [`CorpusWalker::walk`] starts a fresh traversal; order follows the
/// directory listing of the underlying platform.
pub struct CorpusWalker<F: FileFilter> {
    filter: F,
    use_gitignore: bool,
}

impl<F: FileFilter> CorpusWalker<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self {
            filter,
            use_gitignore: false,
        }
    }

    #[must_use]
    pub const fn with_gitignore(filter: F, use_gitignore: bool) -> Self {
        Self {
            filter,
            use_gitignore,
        }
    }

    /// Lazily yield the source files below `root`.
    ///
    /// Entries that cannot be listed are skipped.
    pub fn walk<'a>(&'a self, root: &'a Path) -> Box<dyn Iterator<Item = SourceFile> + 'a> {
        let paths: Box<dyn Iterator<Item = PathBuf> + 'a> = if self.use_gitignore {
            Box::new(Self::walk_with_gitignore(root))
        } else {
            Box::new(Self::walk_plain(root))
        };

        Box::new(paths.filter_map(move |path| {
            let relative = path.strip_prefix(root).unwrap_or(&path);
            if self.filter.should_include(relative) {
                SourceFile::new(path)
            } else {
                None
            }
        }))
    }

    /// Collect the whole corpus, for rules that need several passes.
    #[must_use]
    pub fn collect(&self, root: &Path) -> Vec<SourceFile> {
        self.walk(root).collect()
    }

    fn walk_plain(root: &Path) -> impl Iterator<Item = PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| e.file_type().is_file())
            .map(walkdir::DirEntry::into_path)
    }

    fn walk_with_gitignore(root: &Path) -> impl Iterator<Item = PathBuf> {
        WalkBuilder::new(root)
            .git_ignore(true)
            .git_global(true)
            .git_exclude(true)
            .require_git(false)
            .hidden(false)
            .parents(false)
            .build()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!(error = %e, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .map(ignore::DirEntry::into_path)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
