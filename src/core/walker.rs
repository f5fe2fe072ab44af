//! Directory walking functionality
//!
//! Top-down traversal that yields one [`DirListing`] per directory. Excluded
//! directory names are dropped from a listing before anything below them is
//! read, so pruned subtrees are never visited.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::config::ScanRules;
use crate::error::{AnalyzerError, Result};
use crate::models::DirListing;
use crate::utils::path::depth_from;

/// Pruning directory walker
#[derive(Debug, Clone, Copy)]
pub struct DirWalker<'a> {
    root: &'a Path,
    rules: &'a ScanRules,
    skip_file: Option<&'a Path>,
}

impl<'a> DirWalker<'a> {
    /// Create a walker rooted at `root`
    pub fn new(root: &'a Path, rules: &'a ScanRules) -> Self {
        Self {
            root,
            rules,
            skip_file: None,
        }
    }

    /// Leave one file out of every listing (the report being written)
    pub fn skipping_file(mut self, path: &'a Path) -> Self {
        self.skip_file = Some(path);
        self
    }

    /// Start a fresh traversal
    pub fn walk(&self) -> DirWalk<'a> {
        // Resolved once so an aliased root still recognizes the file
        let skip_file = self
            .skip_file
            .map(|path| fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()));

        DirWalk {
            walker: *self,
            skip_file,
            pending: vec![self.root.to_path_buf()],
        }
    }

    /// Read the immediate children of `dir`
    fn list(&self, dir: &Path, skip_file: Option<&Path>) -> Result<DirListing> {
        let mut subdirs = Vec::new();
        let mut files = Vec::new();

        let entries = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for entry in entries {
            let entry = entry.map_err(|err| AnalyzerError::directory_traversal_error(dir, err))?;
            let name = entry.file_name().to_os_string();
            let file_type = entry.file_type();

            if file_type.is_dir() {
                if name.to_str().is_some_and(|name| self.rules.is_excluded_dir(name)) {
                    debug!(path = %entry.path().display(), "pruning excluded directory");
                    continue;
                }
                subdirs.push(name);
            } else if file_type.is_symlink() && entry.path().is_dir() {
                debug!(path = %entry.path().display(), "not following directory link");
            } else if is_same_file(entry.path(), skip_file) {
                debug!(path = %entry.path().display(), "skipping report file");
            } else {
                files.push(name);
            }
        }

        Ok(DirListing {
            path: dir.to_path_buf(),
            depth: depth_from(self.root, dir),
            subdirs,
            files,
        })
    }
}

/// Whether `path` names `skip_file` (already canonical), links and aliases
/// of the containing directories included
fn is_same_file(path: &Path, skip_file: Option<&Path>) -> bool {
    let Some(skip_file) = skip_file else {
        return false;
    };

    if path.file_name() != skip_file.file_name() {
        return false;
    }

    path == skip_file || fs::canonicalize(path).is_ok_and(|resolved| resolved == skip_file)
}

/// Iterator over the directories of one traversal
pub struct DirWalk<'a> {
    walker: DirWalker<'a>,
    skip_file: Option<PathBuf>,
    pending: Vec<PathBuf>,
}

impl Iterator for DirWalk<'_> {
    type Item = Result<DirListing>;

    fn next(&mut self) -> Option<Self::Item> {
        let dir = self.pending.pop()?;

        match self.walker.list(&dir, self.skip_file.as_deref()) {
            Ok(listing) => {
                // Reversed so the stack pops them in sorted order
                for name in listing.subdirs.iter().rev() {
                    self.pending.push(dir.join(name));
                }
                Some(Ok(listing))
            }
            Err(err) => {
                // Fatal: nothing after a failed directory is reported
                self.pending.clear();
                Some(Err(err))
            }
        }
    }
}
