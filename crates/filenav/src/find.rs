//! Recursive search for entries by exact name

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::fs::FileSystem;
use crate::limits::FindLimits;

/// Walk the tree under `root` and return every path whose final component
/// equals `name` (case-sensitive).
///
/// The walk is depth-first and pre-order, visiting each directory's entries in
/// sorted order, and does not stop at the first match. Symbolic links to
/// directories are followed. A directory whose canonical path is one of its
/// own ancestors on the current walk is not entered again, so link cycles
/// terminate, while a second link to a sibling tree is still searched.
/// Directories that cannot be read are skipped without error.
pub fn find_by_name(
    fs: &dyn FileSystem,
    root: &Path,
    name: &str,
    limits: &FindLimits,
) -> Vec<PathBuf> {
    let mut walker = Walker {
        fs,
        name,
        limits,
        ancestors: Vec::new(),
        hits: Vec::new(),
    };
    walker.walk(root, 0);
    walker.hits
}

struct Walker<'a> {
    fs: &'a dyn FileSystem,
    name: &'a str,
    limits: &'a FindLimits,
    /// Canonical paths of the directories currently being walked.
    ancestors: Vec<PathBuf>,
    hits: Vec<PathBuf>,
}

impl Walker<'_> {
    fn walk(&mut self, dir: &Path, depth: usize) {
        let canonical = match self.fs.canonicalize(dir) {
            Ok(canonical) => canonical,
            Err(e) => {
                tracing::debug!(path = %dir.display(), error = %e, "cannot resolve directory");
                return;
            }
        };
        if self.ancestors.contains(&canonical) {
            tracing::warn!(path = %dir.display(), "directory loops back to an ancestor, skipping");
            return;
        }

        self.ancestors.push(canonical);
        self.walk_entries(dir, depth);
        self.ancestors.pop();
    }

    fn walk_entries(&mut self, dir: &Path, depth: usize) {
        let mut names = match self.fs.read_dir(dir) {
            Ok(names) => names,
            Err(e) => {
                tracing::debug!(path = %dir.display(), error = %e, "cannot read directory");
                return;
            }
        };
        names.sort();

        for entry in names {
            let path = dir.join(&entry);
            if entry.as_os_str() == OsStr::new(self.name) {
                self.hits.push(path.clone());
            }
            let is_dir = self
                .fs
                .stat(&path)
                .map(|meta| meta.file_type.is_dir())
                .unwrap_or(false);
            if is_dir && self.limits.allows_depth(depth + 1) {
                self.walk(&path, depth + 1);
            }
        }
    }
}
