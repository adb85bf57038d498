//! Directory listing with permission strings

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{IoResultExt, Result};
use crate::fs::FileSystem;
use crate::permissions::format_permissions;

/// Name of the parent entry, always listed first.
const PARENT_ENTRY: &str = "..";

/// One readable entry in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Entry name (not full path), exactly as the OS returned it
    pub name: OsString,
    /// Whether the entry is a directory, after following symlinks
    pub is_dir: bool,
    /// Raw mode bits
    pub mode: u32,
}

impl DirectoryEntry {
    /// The 10-character permission string for this entry.
    pub fn permissions(&self) -> String {
        format_permissions(self.mode, self.is_dir)
    }
}

/// A listed entry, or a placeholder when its metadata could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListEntry {
    Entry(DirectoryEntry),
    Unreadable(OsString),
}

impl ListEntry {
    /// Entry name.
    pub fn name(&self) -> &OsStr {
        match self {
            ListEntry::Entry(entry) => &entry.name,
            ListEntry::Unreadable(name) => name,
        }
    }
}

/// The contents of one directory, ready to render.
///
/// `Display` produces the framed block shown above the prompt:
///
/// ```text
/// --- Listing for: /home/user ---
/// drwxr-xr-x [DIR] ../
/// -rw-r--r-- [FILE]notes.txt
/// -----------------------------------
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Directory that was listed
    pub path: PathBuf,
    /// `..` first, then the directory's entries sorted by name
    pub entries: Vec<ListEntry>,
}

/// List the immediate entries of a directory.
///
/// The self entry `.` is skipped; the parent entry `..` is included. Entries
/// whose metadata cannot be read become [`ListEntry::Unreadable`] instead of
/// failing the whole listing. Fails only if the directory itself cannot be
/// read. Names that are not valid UTF-8 are kept as-is for the metadata
/// lookup and only rendered lossily.
pub fn list_directory(fs: &dyn FileSystem, path: &Path) -> Result<Listing> {
    let mut names = fs.read_dir(path).action("Error listing directory")?;
    names.sort();

    let entries = std::iter::once(OsString::from(PARENT_ENTRY))
        .chain(names)
        .map(|name| match fs.stat(&path.join(&name)) {
            Ok(meta) => ListEntry::Entry(DirectoryEntry {
                name,
                is_dir: meta.file_type.is_dir(),
                mode: meta.mode,
            }),
            Err(e) => {
                tracing::debug!(
                    entry = %name.to_string_lossy(),
                    error = %e,
                    "metadata unreadable"
                );
                ListEntry::Unreadable(name)
            }
        })
        .collect();

    Ok(Listing {
        path: path.to_path_buf(),
        entries,
    })
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Listing for: {} ---", self.path.display())?;
        for entry in &self.entries {
            match entry {
                ListEntry::Entry(entry) => {
                    let tag = if entry.is_dir { "[DIR]" } else { "[FILE]" };
                    let slash = if entry.is_dir { "/" } else { "" };
                    writeln!(
                        f,
                        "{} {:<6}{}{}",
                        entry.permissions(),
                        tag,
                        entry.name.to_string_lossy(),
                        slash
                    )?;
                }
                ListEntry::Unreadable(name) => writeln!(f, "  [?] {}", name.to_string_lossy())?,
            }
        }
        writeln!(f, "-----------------------------------")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::fs::InMemoryFs;
    use pretty_assertions::assert_eq;

    fn fixture() -> InMemoryFs {
        let fs = InMemoryFs::new();
        fs.write_file(Path::new("/home/user/notes.txt"), b"hi")
            .unwrap();
        fs.mkdir(Path::new("/home/user/src"), 0o777).unwrap();
        fs.write_file(Path::new("/home/user/run.sh"), b"#!/bin/sh")
            .unwrap();
        fs.chmod(Path::new("/home/user/run.sh"), 0o700).unwrap();
        fs
    }

    #[test]
    fn test_parent_first_then_sorted() {
        let fs = fixture();
        let listing = list_directory(&fs, Path::new("/home/user")).unwrap();
        let names: Vec<&OsStr> = listing.entries.iter().map(ListEntry::name).collect();
        assert_eq!(names, vec!["..", "notes.txt", "run.sh", "src"]);
    }

    #[test]
    fn test_render_listing() {
        let fs = fixture();
        let listing = list_directory(&fs, Path::new("/home/user")).unwrap();
        assert_eq!(
            listing.to_string(),
            "--- Listing for: /home/user ---\n\
             drwxr-xr-x [DIR] ../\n\
             -rw-r--r-- [FILE]notes.txt\n\
             -rwx------ [FILE]run.sh\n\
             drwxr-xr-x [DIR] src/\n\
             -----------------------------------\n"
        );
    }

    #[test]
    fn test_empty_directory_lists_parent_only() {
        let fs = InMemoryFs::new();
        let listing = list_directory(&fs, Path::new("/tmp")).unwrap();
        assert_eq!(listing.entries.len(), 1);
        assert_eq!(listing.entries[0].name(), "..");
    }

    #[test]
    fn test_missing_directory_fails() {
        let fs = InMemoryFs::new();
        let err = list_directory(&fs, Path::new("/nope")).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().starts_with("Error listing directory: "));
    }

    #[test]
    fn test_listing_is_repeatable() {
        let fs = fixture();
        let first = list_directory(&fs, Path::new("/home/user")).unwrap();
        let second = list_directory(&fs, Path::new("/home/user")).unwrap();
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_unreadable_placeholder_rendering() {
        let listing = Listing {
            path: PathBuf::from("/x"),
            entries: vec![ListEntry::Unreadable("ghost".into())],
        };
        assert!(listing.to_string().contains("\n  [?] ghost\n"));
    }
}
