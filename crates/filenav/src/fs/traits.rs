//! Filesystem trait definitions

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

/// Blocking filesystem trait.
///
/// All filesystem implementations must implement this trait. Every method
/// maps onto a single operating-system primitive, and errors are returned as
/// `std::io::Error` so callers can attach their own context.
pub trait FileSystem: Send + Sync {
    /// Names of the entries directly inside a directory, excluding `.` and `..`.
    ///
    /// Names are returned as raw OS strings so entries that are not valid
    /// UTF-8 can still be joined back onto `path`.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>>;

    /// Get metadata, following symbolic links.
    ///
    /// Resolving the path needs search permission on every directory in it,
    /// so `stat(dir/.)` fails exactly when `dir` cannot be entered.
    fn stat(&self, path: &Path) -> io::Result<Metadata>;

    /// Create an empty file, truncating it if it already exists.
    fn create_file(&self, path: &Path) -> io::Result<()>;

    /// Create a single directory, requesting the given permission bits.
    ///
    /// The process umask still applies.
    fn mkdir(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Remove a file. Directories are rejected.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Rename/move a file or directory.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Copy file contents, overwriting the destination.
    ///
    /// The source is opened before the destination is touched, so a missing
    /// source leaves an existing destination unchanged. Returns bytes copied.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Change file permissions.
    fn chmod(&self, path: &Path, mode: u32) -> io::Result<()>;

    /// Resolve a path to its canonical absolute form.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// File metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata {
    /// File type
    pub file_type: FileType,
    /// File permissions (Unix mode)
    pub mode: u32,
}

/// File type, as seen after following symbolic links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// Regular file
    File,
    /// Directory
    Directory,
}

impl FileType {
    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, FileType::Directory)
    }
}
