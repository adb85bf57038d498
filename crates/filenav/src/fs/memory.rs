//! In-memory filesystem implementation

use std::collections::HashMap;
use std::ffi::OsString;
use std::io::{self, Error as IoError, ErrorKind};
use std::path::{Component, Path, PathBuf};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::traits::{FileSystem, FileType, Metadata};

/// Umask applied to directories and files created in memory.
const UMASK: u32 = 0o022;

/// Mode of newly created files before the umask.
const FILE_CREATE_MODE: u32 = 0o666;

/// In-memory filesystem.
///
/// Stores all files and directories in memory using a HashMap keyed by
/// normalized absolute path. There are no symbolic links and no permission
/// enforcement; modes are stored and reported only.
pub struct InMemoryFs {
    entries: RwLock<HashMap<PathBuf, FsEntry>>,
}

#[derive(Debug, Clone)]
enum FsEntry {
    File { content: Vec<u8>, mode: u32 },
    Directory { mode: u32 },
}

impl FsEntry {
    fn metadata(&self) -> Metadata {
        match self {
            FsEntry::File { mode, .. } => Metadata {
                file_type: FileType::File,
                mode: *mode,
            },
            FsEntry::Directory { mode } => Metadata {
                file_type: FileType::Directory,
                mode: *mode,
            },
        }
    }

    fn is_dir(&self) -> bool {
        matches!(self, FsEntry::Directory { .. })
    }
}

impl Default for InMemoryFs {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryFs {
    /// Create a new in-memory filesystem.
    ///
    /// Starts with `/`, `/tmp`, `/home` and `/home/user`, all mode 0755.
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for dir in ["/", "/tmp", "/home", "/home/user"] {
            entries.insert(PathBuf::from(dir), FsEntry::Directory { mode: 0o755 });
        }
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Write a file, replacing any previous content. Used to seed fixtures.
    pub fn write_file(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let path = normalize_path(path);
        let mut entries = self.write();
        require_parent_dir(&entries, &path)?;
        match entries.get_mut(&path) {
            Some(FsEntry::Directory { .. }) => Err(is_a_directory()),
            Some(FsEntry::File { content: existing, .. }) => {
                *existing = content.to_vec();
                Ok(())
            }
            None => {
                entries.insert(
                    path,
                    FsEntry::File {
                        content: content.to_vec(),
                        mode: FILE_CREATE_MODE & !UMASK,
                    },
                );
                Ok(())
            }
        }
    }

    /// Read a file's contents.
    pub fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        let path = normalize_path(path);
        match self.read().get(&path) {
            Some(FsEntry::File { content, .. }) => Ok(content.clone()),
            Some(FsEntry::Directory { .. }) => Err(is_a_directory()),
            None => Err(not_found()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<PathBuf, FsEntry>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<PathBuf, FsEntry>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FileSystem for InMemoryFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        let path = normalize_path(path);
        let entries = self.read();
        match entries.get(&path) {
            Some(FsEntry::Directory { .. }) => {}
            Some(FsEntry::File { .. }) => return Err(not_a_directory()),
            None => return Err(not_found()),
        }

        Ok(entries
            .keys()
            .filter(|p| p.parent() == Some(path.as_path()))
            .filter_map(|p| p.file_name())
            .map(|name| name.to_os_string())
            .collect())
    }

    fn stat(&self, path: &Path) -> io::Result<Metadata> {
        let path = normalize_path(path);
        self.read()
            .get(&path)
            .map(FsEntry::metadata)
            .ok_or_else(not_found)
    }

    fn create_file(&self, path: &Path) -> io::Result<()> {
        self.write_file(path, &[])
    }

    fn mkdir(&self, path: &Path, mode: u32) -> io::Result<()> {
        let path = normalize_path(path);
        let mut entries = self.write();
        if entries.contains_key(&path) {
            return Err(IoError::new(ErrorKind::AlreadyExists, "File exists"));
        }
        require_parent_dir(&entries, &path)?;
        entries.insert(path, FsEntry::Directory { mode: mode & !UMASK });
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let path = normalize_path(path);
        let mut entries = self.write();
        match entries.get(&path) {
            Some(FsEntry::File { .. }) => {
                entries.remove(&path);
                Ok(())
            }
            Some(FsEntry::Directory { .. }) => Err(is_a_directory()),
            None => Err(not_found()),
        }
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let from = normalize_path(from);
        let to = normalize_path(to);
        let mut entries = self.write();

        let source_is_dir = match entries.get(&from) {
            Some(entry) => entry.is_dir(),
            None => return Err(not_found()),
        };
        if from == to {
            return Ok(());
        }
        if from.parent().is_none() || to.starts_with(&from) {
            return Err(IoError::new(ErrorKind::InvalidInput, "Invalid argument"));
        }
        require_parent_dir(&entries, &to)?;

        match entries.get(&to) {
            Some(FsEntry::Directory { .. }) if !source_is_dir => return Err(is_a_directory()),
            Some(FsEntry::File { .. }) if source_is_dir => return Err(not_a_directory()),
            Some(FsEntry::Directory { .. }) => {
                if entries.keys().any(|p| p.parent() == Some(to.as_path())) {
                    return Err(IoError::new(
                        ErrorKind::DirectoryNotEmpty,
                        "Directory not empty",
                    ));
                }
            }
            _ => {}
        }

        let moved: Vec<PathBuf> = entries
            .keys()
            .filter(|p| p.starts_with(&from))
            .cloned()
            .collect();
        for old in moved {
            if let Some(entry) = entries.remove(&old) {
                let suffix = old.strip_prefix(&from).unwrap_or(Path::new(""));
                let new = if suffix.as_os_str().is_empty() {
                    to.clone()
                } else {
                    to.join(suffix)
                };
                entries.insert(new, entry);
            }
        }
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let content = self.read_file(from)?;
        let to = normalize_path(to);
        let mut entries = self.write();
        require_parent_dir(&entries, &to)?;
        let len = content.len() as u64;
        match entries.get_mut(&to) {
            Some(FsEntry::Directory { .. }) => return Err(is_a_directory()),
            Some(FsEntry::File { content: existing, .. }) => *existing = content,
            None => {
                entries.insert(
                    to,
                    FsEntry::File {
                        content,
                        mode: FILE_CREATE_MODE & !UMASK,
                    },
                );
            }
        }
        Ok(len)
    }

    fn chmod(&self, path: &Path, mode: u32) -> io::Result<()> {
        let path = normalize_path(path);
        match self.write().get_mut(&path) {
            Some(FsEntry::File { mode: m, .. }) | Some(FsEntry::Directory { mode: m }) => {
                *m = mode & 0o7777;
                Ok(())
            }
            None => Err(not_found()),
        }
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        let path = normalize_path(path);
        if self.read().contains_key(&path) {
            Ok(path)
        } else {
            Err(not_found())
        }
    }
}

/// Resolve `.` and `..` components. `/..` stays at `/`.
fn normalize_path(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push("/");
            }
            Component::Normal(name) => {
                result.push(name);
            }
            Component::ParentDir => {
                result.pop();
            }
            Component::CurDir => {}
            Component::Prefix(_) => {}
        }
    }

    if result.as_os_str().is_empty() {
        result.push("/");
    }

    result
}

fn require_parent_dir(entries: &HashMap<PathBuf, FsEntry>, path: &Path) -> io::Result<()> {
    match path.parent().map(|parent| entries.get(parent)) {
        None | Some(Some(FsEntry::Directory { .. })) => Ok(()),
        Some(Some(FsEntry::File { .. })) => Err(not_a_directory()),
        Some(None) => Err(not_found()),
    }
}

fn not_found() -> IoError {
    IoError::new(ErrorKind::NotFound, "No such file or directory")
}

fn is_a_directory() -> IoError {
    IoError::new(ErrorKind::IsADirectory, "Is a directory")
}

fn not_a_directory() -> IoError {
    IoError::new(ErrorKind::NotADirectory, "Not a directory")
}
