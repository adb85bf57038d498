//! Host filesystem backed by `std::fs`

use std::ffi::OsString;
use std::fs::{self, DirBuilder, File, Permissions};
use std::io;
use std::os::unix::fs::{DirBuilderExt, PermissionsExt};
use std::path::{Path, PathBuf};

use super::traits::{FileSystem, FileType, Metadata};

/// The host filesystem.
///
/// Every call goes straight to the operating system and blocks until it
/// returns. Symbolic links are followed wherever the OS follows them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl RealFs {
    /// Create a handle to the host filesystem.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<OsString>> {
        fs::read_dir(path)?
            .map(|entry| entry.map(|e| e.file_name()))
            .collect()
    }

    fn stat(&self, path: &Path) -> io::Result<Metadata> {
        let meta = fs::metadata(path)?;
        let file_type = if meta.is_dir() {
            FileType::Directory
        } else {
            FileType::File
        };
        Ok(Metadata {
            file_type,
            mode: meta.permissions().mode(),
        })
    }

    fn create_file(&self, path: &Path) -> io::Result<()> {
        File::create(path).map(drop)
    }

    fn mkdir(&self, path: &Path, mode: u32) -> io::Result<()> {
        DirBuilder::new().mode(mode).create(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let mut src = File::open(from)?;
        let mut dest = File::create(to)?;
        io::copy(&mut src, &mut dest)
    }

    fn chmod(&self, path: &Path, mode: u32) -> io::Result<()> {
        fs::set_permissions(path, Permissions::from_mode(mode))
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    #[test]
    fn test_read_dir_excludes_dot_entries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), b"a").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut names = RealFs.read_dir(dir.path()).unwrap();
        names.sort();
        assert_eq!(names, vec!["a.txt", "sub"]);
    }

    #[test]
    fn test_stat_reports_type_and_mode() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"hello").unwrap();
        fs::set_permissions(&file, Permissions::from_mode(0o640)).unwrap();

        let meta = RealFs.stat(&file).unwrap();
        assert!(!meta.file_type.is_dir());
        assert_eq!(meta.mode & 0o777, 0o640);

        let meta = RealFs.stat(dir.path()).unwrap();
        assert!(meta.file_type.is_dir());
    }

    #[test]
    fn test_read_dir_keeps_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let raw = OsStr::from_bytes(b"bad\xffname");
        fs::create_dir(dir.path().join(raw)).unwrap();

        let names = RealFs.read_dir(dir.path()).unwrap();
        assert_eq!(names, vec![raw.to_os_string()]);
        assert!(RealFs.stat(&dir.path().join(&names[0])).unwrap().file_type.is_dir());
    }

    #[test]
    fn test_create_file_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"old content").unwrap();

        RealFs.create_file(&file).unwrap();
        assert_eq!(fs::read(&file).unwrap(), b"");
    }

    #[test]
    fn test_copy_missing_source_keeps_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("dest");
        fs::write(&dest, b"keep me").unwrap();

        let err = RealFs.copy(&dir.path().join("missing"), &dest).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(fs::read(&dest).unwrap(), b"keep me");
    }

    #[test]
    fn test_copy_overwrites_destination() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("src");
        let dest = dir.path().join("dest");
        fs::write(&src, b"new").unwrap();
        fs::write(&dest, b"older and longer").unwrap();

        assert_eq!(RealFs.copy(&src, &dest).unwrap(), 3);
        assert_eq!(fs::read(&dest).unwrap(), b"new");
    }

    #[test]
    fn test_remove_file_rejects_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        assert!(RealFs.remove_file(&sub).is_err());
        assert!(sub.is_dir());
    }
}
