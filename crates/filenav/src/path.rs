//! Resolution of user-typed path arguments

use std::path::{Path, PathBuf};

/// Resolve a command argument against the working directory.
///
/// Returns `None` for an empty token so callers can report a missing
/// argument. Absolute tokens are returned unchanged; relative ones are joined
/// onto `cwd`. No normalization is done: `.` and `..` segments and symbolic
/// links are left for the operating system to interpret.
///
/// # Example
///
/// ```rust
/// use filenav::resolve_path;
/// use std::path::{Path, PathBuf};
///
/// let cwd = Path::new("/home/user");
/// assert_eq!(resolve_path(cwd, "/etc/passwd"), Some(PathBuf::from("/etc/passwd")));
/// assert_eq!(resolve_path(cwd, "notes.txt"), Some(PathBuf::from("/home/user/notes.txt")));
/// assert_eq!(resolve_path(cwd, ""), None);
/// ```
pub fn resolve_path(cwd: &Path, token: &str) -> Option<PathBuf> {
    if token.is_empty() {
        return None;
    }
    let path = Path::new(token);
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(cwd.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_ignores_cwd() {
        for cwd in ["/", "/cwd", "/some/deep/dir"] {
            assert_eq!(
                resolve_path(Path::new(cwd), "/abs/path"),
                Some(PathBuf::from("/abs/path"))
            );
        }
    }

    #[test]
    fn test_relative_joins_cwd() {
        assert_eq!(
            resolve_path(Path::new("/cwd"), "rel"),
            Some(PathBuf::from("/cwd/rel"))
        );
        assert_eq!(
            resolve_path(Path::new("/cwd"), "a/b"),
            Some(PathBuf::from("/cwd/a/b"))
        );
    }

    #[test]
    fn test_no_normalization() {
        let resolved = resolve_path(Path::new("/cwd"), "../x/./y").unwrap();
        assert_eq!(resolved.to_str(), Some("/cwd/../x/./y"));
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(resolve_path(Path::new("/cwd"), ""), None);
    }
}
