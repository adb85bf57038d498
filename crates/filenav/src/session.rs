//! Explorer session: working directory state and command dispatch

use std::io::{Error as IoError, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::command::{COMMAND_SUMMARY, Command};
use crate::error::{Error, IoResultExt, Result};
use crate::find::find_by_name;
use crate::fs::{FileSystem, RealFs};
use crate::limits::FindLimits;
use crate::listing::{Listing, list_directory};
use crate::path::resolve_path;
use crate::permissions::parse_mode;

/// Mode requested for new directories; the umask is applied by the OS.
const MKDIR_MODE: u32 = 0o777;

/// Result of executing a command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    /// Text to show the user
    pub stdout: String,
    /// Whether the session should end
    pub exit: bool,
}

impl ExecResult {
    /// Create a result that keeps the session running.
    pub fn ok(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            exit: false,
        }
    }

    /// Create a result that ends the session.
    pub fn quit(stdout: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            exit: true,
        }
    }
}

/// An explorer session.
///
/// Holds the working directory used to resolve relative arguments. The
/// process-wide current directory is never changed.
///
/// # Example
///
/// ```rust
/// use filenav::{InMemoryFs, Session};
/// use std::sync::Arc;
///
/// let mut session = Session::builder()
///     .fs(Arc::new(InMemoryFs::new()))
///     .cwd("/home/user")
///     .build()
///     .unwrap();
///
/// session.exec("touch notes.txt").unwrap();
/// let listing = session.listing().unwrap().to_string();
/// assert!(listing.contains("[FILE]notes.txt"));
/// ```
pub struct Session {
    fs: Arc<dyn FileSystem>,
    cwd: PathBuf,
    limits: FindLimits,
}

impl Session {
    /// Create a new SessionBuilder for customized configuration.
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// The current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// List the current working directory.
    pub fn listing(&self) -> Result<Listing> {
        list_directory(self.fs.as_ref(), &self.cwd)
    }

    /// Parse and execute one input line.
    pub fn exec(&mut self, line: &str) -> Result<ExecResult> {
        let command = Command::parse(line)?;
        self.execute(&command)
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: &Command) -> Result<ExecResult> {
        tracing::debug!(command = command.name(), cwd = %self.cwd.display(), "dispatch");
        match command {
            Command::Empty => Ok(ExecResult::default()),
            Command::Cd { dir } => self.cd(dir),
            Command::Touch { file } => {
                let path = self.resolve(file, "Usage: touch <file>")?;
                self.fs.create_file(&path).action("Error creating file")?;
                Ok(ExecResult::default())
            }
            Command::Mkdir { dir } => {
                let path = self.resolve(dir, "Usage: mkdir <dir>")?;
                self.fs
                    .mkdir(&path, MKDIR_MODE)
                    .action("Error creating directory")?;
                Ok(ExecResult::default())
            }
            Command::Cp { src, dest } => {
                let src = self.resolve(src, "Usage: cp <src> <dest>")?;
                let dest = self.resolve(dest, "Usage: cp <src> <dest>")?;
                let bytes = self.fs.copy(&src, &dest).map_err(Error::CopyFailed)?;
                tracing::debug!(bytes, "copied");
                Ok(ExecResult::default())
            }
            Command::Mv { src, dest } => {
                let src = self.resolve(src, "Usage: mv <src> <dest>")?;
                let dest = self.resolve(dest, "Usage: mv <src> <dest>")?;
                self.fs.rename(&src, &dest).action("Error moving file")?;
                Ok(ExecResult::default())
            }
            Command::Rm { file } => {
                let path = self.resolve(file, "Usage: rm <file>")?;
                self.fs.remove_file(&path).action("Error deleting file")?;
                Ok(ExecResult::default())
            }
            Command::Find { name } => Ok(ExecResult::ok(self.find(name))),
            Command::Chmod { mode, file } => {
                let mode = parse_mode(mode)?;
                let path = self.resolve(file, "Usage: chmod <mode> <filename>")?;
                self.fs
                    .chmod(&path, mode)
                    .action("Error changing permissions")?;
                Ok(ExecResult::default())
            }
            Command::Help => Ok(ExecResult::ok(format!("{}\n", COMMAND_SUMMARY))),
            Command::Quit => Ok(ExecResult::quit("Exiting.\n")),
        }
    }

    fn resolve(&self, token: &str, usage: &'static str) -> Result<PathBuf> {
        resolve_path(&self.cwd, token).ok_or(Error::Usage(usage))
    }

    fn cd(&mut self, dir: &str) -> Result<ExecResult> {
        const ACTION: &str = "Error changing directory";
        let target = self.resolve(dir, "Usage: cd <dir>")?;
        let meta = self.fs.stat(&target).action(ACTION)?;
        if !meta.file_type.is_dir() {
            return Err(Error::io(
                ACTION,
                IoError::new(ErrorKind::NotADirectory, "Not a directory"),
            ));
        }
        // Entering needs search permission, which `dir/.` resolution checks.
        self.fs.stat(&target.join(".")).action(ACTION)?;
        let canonical = self.fs.canonicalize(&target).action(ACTION)?;
        tracing::info!(from = %self.cwd.display(), to = %canonical.display(), "changed directory");
        self.cwd = canonical;
        Ok(ExecResult::default())
    }

    fn find(&self, name: &str) -> String {
        let mut out = format!("Searching for '{}' in {}...\n", name, self.cwd.display());
        for hit in find_by_name(self.fs.as_ref(), &self.cwd, name, &self.limits) {
            out.push_str(&format!("Found: {}\n", hit.display()));
        }
        out
    }
}

/// Builder for customized Session configuration.
#[derive(Default)]
pub struct SessionBuilder {
    fs: Option<Arc<dyn FileSystem>>,
    cwd: Option<PathBuf>,
    limits: FindLimits,
}

impl SessionBuilder {
    /// Set a custom filesystem. Defaults to [`RealFs`].
    pub fn fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = Some(fs);
        self
    }

    /// Set the starting working directory.
    ///
    /// Defaults to the process's current directory.
    pub fn cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set traversal limits for `find`.
    pub fn limits(mut self, limits: FindLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Build the Session.
    ///
    /// Fails if the starting directory cannot be resolved or is not a
    /// directory.
    pub fn build(self) -> Result<Session> {
        const ACTION: &str = "Error opening start directory";
        let fs = self.fs.unwrap_or_else(|| Arc::new(RealFs::new()));
        let cwd = match self.cwd {
            Some(cwd) => cwd,
            None => std::env::current_dir().action(ACTION)?,
        };
        if !fs.stat(&cwd).action(ACTION)?.file_type.is_dir() {
            return Err(Error::io(
                ACTION,
                IoError::new(ErrorKind::NotADirectory, "Not a directory"),
            ));
        }
        let cwd = fs.canonicalize(&cwd).action(ACTION)?;
        tracing::info!(cwd = %cwd.display(), "session started");
        Ok(Session {
            fs,
            cwd,
            limits: self.limits,
        })
    }
}
