//! Error types for filenav
//!
//! Every operation returns one of these instead of printing. The presentation
//! layer (the REPL) turns them into text with `Display` and keeps looping, so
//! each message is written to be shown to the user as-is.

use thiserror::Error;

/// Result type alias using filenav's Error.
pub type Result<T> = std::result::Result<T, Error>;

/// filenav error types.
#[derive(Error, Debug)]
pub enum Error {
    /// A command was given fewer arguments than it requires.
    ///
    /// Carries the usage text for the command. No filesystem call is made.
    #[error("{0}")]
    Usage(&'static str),

    /// The first token did not name a known command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// A chmod mode string was not a base-8 number.
    #[error("Error: Invalid mode. Use octal numbers (e.g., 755, 644).")]
    InvalidMode(String),

    /// Source or destination of a copy could not be opened.
    #[error("File copy failed.")]
    CopyFailed(#[source] std::io::Error),

    /// An operating system call failed.
    ///
    /// `action` describes what was being attempted, e.g. "Error moving file".
    #[error("{action}: {source}")]
    Io {
        action: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Wrap an I/O error with a description of the failed action.
    pub fn io(action: &'static str, source: std::io::Error) -> Self {
        Self::Io { action, source }
    }
}

/// Attach an action description to `std::io::Result` values.
pub(crate) trait IoResultExt<T> {
    fn action(self, action: &'static str) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn action(self, action: &'static str) -> Result<T> {
        self.map_err(|e| Error::io(action, e))
    }
}
