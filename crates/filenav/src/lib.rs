//! filenav - Interactive terminal file explorer
//!
//! The library holds everything except the terminal loop: directory listings
//! with permission strings, recursive search by name, and a [`Session`] that
//! parses command lines and runs one filesystem operation per line.
//!
//! # Example
//!
//! ```rust
//! use filenav::{InMemoryFs, Session};
//! use std::sync::Arc;
//!
//! # fn main() -> filenav::Result<()> {
//! let mut session = Session::builder()
//!     .fs(Arc::new(InMemoryFs::new()))
//!     .cwd("/home/user")
//!     .build()?;
//!
//! session.exec("mkdir docs")?;
//! session.exec("touch docs/readme")?;
//! let result = session.exec("find readme")?;
//! assert!(result.stdout.contains("Found: /home/user/docs/readme"));
//! # Ok(())
//! # }
//! ```

mod command;
mod error;
mod find;
mod fs;
mod limits;
mod listing;
mod path;
mod permissions;
mod session;

pub use command::{COMMAND_SUMMARY, Command};
pub use error::{Error, Result};
pub use find::find_by_name;
pub use fs::{FileSystem, FileType, InMemoryFs, Metadata, RealFs};
pub use limits::FindLimits;
pub use listing::{DirectoryEntry, ListEntry, Listing, list_directory};
pub use path::resolve_path;
pub use permissions::{format_permissions, parse_mode};
pub use session::{ExecResult, Session, SessionBuilder};
