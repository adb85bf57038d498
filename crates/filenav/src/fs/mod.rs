//! Filesystem access for filenav
//!
//! Provides a blocking filesystem trait and implementations:
//! - `RealFs`: the host filesystem via `std::fs`
//! - `InMemoryFs`: simple in-memory filesystem

mod memory;
mod real;
mod traits;

pub use memory::InMemoryFs;
pub use real::RealFs;
pub use traits::{FileSystem, FileType, Metadata};
