//! Generic utility primitives with zero stylesheet knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `path` - Folder extraction, import resolution, visited-set keys

pub mod io;
pub mod path;
