//! File System Module
//!
//! Virtual filesystem abstractions for the shell: path math, the query
//! trait, and the flat-map implementation.

pub mod flat_fs;
pub mod path;
pub mod types;

pub use flat_fs::FlatFs;
pub use path::{normalize_path, resolve_path};
pub use types::{FileSystem, FsError};
