//! File System Types
//!
//! Core types and the query trait for the virtual file system.

use thiserror::Error;

/// File system errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FsError {
    #[error("ENOENT: no such file or directory '{path}'")]
    NotFound { path: String },

    #[error("EISDIR: illegal operation on a directory '{path}'")]
    IsDirectory { path: String },
}

/// Abstract filesystem query interface that can be implemented by different
/// backends (flat map today, a path trie if key-set scans ever matter).
///
/// All operations normalize their input path first and are total except
/// `read_file`, the single fallible query.
pub trait FileSystem: Send + Sync {
    /// Check whether a path exists as a file or an inferred directory.
    fn exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory. A literal file key is never a
    /// directory, even when descendant keys exist.
    fn is_directory(&self, path: &str) -> bool;

    /// Immediate child names of a directory, deduplicated and sorted.
    /// Unknown directories yield an empty list.
    fn list_children(&self, path: &str) -> Vec<String>;

    /// Read the contents of a file.
    fn read_file(&self, path: &str) -> Result<String, FsError>;
}
