//! Flat-Map File System Implementation
//!
//! The virtual filesystem is a flat mapping from absolute path strings to
//! file content strings. Directories are not stored; a path is a directory
//! when at least one key lies underneath it, so empty directories cannot
//! exist.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::path::normalize_path;
use super::types::{FileSystem, FsError};

/// In-memory flat filesystem.
///
/// Keys are unique, absolute, slash-separated and never carry a trailing
/// slash. Serializes as a plain JSON object of path -> content, which is
/// also the CLI fixture format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatFs {
    files: BTreeMap<String, String>,
}

impl FlatFs {
    /// Create an empty filesystem (only `/` exists).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from `(path, content)` pairs. Paths are normalized on entry.
    pub fn with_files<I, P, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: Into<String>,
        C: Into<String>,
    {
        Self {
            files: files
                .into_iter()
                .map(|(p, c)| (normalize_path(&p.into()), c.into()))
                .collect(),
        }
    }

    /// The sample layout used by the demo binary and tests.
    pub fn sample() -> Self {
        Self::with_files([
            ("/hello.txt", "Hello, world!"),
            ("/docs/readme.md", "# Documentation\n\nThis is a sample file."),
            ("/docs/guide.txt", "User guide content here."),
            ("/src/main.js", "console.log(\"Hello from main.js\");"),
            ("/src/utils.js", "export function helper() { return \"help\"; }"),
        ])
    }

    /// Number of files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl FileSystem for FlatFs {
    fn exists(&self, path: &str) -> bool {
        let normalized = normalize_path(path);
        if normalized == "/" || self.files.contains_key(&normalized) {
            return true;
        }
        let prefix = format!("{}/", normalized);
        self.files.keys().any(|k| k.starts_with(&prefix))
    }

    fn is_directory(&self, path: &str) -> bool {
        let normalized = normalize_path(path);
        // A literal key is a file, never a directory.
        if self.files.contains_key(&normalized) {
            return false;
        }
        if normalized == "/" {
            return true;
        }
        let prefix = format!("{}/", normalized);
        self.files.keys().any(|k| k.starts_with(&prefix))
    }

    fn list_children(&self, path: &str) -> Vec<String> {
        let normalized = normalize_path(path);
        let mut children = BTreeSet::new();

        for key in self.files.keys() {
            let rest = if normalized == "/" {
                key.strip_prefix('/')
            } else {
                key.strip_prefix(&normalized)
                    .and_then(|r| r.strip_prefix('/'))
            };
            let Some(rest) = rest else { continue };
            if let Some(name) = rest.split('/').next() {
                if !name.is_empty() {
                    children.insert(name.to_string());
                }
            }
        }

        children.into_iter().collect()
    }

    fn read_file(&self, path: &str) -> Result<String, FsError> {
        let normalized = normalize_path(path);
        if let Some(content) = self.files.get(&normalized) {
            return Ok(content.clone());
        }
        if self.is_directory(&normalized) {
            return Err(FsError::IsDirectory { path: normalized });
        }
        Err(FsError::NotFound { path: normalized })
    }
}
