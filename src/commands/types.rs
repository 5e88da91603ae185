// src/commands/types.rs
use std::fmt;
use std::sync::Arc;

use crate::fs::{normalize_path, FileSystem};

/// Interpreter state threaded through commands.
///
/// Cloning is cheap: the filesystem is shared behind an `Arc` and is never
/// mutated through it, so states cloned from one another coexist safely.
#[derive(Clone)]
pub struct ShellState {
    /// Always a normalized absolute path.
    pub current_directory: String,
    pub file_system: Arc<dyn FileSystem>,
}

impl ShellState {
    /// Create a state rooted at `/`.
    pub fn new(file_system: Arc<dyn FileSystem>) -> Self {
        Self::with_directory(file_system, "/")
    }

    /// Create a state with an explicit starting directory.
    pub fn with_directory(file_system: Arc<dyn FileSystem>, current_directory: &str) -> Self {
        Self {
            current_directory: normalize_path(current_directory),
            file_system,
        }
    }

    /// A copy of this state with a different current directory, sharing the
    /// same filesystem.
    pub fn chdir(&self, directory: &str) -> Self {
        Self {
            current_directory: directory.to_string(),
            file_system: Arc::clone(&self.file_system),
        }
    }
}

impl fmt::Debug for ShellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShellState")
            .field("current_directory", &self.current_directory)
            .finish_non_exhaustive()
    }
}

/// Command execution result
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// User-visible text; empty means no output, not an error.
    pub output: String,
    pub new_state: ShellState,
}

impl CommandResult {
    /// Result with output, state unchanged.
    pub fn output(output: impl Into<String>, state: &ShellState) -> Self {
        Self {
            output: output.into(),
            new_state: state.clone(),
        }
    }

    /// Result with no output, state unchanged.
    pub fn unchanged(state: &ShellState) -> Self {
        Self {
            output: String::new(),
            new_state: state.clone(),
        }
    }

    /// Result with no output and a new state.
    pub fn state(new_state: ShellState) -> Self {
        Self {
            output: String::new(),
            new_state,
        }
    }
}

/// Command trait
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, args: &[String], state: &ShellState) -> CommandResult;
}
