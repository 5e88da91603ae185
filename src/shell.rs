//! Shell Environment
//!
//! Stateful convenience wrapper around the pure `interpret` function. Ties
//! together the command registry, the filesystem and the threaded state for
//! callers that want a read-eval-print driver.

use std::sync::Arc;

use crate::commands::{create_default_registry, CommandRegistry, ShellState};
use crate::fs::{FileSystem, FlatFs};
use crate::interpreter::interpret_with;

/// Options for creating a shell environment.
#[derive(Default)]
pub struct ShellOptions {
    /// Starting directory (defaults to `/`)
    pub cwd: Option<String>,
    /// Filesystem instance (defaults to the sample layout)
    pub fs: Option<Arc<dyn FileSystem>>,
}

/// A shell session: a command registry plus the current state.
pub struct Shell {
    registry: CommandRegistry,
    state: ShellState,
}

impl Shell {
    /// Create a new shell session.
    pub fn new(options: ShellOptions) -> Self {
        let fs: Arc<dyn FileSystem> = options.fs.unwrap_or_else(|| Arc::new(FlatFs::sample()));
        let cwd = options.cwd.unwrap_or_else(|| "/".to_string());
        tracing::debug!(cwd = %cwd, "shell session created");
        Self {
            registry: create_default_registry(),
            state: ShellState::with_directory(fs, &cwd),
        }
    }

    /// Run one input line, advancing the session state.
    pub fn run_line(&mut self, line: &str) -> String {
        let result = interpret_with(&self.registry, line, &self.state);
        self.state = result.new_state;
        result.output
    }

    /// Current session state.
    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Current working directory.
    pub fn cwd(&self) -> &str {
        &self.state.current_directory
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(ShellOptions::default())
    }
}
