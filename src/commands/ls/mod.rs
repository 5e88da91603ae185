// src/commands/ls/mod.rs
use crate::commands::{Command, CommandResult, ShellState};
use crate::fs::resolve_path;

pub struct LsCommand;

/// Final path segment, falling back to the path itself (covers `/`).
fn basename(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => path,
    }
}

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, args: &[String], state: &ShellState) -> CommandResult {
        if args.len() > 1 {
            return CommandResult::output("ls: too many arguments", state);
        }

        let target = match args.first() {
            Some(arg) => resolve_path(&state.current_directory, arg),
            None => state.current_directory.clone(),
        };

        if !state.file_system.exists(&target) {
            // Echo the user's own spelling when an argument was given.
            let shown = args.first().map(String::as_str).unwrap_or(&target);
            return CommandResult::output(
                format!("ls: {}: No such file or directory", shown),
                state,
            );
        }

        if !state.file_system.is_directory(&target) {
            return CommandResult::output(basename(&target), state);
        }

        let children = state.file_system.list_children(&target);
        CommandResult::output(children.join("\n"), state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::FlatFs;
    use std::sync::Arc;

    fn sample_state() -> ShellState {
        ShellState::new(Arc::new(FlatFs::sample()))
    }

    fn run(args: Vec<&str>, state: &ShellState) -> CommandResult {
        let args: Vec<String> = args.into_iter().map(String::from).collect();
        LsCommand.execute(&args, state)
    }

    #[test]
    fn test_ls_current_directory() {
        let state = sample_state();
        let result = run(vec![], &state);
        assert_eq!(result.output, "docs\nhello.txt\nsrc");
        assert_eq!(result.new_state.current_directory, "/");
    }

    #[test]
    fn test_ls_specific_directory() {
        let state = sample_state();
        let result = run(vec!["/docs"], &state);
        assert_eq!(result.output, "guide.txt\nreadme.md");
    }

    #[test]
    fn test_ls_relative_path() {
        let state = sample_state().chdir("/docs");
        let result = run(vec!["../src"], &state);
        assert_eq!(result.output, "main.js\nutils.js");
    }

    #[test]
    fn test_ls_file_shows_basename() {
        let state = sample_state();
        let result = run(vec!["/hello.txt"], &state);
        assert_eq!(result.output, "hello.txt");

        let state = sample_state().chdir("/docs");
        let result = run(vec!["readme.md"], &state);
        assert_eq!(result.output, "readme.md");
    }

    #[test]
    fn test_ls_nonexistent() {
        let state = sample_state();
        let result = run(vec!["/nonexistent"], &state);
        assert_eq!(result.output, "ls: /nonexistent: No such file or directory");
    }

    #[test]
    fn test_ls_too_many_arguments() {
        let state = sample_state();
        let result = run(vec!["/docs", "/src"], &state);
        assert_eq!(result.output, "ls: too many arguments");
    }

    #[test]
    fn test_ls_never_changes_state() {
        let state = sample_state().chdir("/docs");
        for args in [vec![], vec!["/src"], vec!["/nope"], vec!["a", "b"]] {
            let result = run(args, &state);
            assert_eq!(result.new_state.current_directory, "/docs");
        }
    }
}
