// src/commands/cd/mod.rs
use crate::commands::{Command, CommandResult, ShellState};
use crate::fs::resolve_path;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, args: &[String], state: &ShellState) -> CommandResult {
        if args.is_empty() {
            // cd with no args goes to root
            return CommandResult::state(state.chdir("/"));
        }

        if args.len() > 1 {
            return CommandResult::output("cd: too many arguments", state);
        }

        let target = resolve_path(&state.current_directory, &args[0]);

        if !state.file_system.exists(&target) {
            return CommandResult::output(
                format!("cd: {}: No such file or directory", args[0]),
                state,
            );
        }

        if !state.file_system.is_directory(&target) {
            return CommandResult::output(format!("cd: {}: Not a directory", args[0]), state);
        }

        tracing::debug!(directory = %target, "cd");
        CommandResult::state(state.chdir(&target))
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
        CdCommand.execute(&args, state)
    }

    #[test]
    fn test_cd_no_args_goes_to_root() {
        let state = sample_state().chdir("/docs");
        let result = run(vec![], &state);
        assert_eq!(result.output, "");
        assert_eq!(result.new_state.current_directory, "/");
    }

    #[test]
    fn test_cd_absolute() {
        let state = sample_state();
        let result = run(vec!["/docs"], &state);
        assert_eq!(result.output, "");
        assert_eq!(result.new_state.current_directory, "/docs");
    }

    #[test]
    fn test_cd_relative() {
        let state = sample_state();
        let result = run(vec!["docs"], &state);
        assert_eq!(result.output, "");
        assert_eq!(result.new_state.current_directory, "/docs");
    }

    #[test]
    fn test_cd_parent() {
        let state = sample_state().chdir("/docs");
        let result = run(vec![".."], &state);
        assert_eq!(result.new_state.current_directory, "/");
    }

    #[test]
    fn test_cd_dot_stays_put() {
        let state = sample_state().chdir("/docs");
        let result = run(vec!["."], &state);
        assert_eq!(result.output, "");
        assert_eq!(result.new_state.current_directory, "/docs");
    }

    #[test]
    fn test_cd_nonexistent() {
        let state = sample_state();
        let result = run(vec!["/nonexistent"], &state);
        assert_eq!(result.output, "cd: /nonexistent: No such file or directory");
        assert_eq!(result.new_state.current_directory, "/");
    }

    #[test]
    fn test_cd_into_file() {
        let state = sample_state();
        let result = run(vec!["/hello.txt"], &state);
        assert_eq!(result.output, "cd: /hello.txt: Not a directory");
        assert_eq!(result.new_state.current_directory, "/");
    }

    #[test]
    fn test_cd_too_many_arguments() {
        let state = sample_state();
        let result = run(vec!["/docs", "/src"], &state);
        assert_eq!(result.output, "cd: too many arguments");
        assert_eq!(result.new_state.current_directory, "/");
    }

    #[test]
    fn test_cd_error_message_echoes_raw_argument() {
        let state = sample_state().chdir("/docs");
        let result = run(vec!["../missing"], &state);
        assert_eq!(result.output, "cd: ../missing: No such file or directory");
    }

    #[test]
    fn test_cd_shares_filesystem() {
        let state = sample_state();
        let result = run(vec!["/docs"], &state);
        assert!(Arc::ptr_eq(&result.new_state.file_system, &state.file_system));
    }
}
