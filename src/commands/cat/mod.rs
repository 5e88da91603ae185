// src/commands/cat/mod.rs
use crate::commands::{Command, CommandResult, ShellState};
use crate::fs::{resolve_path, FsError};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, args: &[String], state: &ShellState) -> CommandResult {
        if args.is_empty() {
            return CommandResult::output("cat: missing file operand", state);
        }

        if args.len() > 1 {
            return CommandResult::output("cat: too many arguments", state);
        }

        let target = resolve_path(&state.current_directory, &args[0]);

        match state.file_system.read_file(&target) {
            Ok(content) => CommandResult::output(content, state),
            Err(FsError::IsDirectory { .. }) => {
                CommandResult::output(format!("cat: {}: Is a directory", args[0]), state)
            }
            Err(FsError::NotFound { .. }) => CommandResult::output(
                format!("cat: {}: No such file or directory", args[0]),
                state,
            ),
        }
    }
}
