//! Interpreter
//!
//! Tokenizes an input line and dispatches to the matching command handler.
//! The interpreter holds no state of its own; all continuity lives in the
//! `ShellState` value threaded by the caller.

use crate::commands::{create_default_registry, CommandRegistry, CommandResult, ShellState};

lazy_static::lazy_static! {
    static ref DEFAULT_REGISTRY: CommandRegistry = create_default_registry();
}

/// Interpret one input line against `state` using the builtin commands.
///
/// Never fails: bad arguments, missing paths and unknown commands all come
/// back as a diagnostic `output` with the state unchanged.
pub fn interpret(line: &str, state: &ShellState) -> CommandResult {
    interpret_with(&DEFAULT_REGISTRY, line, state)
}

/// Interpret one input line against `state`, dispatching through `registry`.
///
/// Tokenization is whitespace splitting only; quoting and escaping are not
/// interpreted.
pub fn interpret_with(registry: &CommandRegistry, line: &str, state: &ShellState) -> CommandResult {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return CommandResult::unchanged(state);
    }

    let mut tokens = trimmed.split_whitespace();
    let Some(command) = tokens.next() else {
        return CommandResult::unchanged(state);
    };
    let args: Vec<String> = tokens.map(String::from).collect();

    tracing::debug!(command, argc = args.len(), "dispatch");

    match registry.get(command) {
        Some(handler) => handler.execute(&args, state),
        None => CommandResult::output(format!("{}: command not found", command), state),
    }
}
