//! CLI command implementations.

/// A CLI command. `execute` returns the process exit code.
pub trait Command {
    fn execute(self) -> i32;
}

pub mod reverse;
pub mod shell;

// Shared utilities for commands
pub(crate) mod util;
