pub mod shell;
pub mod stack;

pub use stack::error::StackError;
pub use stack::{Stack, DEFAULT_LIMIT};
