use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    #[error("the stack reached the limit")]
    Full,
    #[error("the stack is empty")]
    Empty,
}
