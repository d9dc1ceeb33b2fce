//! Line-oriented shell for driving a stack of strings from stdin or any reader

pub mod command_parser;
pub mod response_formatter;
pub mod session;

pub use command_parser::ShellCommand;
pub use response_formatter::ResponseFormatter;
pub use session::StackShell;
