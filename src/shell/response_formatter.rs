//! Shell response formatting

use std::fmt::Display;

pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn format_ok() -> String {
        "ok".to_string()
    }

    /// Format an element, count or flag on its own line
    pub fn format_value<V: Display>(value: V) -> String {
        value.to_string()
    }

    pub fn format_error<E: Display>(error: E) -> String {
        format!("error: {}", error)
    }

    pub fn format_unknown(line: &str) -> String {
        format!("unknown command: {}", line)
    }

    pub fn format_help() -> String {
        "commands:\n\
         \x20 push <value>  place <value> on top of the stack\n\
         \x20 pop           remove and print the top value\n\
         \x20 peek          print the top value without removing it\n\
         \x20 len           print the number of values held\n\
         \x20 limit         print the maximum number of values\n\
         \x20 empty         print whether the stack is empty\n\
         \x20 full          print whether the stack is full\n\
         \x20 quit, exit    leave the shell"
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stack::error::StackError;

    #[test]
    fn test_format_error() {
        assert_eq!(
            "error: the stack is empty",
            ResponseFormatter::format_error(StackError::Empty)
        );
        assert_eq!(
            "error: push requires a value",
            ResponseFormatter::format_error("push requires a value")
        );
    }

    #[test]
    fn test_format_value() {
        assert_eq!("3", ResponseFormatter::format_value(3usize));
        assert_eq!("true", ResponseFormatter::format_value(true));
        assert_eq!("hello", ResponseFormatter::format_value("hello"));
    }

    #[test]
    fn test_format_help_lists_every_command() {
        let help = ResponseFormatter::format_help();
        for command in &[
            "push", "pop", "peek", "len", "limit", "empty", "full", "quit", "exit",
        ] {
            assert!(help.contains(command), "help is missing `{}`", command);
        }
    }
}
