//! Shell command parsing from input lines

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

static PUSH_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^push(?:\s+(.*))?$").expect("push pattern is valid"));

/// Commands the shell understands
#[derive(Debug, PartialEq, Clone)]
pub enum ShellCommand {
    /// Push the rest of the line onto the stack
    Push(String),
    Pop,
    Peek,
    Len,
    Limit,
    /// Ask whether the stack is empty
    IsEmpty,
    /// Ask whether the stack is full
    IsFull,
    Help,
    Quit,
    /// A blank line
    Empty,
    /// Unknown or unimplemented command
    Unknown(String),
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(ShellCommand::Empty);
        }

        if let Some(caps) = PUSH_PATTERN.captures(s) {
            return match caps.get(1).map(|value| value.as_str().trim()) {
                Some(value) if !value.is_empty() => Ok(ShellCommand::Push(value.to_string())),
                _ => Err("push requires a value".to_string()),
            };
        }

        match s.to_lowercase().as_str() {
            "pop" => Ok(ShellCommand::Pop),
            "peek" => Ok(ShellCommand::Peek),
            "len" => Ok(ShellCommand::Len),
            "limit" => Ok(ShellCommand::Limit),
            "empty" => Ok(ShellCommand::IsEmpty),
            "full" => Ok(ShellCommand::IsFull),
            "help" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            _ => Ok(ShellCommand::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_push() {
        assert_eq!(
            "push hello".parse::<ShellCommand>().unwrap(),
            ShellCommand::Push("hello".to_string())
        );
    }

    #[test]
    fn test_parse_push_keeps_inner_whitespace() {
        assert_eq!(
            "  PUSH   hello   world  ".parse::<ShellCommand>().unwrap(),
            ShellCommand::Push("hello   world".to_string())
        );
    }

    #[test]
    fn test_parse_push_without_value() {
        assert!("push".parse::<ShellCommand>().is_err());
        assert!("push   ".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn test_parse_pusher_is_unknown() {
        assert_eq!(
            "pusher".parse::<ShellCommand>().unwrap(),
            ShellCommand::Unknown("pusher".to_string())
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!("pop".parse::<ShellCommand>().unwrap(), ShellCommand::Pop);
        assert_eq!("Peek".parse::<ShellCommand>().unwrap(), ShellCommand::Peek);
        assert_eq!("len".parse::<ShellCommand>().unwrap(), ShellCommand::Len);
        assert_eq!("limit".parse::<ShellCommand>().unwrap(), ShellCommand::Limit);
        assert_eq!("empty".parse::<ShellCommand>().unwrap(), ShellCommand::IsEmpty);
        assert_eq!("full".parse::<ShellCommand>().unwrap(), ShellCommand::IsFull);
        assert_eq!("help".parse::<ShellCommand>().unwrap(), ShellCommand::Help);
        assert_eq!("quit".parse::<ShellCommand>().unwrap(), ShellCommand::Quit);
        assert_eq!("exit".parse::<ShellCommand>().unwrap(), ShellCommand::Quit);
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!("".parse::<ShellCommand>().unwrap(), ShellCommand::Empty);
        assert_eq!(" \t\n".parse::<ShellCommand>().unwrap(), ShellCommand::Empty);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "shuffle".parse::<ShellCommand>().unwrap(),
            ShellCommand::Unknown("shuffle".to_string())
        );
    }
}
