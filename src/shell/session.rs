//! Shell session: reads commands line by line and applies them to a stack

use std::io::{self, BufRead, Write};

use log::{info, warn};

use crate::stack::Stack;

use super::command_parser::ShellCommand;
use super::response_formatter::ResponseFormatter;

/// An interactive session over a `Stack<String>`
pub struct StackShell {
    stack: Stack<String>,
    should_quit: bool,
}

impl Default for StackShell {
    fn default() -> Self {
        Self::new(Stack::new_default())
    }
}

impl StackShell {
    pub fn new(stack: Stack<String>) -> Self {
        Self {
            stack,
            should_quit: false,
        }
    }

    pub fn stack(&self) -> &Stack<String> {
        &self.stack
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Execute a command and return the response line, if any
    pub fn execute_command(&mut self, command: ShellCommand) -> Option<String> {
        match command {
            ShellCommand::Push(value) => match self.stack.push(value) {
                Ok(()) => Some(ResponseFormatter::format_ok()),
                Err(e) => Some(ResponseFormatter::format_error(e)),
            },

            ShellCommand::Pop => match self.stack.pop() {
                Ok(value) => Some(ResponseFormatter::format_value(value)),
                Err(e) => Some(ResponseFormatter::format_error(e)),
            },

            ShellCommand::Peek => match self.stack.peek() {
                Ok(value) => Some(ResponseFormatter::format_value(value)),
                Err(e) => Some(ResponseFormatter::format_error(e)),
            },

            ShellCommand::Len => Some(ResponseFormatter::format_value(self.stack.len())),
            ShellCommand::Limit => Some(ResponseFormatter::format_value(self.stack.limit())),
            ShellCommand::IsEmpty => Some(ResponseFormatter::format_value(self.stack.is_empty())),
            ShellCommand::IsFull => Some(ResponseFormatter::format_value(self.stack.is_full())),
            ShellCommand::Help => Some(ResponseFormatter::format_help()),

            ShellCommand::Quit => {
                self.should_quit = true;
                None
            }

            ShellCommand::Empty => None,

            ShellCommand::Unknown(line) => {
                warn!("unknown shell command: {}", line);
                Some(ResponseFormatter::format_unknown(&line))
            }
        }
    }

    /// Run the read-execute loop until `quit` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        info!("shell started with a limit of {}", self.stack.limit());

        for line in input.lines() {
            let line = line?;

            let response = match line.parse::<ShellCommand>() {
                Ok(command) => self.execute_command(command),
                Err(e) => Some(ResponseFormatter::format_error(e)),
            };

            if let Some(response) = response {
                writeln!(output, "{}", response)?;
                output.flush()?;
            }

            if self.should_quit() {
                break;
            }
        }

        info!("shell stopped holding {} values", self.stack.len());
        Ok(())
    }
}
