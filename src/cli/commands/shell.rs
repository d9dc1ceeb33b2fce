//! Shell command - interactive stack session on stdin/stdout.

use std::io;

use bounded_stack::shell::StackShell;
use bounded_stack::Stack;
use structopt::StructOpt;

use super::util::{parse_limit, DEFAULT_LIMIT_STR};
use super::Command;

#[derive(StructOpt)]
pub struct ShellArgs {
    #[structopt(short, long, default_value = DEFAULT_LIMIT_STR, parse(try_from_str = parse_limit))]
    pub limit: usize,
}

impl Command for ShellArgs {
    fn execute(self) -> i32 {
        let mut shell = StackShell::new(Stack::new(self.limit));
        let stdin = io::stdin();

        match shell.run(stdin.lock(), io::stdout()) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("io error: {}", error);
                1
            }
        }
    }
}
