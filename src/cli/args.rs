//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{reverse::ReverseArgs, shell::ShellArgs};

#[derive(StructOpt)]
#[structopt(name = "stack", about = "A bounded last-in-first-out stack")]
pub enum StackCli {
    #[structopt(
        name = "shell",
        about = "Start an interactive shell over a stack of strings holding at most `--limit` values (default: 1000). Reads one command per line from stdin; type `help` for the list of commands."
    )]
    Shell(ShellArgs),
    #[structopt(
        name = "reverse",
        about = "Push every given word onto a stack holding at most `--limit` values (default: 1000), then pop them all and print them in reverse order."
    )]
    Reverse(ReverseArgs),
}

impl crate::cli::commands::Command for StackCli {
    fn execute(self) -> i32 {
        match self {
            Self::Shell(cmd) => cmd.execute(),
            Self::Reverse(cmd) => cmd.execute(),
        }
    }
}
