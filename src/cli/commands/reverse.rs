//! Reverse command - print words in reverse order by pushing and popping them.

use bounded_stack::{Stack, StackError};
use log::info;
use structopt::StructOpt;

use super::util::{parse_limit, DEFAULT_LIMIT_STR};
use super::Command;

#[derive(StructOpt)]
pub struct ReverseArgs {
    #[structopt(short, long, default_value = DEFAULT_LIMIT_STR, parse(try_from_str = parse_limit))]
    pub limit: usize,
    pub words: Vec<String>,
}

impl Command for ReverseArgs {
    fn execute(self) -> i32 {
        match reverse_words(self.limit, self.words) {
            Ok(reversed) => {
                println!("{}", reversed.join(" "));
                0
            }
            Err(error) => {
                eprintln!("error: {}", error);
                1
            }
        }
    }
}

pub(crate) fn reverse_words(limit: usize, words: Vec<String>) -> Result<Vec<String>, StackError> {
    let mut stack = Stack::new(limit);
    for word in words {
        stack.push(word)?;
    }
    info!("reversing {} words", stack.len());

    let mut reversed = Vec::with_capacity(stack.len());
    while !stack.is_empty() {
        reversed.push(stack.must_pop());
    }
    Ok(reversed)
}
