mod cli;

use std::process;

use cli::commands::Command;
use cli::StackCli;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    let code = StackCli::from_args().execute();
    process::exit(code);
}
