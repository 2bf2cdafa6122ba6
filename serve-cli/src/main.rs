use clap::Parser;

mod cli;
mod commands;
mod error;
mod util;

use crate::cli::Cli;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(err) = cli.command.run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
