use clap::Subcommand;

use crate::error::AppError;

mod list;
mod rename;

#[derive(Debug, Subcommand)]
pub enum Commands {
    List(list::List),
    Rename(rename::Rename),
}

impl Commands {
    pub fn run(&self) -> Result<(), AppError> {
        match self {
            Commands::List(list) => list.run(),
            Commands::Rename(rename) => rename.run(),
        }
    }
}
