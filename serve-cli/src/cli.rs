use clap::Parser;

use crate::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "serve-cli")]
#[clap(about = "Index directories and manage stable file identifiers", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}
