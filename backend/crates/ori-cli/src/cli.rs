use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ori")]
#[command(about = "Ori account sign-up, sign-in, and session CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print JSON on a single line instead of pretty-printing it
    #[arg(long, global = true)]
    pub compact: bool,
}
