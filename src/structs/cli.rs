use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "pulsedash")]
#[clap(about = "Analytics dashboard client", long_about = None)]
pub struct Cli {
    /// Log debug output
    #[clap(long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
