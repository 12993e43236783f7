use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "todo-tui")]
#[command(about = "Terminal to-do list with a stopwatch and timer")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run against a todo store
    Run {
        /// Store base URL, overrides the config file
        #[arg(long)]
        api_url: Option<String>,
    },
    /// Run against an in-process store seeded with sample items
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}
