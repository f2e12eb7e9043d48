use clap::CommandFactory;
use crate::commands;

/// Utilities for assembling GraphQL schemas.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        conflicts_with="verbose",
        global=true,
        help="Only log errors.",
        long,
        short='q',
    )]
    pub quiet: bool,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
