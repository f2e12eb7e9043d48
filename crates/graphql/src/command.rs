use crate::Cli;
use crate::CommandResult;

/// A subcommand that can be dispatched from [`crate::commands::CommandEnum`].
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
