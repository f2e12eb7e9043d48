mod glue;

use crate::Cli;
use crate::CommandResult;
use glue::GlueCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql")]
pub(crate) enum CommandEnum {
    /// Glue a directory of schema fragments into a single schema.
    Glue(Box<GlueCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Glue(cmd) => cmd.run(cli).await
        }
    }
}
