mod generate;
mod verify;

use crate::Cli;
use crate::CommandResult;
use generate::GenerateCmd;
use verify::VerifyCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-sign")]
pub(crate) enum CommandEnum {
    /// Sign every named operation found in the given GraphQL files and write
    /// the resulting signature map as JSON.
    Generate(Box<GenerateCmd>),

    /// Check a single operation against a previously generated signature map.
    Verify(Box<VerifyCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Generate(cmd) => cmd.run(cli).await,
            Self::Verify(cmd) => cmd.run(cli).await,
        }
    }
}
