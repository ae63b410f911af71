use clap::Parser;
use devpost_gateway::cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => devpost_gateway::cli::serve::run().await,
    }
}
