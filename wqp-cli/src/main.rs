//! WQP CLI - Command line tool for querying water quality station data.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wqp-cli",
    version,
    about = "Water quality station data toolkit"
)]
struct Cli {
    #[command(flatten)]
    source: wqp_cmd::SourceArgs,

    #[command(subcommand)]
    command: wqp_cmd::Command,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wqp_cmd::run(&cli.source, cli.command).await
}
