//! WFD CLI - Command line weather forecast dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wfd-cli",
    version,
    about = "Weather forecast dashboard over daily forecast marts"
)]
struct Cli {
    #[command(subcommand)]
    command: wfd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    wfd_cmd::run(cli.command).await
}
