//! CUV CLI - Command line tool for rendering client usage charts.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "cuv-cli",
    version,
    about = "Client usage stacked bar chart toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: cuv_cmd::Command,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    cuv_cmd::run(cli.command)
}
