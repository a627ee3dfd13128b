use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use limbadd_cli::{
    commands::{LimbaddBench, LimbaddInfo, LimbaddVerify},
    logging, LIMBADD_VERSION_MESSAGE,
};

#[derive(Parser)]
#[command(
    name = "limbadd",
    bin_name = "limbadd",
    version = LIMBADD_VERSION_MESSAGE,
    about = "CLI tool for the limbadd addition kernel",
    long_about = "Verifies and benchmarks big integer limb addition against num-bigint."
)]
pub struct Cli {
    /// Verbosity (-v, -vv)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    Verify(LimbaddVerify),
    Bench(LimbaddBench),
    Info(LimbaddInfo),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Command::Verify(cmd) => {
            cmd.run().context("Error executing Verify command")?;
        }
        Command::Bench(cmd) => {
            cmd.run().context("Error executing Bench command")?;
        }
        Command::Info(cmd) => {
            cmd.run().context("Error executing Info command")?;
        }
    }

    Ok(())
}
