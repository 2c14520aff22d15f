use clap::{Parser, Subcommand};

use self::{default_config::DefaultConfigArg, evolve::EvolveArg, inspect::InspectArg};

mod default_config;
mod evolve;
mod inspect;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Evolve obstacle-avoiding robots with the genetic algorithm
    Evolve(#[clap(flatten)] EvolveArg),
    /// Print the default GA parameters as JSON
    DefaultConfig(#[clap(flatten)] DefaultConfigArg),
    /// Show a saved evolution result
    Inspect(#[clap(flatten)] InspectArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode {
        Mode::Evolve(arg) => evolve::run(&arg)?,
        Mode::DefaultConfig(arg) => default_config::run(&arg)?,
        Mode::Inspect(arg) => inspect::run(&arg)?,
    }
    Ok(())
}
