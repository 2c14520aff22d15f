use std::path::PathBuf;

use crate::{model::evolution_result::EvolutionResult, util};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct InspectArg {
    /// Evolution result JSON file
    result: PathBuf,
}

pub(crate) fn run(arg: &InspectArg) -> anyhow::Result<()> {
    let result: EvolutionResult = util::read_json_file("evolution result", &arg.result)?;

    println!("Trained at: {}", result.trained_at);
    println!("Seed:       {}", result.seed);
    println!("Population: {}", result.population);
    println!("Best:       {}", result.best_genome);
    println!("Generations:");
    for summary in &result.history {
        println!(
            "  {:4}: best {:9.2}  mean {:9.2}  min {:9.2}  ({} ticks)",
            summary.generation,
            summary.best_fitness,
            summary.mean_fitness,
            summary.min_fitness,
            summary.ticks,
        );
    }
    Ok(())
}
