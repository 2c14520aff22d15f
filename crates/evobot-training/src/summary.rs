use serde::{Deserialize, Serialize};

use crate::genome::Genome;

/// Fitness statistics of a finished generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub generation: u32,
    /// Number of engine steps the generation lived for
    pub ticks: u64,
    pub best_fitness: f64,
    pub mean_fitness: f64,
    pub min_fitness: f64,
}

impl GenerationSummary {
    /// Summarizes `genomes`; returns `None` when there are none.
    #[must_use]
    pub fn new(generation: u32, ticks: u64, genomes: &[Genome]) -> Option<Self> {
        if genomes.is_empty() {
            return None;
        }
        let fitness = || genomes.iter().map(Genome::fitness);
        #[expect(clippy::cast_precision_loss)]
        let mean_fitness = fitness().sum::<f64>() / genomes.len() as f64;
        Some(Self {
            generation,
            ticks,
            best_fitness: fitness().fold(f64::NEG_INFINITY, f64::max),
            mean_fitness,
            min_fitness: fitness().fold(f64::INFINITY, f64::min),
        })
    }
}
