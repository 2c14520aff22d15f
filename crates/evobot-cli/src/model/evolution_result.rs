use chrono::{DateTime, Utc};
use evobot_training::{GaParams, GenerationSummary, Genome};
use serde::{Deserialize, Serialize};

/// Outcome of an evolution run, saved as JSON.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvolutionResult {
    pub trained_at: DateTime<Utc>,
    pub seed: u64,
    pub population: usize,
    pub params: GaParams,
    pub best_genome: Genome,
    pub history: Vec<GenerationSummary>,
}
