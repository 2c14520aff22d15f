use std::path::PathBuf;

use anyhow::Context as _;
use chrono::Utc;
use evobot_training::{GaEngine, GaParams};
use evobot_world::{Obstacle, Point, SceneLayout};
use rand::Rng as _;
use tracing::info;

use crate::{
    model::evolution_result::EvolutionResult,
    util::{self, Output},
};

const DEFAULT_TICK_LIMIT: u64 = 3000;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EvolveArg {
    /// Number of robots per generation
    #[arg(long, default_value_t = 20)]
    population: usize,
    /// Number of generations to run to completion
    #[arg(long, default_value_t = 30)]
    generations: usize,
    /// Random seed (drawn at random when omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Scene layout JSON file (default: walled 800x600 arena)
    #[arg(long)]
    scene: Option<PathBuf>,
    /// GA parameters JSON file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Maximum ticks per generation [default: from config, else 3000]
    #[arg(long)]
    tick_limit: Option<u64>,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &EvolveArg) -> anyhow::Result<()> {
    let EvolveArg {
        population,
        generations,
        seed,
        scene,
        config,
        tick_limit,
        output,
    } = arg;

    let layout = match scene {
        Some(path) => util::read_json_file("scene layout", path)?,
        None => default_layout(),
    };
    let scene = layout.build().context("Invalid scene layout")?;

    let mut params: GaParams = match config {
        Some(path) => util::read_json_file("GA parameters", path)?,
        None => GaParams::default(),
    };
    params.generation_tick_limit = tick_limit
        .or(params.generation_tick_limit)
        .or(Some(DEFAULT_TICK_LIMIT));

    let seed = seed.unwrap_or_else(|| rand::rng().random());
    info!(seed, population, generations, "starting evolution");

    let mut engine = GaEngine::new(scene, *population, params, seed)
        .context("Invalid GA configuration")?;
    let mut reported = 0;
    while engine.history().len() < *generations {
        engine.step()?;
        for summary in &engine.history()[reported..] {
            eprintln!(
                "Generation #{:<4} best {:9.2}  mean {:9.2}  min {:9.2}  ({} ticks)",
                summary.generation,
                summary.best_fitness,
                summary.mean_fitness,
                summary.min_fitness,
                summary.ticks,
            );
        }
        reported = engine.history().len();
    }

    let best_genome = engine
        .best_genome()
        .cloned()
        .context("No generation completed")?;
    eprintln!("Best genome: {best_genome}");

    let result = EvolutionResult {
        trained_at: Utc::now(),
        seed,
        population: *population,
        params: engine.params().clone(),
        best_genome,
        history: engine.history().to_vec(),
    };
    Output::save_json(&result, output.clone())?;

    if let Some(path) = output {
        eprintln!("Result saved to {}", path.display());
    }
    Ok(())
}

/// A walled arena with a few obstacles around the start position.
fn default_layout() -> SceneLayout {
    SceneLayout {
        width: 800.0,
        height: 600.0,
        walls: true,
        obstacles: vec![
            Obstacle::circle(Point::new(200.0, 150.0), 40.0),
            Obstacle::circle(Point::new(620.0, 420.0), 50.0),
            Obstacle::circle(Point::new(560.0, 130.0), 30.0),
            Obstacle::rect(Point::new(150.0, 380.0), Point::new(300.0, 420.0)),
            Obstacle::rect(Point::new(480.0, 250.0), Point::new(510.0, 350.0)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use evobot_training::params::ROBOT_SIZE;

    use super::*;

    #[test]
    fn test_default_layout_leaves_start_free() {
        let scene = default_layout().build().unwrap();
        let center = scene.center();
        assert!(
            scene
                .obstacles()
                .all(|o| !o.intersects_circle(center, ROBOT_SIZE / 2.0))
        );
    }

    #[test]
    fn test_evolution_result_roundtrip_fields() {
        let scene = default_layout().build().unwrap();
        let params = GaParams {
            generation_tick_limit: Some(50),
            ..GaParams::default()
        };
        let mut engine = GaEngine::new(scene, 8, params, 5).unwrap();
        while engine.history().is_empty() {
            engine.step().unwrap();
        }
        let result = EvolutionResult {
            trained_at: Utc::now(),
            seed: 5,
            population: 8,
            params: engine.params().clone(),
            best_genome: engine.best_genome().unwrap().clone(),
            history: engine.history().to_vec(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let parsed: EvolutionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.best_genome, result.best_genome);
        assert_eq!(parsed.params.generation_tick_limit, Some(50));
        assert_eq!(parsed.history.len(), 1);
    }
}
