//! Generational genetic algorithm evolving obstacle-avoiding robots.
//!
//! Each genome parameterizes the sensor-to-motor wiring of one robot. A whole
//! generation of robots is released at the center of a scene and stepped until
//! every robot has been destroyed, either by leaving the scene or by hitting an
//! obstacle. The distance a robot covered before its destruction (its
//! mileage) is its genome's fitness.
//!
//! # How Evolution Works
//!
//! 1. **Population** - `population_num` random genomes, one robot each
//! 2. **Evaluation** - [`GaEngine::step`] advances all robots one tick at a time
//! 3. **Fitness** - A destroyed robot's mileage is written to its genome
//! 4. **Selection** - Elites are kept; roulette selection fills the parent pool
//! 5. **Reproduction** - Uniform crossover of distinct parents, then Gaussian mutation
//! 6. **Repeat** - The next generation is spawned as soon as the last robot dies
//!
//! # Architecture
//!
//! ```text
//! GaEngine
//!     ↓ owns
//! Scene + live robots (evobot-world)
//!     ↓ destroyed robots score
//! Genomes (fitness = mileage)
//!     ↓ selection::select_parents
//! Parent pool (elites + roulette picks)
//!     ↓ breeding::breed
//! Next generation of genomes
//! ```
//!
//! # Parameters
//!
//! All tunables live in [`GaParams`]:
//!
//! - **Elitism** - Number of top genomes carried over unmutated
//! - **Selection percentage** - Share of the population used as parents
//! - **Mutation probability** - Chance that each gene mutates
//! - **Mutation coefficient** - Mutation magnitude relative to the gene range
//! - **Robot size / sensor error** - Physical parameters of the spawned robots
//! - **Generation tick limit** - Optional cap on the length of a generation
//!
//! # Example
//!
//! ```
//! use evobot_training::{GaEngine, GaParams};
//! use evobot_world::Scene;
//!
//! let scene = Scene::new(800.0, 600.0).unwrap();
//! let params = GaParams {
//!     generation_tick_limit: Some(100),
//!     ..GaParams::default()
//! };
//! let mut engine = GaEngine::new(scene, 10, params, 42).unwrap();
//! while engine.generation_num() < 3 {
//!     engine.step().unwrap();
//! }
//! assert_eq!(engine.history().len(), 2);
//! assert!(engine.best_genome().is_some());
//! ```
//!
//! # Current Limitations
//!
//! - **Sequential evaluation**: robots are stepped one after another on a
//!   single thread
//! - **Robots ignore each other**: robots of a generation share the start
//!   position, so they neither collide with nor sense one another
//! - **No persistence**: only the best genome can be exported, by the caller

pub use self::{
    engine::{EngineError, GaEngine},
    genome::Genome,
    params::{ConfigError, GaParams},
    summary::GenerationSummary,
};

pub mod breeding;
pub mod engine;
pub mod ga_robot;
pub mod genome;
pub mod params;
pub mod selection;
pub mod summary;
