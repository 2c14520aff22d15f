//! Generational GA engine driving a population of robots.
//!
//! [`GaEngine`] owns the scene, the live robots and the genomes of the
//! current generation. Each call to [`GaEngine::step`] advances every live
//! robot by one tick and destroys those that left the scene or hit an
//! obstacle; a destroyed robot's mileage becomes its genome's fitness. When
//! the last robot of a generation is destroyed, the next generation is bred
//! before `step` returns:
//!
//! 1. **Snapshot** - keep the finished genomes as the last generation
//! 2. **Selection** - elites plus roulette picks form the parent pool
//!    (see [`selection`](crate::selection))
//! 3. **Breeding** - elites are copied, the rest crossed and mutated
//!    (see [`breeding`](crate::breeding))
//! 4. **Spawn** - one robot per genome at the scene center; the elites'
//!    robots are labeled `1..=elitism_num`
//!
//! All randomness comes from a [`Pcg32`] seeded at construction, so a run is
//! reproducible from its seed.

use evobot_world::{RobotId, Scene, SceneError, SceneObject};
use rand::SeedableRng as _;
use rand_pcg::Pcg32;
use tracing::{debug, info, warn};

use crate::{
    breeding,
    ga_robot::{GaRobot, build_robot},
    genome::Genome,
    params::{ConfigError, GaParams},
    selection,
    summary::GenerationSummary,
};

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum EngineError {
    #[display("robot {_0} is not alive")]
    RobotNotLive(#[error(not(source))] RobotId),
    #[display("scene bookkeeping failed: {_0}")]
    Scene(SceneError),
}

impl From<SceneError> for EngineError {
    fn from(err: SceneError) -> Self {
        Self::Scene(err)
    }
}

#[derive(Debug, Clone)]
pub struct GaEngine {
    scene: Scene,
    population_num: usize,
    params: GaParams,
    rng: Pcg32,
    robots: Vec<GaRobot>,
    genomes: Vec<Genome>,
    genomes_last_generation: Vec<Genome>,
    best_genome: Option<Genome>,
    generation_num: u32,
    generation_ticks: u64,
    next_robot_id: u64,
    history: Vec<GenerationSummary>,
}

impl GaEngine {
    /// Creates the first generation of `population_num` random genomes.
    ///
    /// Fails without touching `scene` if `params` are invalid for
    /// `population_num`.
    pub fn new(
        scene: Scene,
        population_num: usize,
        params: GaParams,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        params.validate(population_num)?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let generation_num = 1;
        let genomes = (0..population_num)
            .map(|_| Genome::random(generation_num, &mut rng))
            .collect();

        let mut engine = Self {
            scene,
            population_num,
            params,
            rng,
            robots: Vec::with_capacity(population_num),
            genomes,
            genomes_last_generation: vec![],
            best_genome: None,
            generation_num,
            generation_ticks: 0,
            next_robot_id: 0,
            history: vec![],
        };
        engine.spawn_robots(false);
        info!(generation = engine.generation_num, "generation started");
        Ok(engine)
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Consumes the engine and hands back the scene.
    #[must_use]
    pub fn into_scene(self) -> Scene {
        self.scene
    }

    #[must_use]
    pub fn population_num(&self) -> usize {
        self.population_num
    }

    #[must_use]
    pub fn params(&self) -> &GaParams {
        &self.params
    }

    /// Live robots, in stepping order.
    #[must_use]
    pub fn robots(&self) -> &[GaRobot] {
        &self.robots
    }

    /// Genomes of the current generation, including those of destroyed robots.
    #[must_use]
    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    #[must_use]
    pub fn genome_of(&self, robot: &GaRobot) -> &Genome {
        &self.genomes[robot.genome_index]
    }

    #[must_use]
    pub fn genomes_last_generation(&self) -> &[Genome] {
        &self.genomes_last_generation
    }

    /// Best genome seen over the engine's lifetime, if a generation has ended.
    #[must_use]
    pub fn best_genome(&self) -> Option<&Genome> {
        self.best_genome.as_ref()
    }

    #[must_use]
    pub fn generation_num(&self) -> u32 {
        self.generation_num
    }

    /// Ticks run so far in the current generation.
    #[must_use]
    pub fn generation_ticks(&self) -> u64 {
        self.generation_ticks
    }

    /// Summaries of all finished generations, oldest first.
    #[must_use]
    pub fn history(&self) -> &[GenerationSummary] {
        &self.history
    }

    /// Advances every live robot by one tick.
    ///
    /// Robots outside the scene bounds or colliding with an obstacle are
    /// destroyed. If no robot is left afterwards, the next generation is
    /// created before returning.
    pub fn step(&mut self) -> Result<(), EngineError> {
        let mut index = 0;
        while index < self.robots.len() {
            let robot = &mut self.robots[index].robot;
            robot.sense_and_act(&self.scene, &mut self.rng);

            let out_of_bounds = !self.scene.contains_point(robot.position());
            if out_of_bounds || robot.collision_with_object() {
                let id = robot.id();
                self.destroy_robot(id)?;
            } else {
                index += 1;
            }
        }
        self.generation_ticks += 1;

        if let Some(limit) = self.params.generation_tick_limit {
            if !self.robots.is_empty() && self.generation_ticks >= limit {
                warn!(
                    generation = self.generation_num,
                    survivors = self.robots.len(),
                    "tick limit reached, terminating generation"
                );
                while let Some(ga_robot) = self.robots.first() {
                    let id = ga_robot.robot.id();
                    self.destroy_robot(id)?;
                }
            }
        }

        if self.robots.is_empty() {
            info!(
                generation = self.generation_num,
                ticks = self.generation_ticks,
                "generation terminated"
            );
            self.create_new_generation();
        }
        Ok(())
    }

    /// Destroys a live robot, recording its mileage as its genome's fitness.
    ///
    /// Fails if the robot is not alive or not present in the scene.
    pub fn destroy_robot(&mut self, id: RobotId) -> Result<(), EngineError> {
        let index = self
            .robots
            .iter()
            .position(|r| r.robot.id() == id)
            .ok_or(EngineError::RobotNotLive(id))?;
        self.scene.remove(&SceneObject::Robot(id))?;

        let GaRobot {
            robot,
            genome_index,
        } = self.robots.remove(index);
        let fitness = robot.mileage();
        self.genomes[genome_index].set_fitness(fitness);
        debug!(robot = %id, fitness, "robot destroyed");
        Ok(())
    }

    fn create_new_generation(&mut self) {
        self.history.extend(GenerationSummary::new(
            self.generation_num,
            self.generation_ticks,
            &self.genomes,
        ));
        self.genomes_last_generation = self.genomes.clone();

        let parents = self.selection();
        self.generation_num += 1;
        self.genomes = breeding::breed(
            &parents,
            self.population_num,
            self.generation_num,
            &self.params,
            &mut self.rng,
        );
        self.generation_ticks = 0;

        self.spawn_robots(true);
        info!(generation = self.generation_num, "generation started");
    }

    fn selection(&mut self) -> Vec<Genome> {
        let sorted = selection::sorted_by_fitness(self.genomes.clone());
        if let Some(best) = sorted.first() {
            let improved = self
                .best_genome
                .as_ref()
                .is_none_or(|b| best.fitness() > b.fitness());
            if improved {
                info!(genome = %best, "new best");
                self.best_genome = Some(best.clone());
            }
        }

        let pool_size = self.params.parent_pool_size(self.population_num);
        let parents =
            selection::select_parents(sorted, self.params.elitism_num, pool_size, &mut self.rng);
        for elite in parents.iter().take(self.params.elitism_num) {
            info!(genome = %elite, "elite");
        }
        parents
    }

    /// Places one robot per current genome at the scene center.
    fn spawn_robots(&mut self, label_elites: bool) {
        let position = self.scene.center();
        for (genome_index, genome) in self.genomes.iter().enumerate() {
            let label = (label_elites && genome_index < self.params.elitism_num)
                .then(|| u32::try_from(genome_index + 1).unwrap_or(u32::MAX));
            let id = RobotId::new(self.next_robot_id);
            self.next_robot_id += 1;

            let robot = build_robot(id, position, genome, label, &self.params);
            self.scene.put_one(SceneObject::Robot(id));
            self.robots.push(GaRobot {
                robot,
                genome_index,
            });
        }
    }
}
