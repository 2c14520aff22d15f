//! Evolvable robot control parameters.
//!
//! A [`Genome`] is a fixed vector of five real-valued genes, each confined to
//! its own range (see [`Gene::range`]). The genes parameterize the wiring
//! built by [`crate::ga_robot::build_robot`]: the mounting angle and optics of
//! the two proximity sensors and the gain of the two motor controllers.
//!
//! # Genetic Operators
//!
//! - **Initialization**: [`Genome::random`] samples each gene uniformly from
//!   its range
//! - **Crossover**: [`Genome::crossover`] takes each gene from either parent
//!   with equal probability (uniform crossover)
//! - **Mutation**: [`Genome::mutation`] adds Gaussian noise scaled by the
//!   gene's range width, then clamps back into the range

use std::{
    f64::consts::FRAC_PI_2,
    fmt,
    ops::{Index, RangeInclusive},
};

use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

pub const GENE_COUNT: usize = 5;

/// Named index into a genome's gene vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gene {
    /// Sensor mounting angle; the left sensor sits at `+value`, the right at `-value`
    SensorDeltaDirection,
    SensorSaturationValue,
    SensorMaxDistance,
    MotorCtrlCoefficient,
    MotorCtrlMinActuatorValue,
}

impl Gene {
    pub const ALL: [Self; GENE_COUNT] = [
        Self::SensorDeltaDirection,
        Self::SensorSaturationValue,
        Self::SensorMaxDistance,
        Self::MotorCtrlCoefficient,
        Self::MotorCtrlMinActuatorValue,
    ];

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Self::SensorDeltaDirection => -FRAC_PI_2..=FRAC_PI_2,
            Self::SensorSaturationValue => 1.0..=200.0,
            Self::SensorMaxDistance => 10.0..=300.0,
            Self::MotorCtrlCoefficient => -0.05..=0.05,
            Self::MotorCtrlMinActuatorValue => 0.0..=5.0,
        }
    }

    fn width(self) -> f64 {
        let range = self.range();
        range.end() - range.start()
    }
}

/// An evolvable parameter set with its fitness.
///
/// Fitness starts at zero and is written once, when the robot carrying the
/// genome is destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    generation: u32,
    genes: [f64; GENE_COUNT],
    fitness: f64,
}

impl Genome {
    /// Creates a genome from explicit gene values, clamping each into its range.
    #[must_use]
    pub fn from_genes(generation: u32, mut genes: [f64; GENE_COUNT]) -> Self {
        for gene in Gene::ALL {
            let range = gene.range();
            let value = &mut genes[gene.index()];
            *value = value.clamp(*range.start(), *range.end());
        }
        Self {
            generation,
            genes,
            fitness: 0.0,
        }
    }

    pub fn random<R>(generation: u32, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let genes = Gene::ALL.map(|gene| rng.random_range(gene.range()));
        Self {
            generation,
            genes,
            fitness: 0.0,
        }
    }

    /// Produces an offspring tagged with `generation`.
    pub fn crossover<R>(&self, other: &Self, generation: u32, rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        let genes = Gene::ALL.map(|gene| {
            if rng.random_bool(0.5) {
                self[gene]
            } else {
                other[gene]
            }
        });
        Self {
            generation,
            genes,
            fitness: 0.0,
        }
    }

    /// Mutates genes in place.
    ///
    /// Each gene mutates with `probability`; the perturbation is drawn from
    /// `N(0, coefficient * range_width)`.
    pub fn mutation<R>(&mut self, probability: f64, coefficient: f64, rng: &mut R)
    where
        R: Rng + ?Sized,
    {
        for gene in Gene::ALL {
            if !rng.random_bool(probability) {
                continue;
            }
            let noise: f64 = rng.sample(StandardNormal);
            let range = gene.range();
            let value = &mut self.genes[gene.index()];
            *value = (*value + noise * coefficient * gene.width()).clamp(*range.start(), *range.end());
        }
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[must_use]
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    #[must_use]
    pub fn genes(&self) -> &[f64; GENE_COUNT] {
        &self.genes
    }

    #[must_use]
    pub fn sensor_delta_direction(&self) -> f64 {
        self[Gene::SensorDeltaDirection]
    }

    #[must_use]
    pub fn sensor_saturation_value(&self) -> f64 {
        self[Gene::SensorSaturationValue]
    }

    #[must_use]
    pub fn sensor_max_distance(&self) -> f64 {
        self[Gene::SensorMaxDistance]
    }

    #[must_use]
    pub fn motor_ctrl_coefficient(&self) -> f64 {
        self[Gene::MotorCtrlCoefficient]
    }

    #[must_use]
    pub fn motor_ctrl_min_actuator_value(&self) -> f64 {
        self[Gene::MotorCtrlMinActuatorValue]
    }
}

impl Index<Gene> for Genome {
    type Output = f64;

    fn index(&self, gene: Gene) -> &f64 {
        &self.genes[gene.index()]
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gen {} fitness {:.2} [delta_dir {:.3}, saturation {:.1}, max_dist {:.1}, coef {:.4}, min_act {:.3}]",
            self.generation,
            self.fitness,
            self.sensor_delta_direction(),
            self.sensor_saturation_value(),
            self.sensor_max_distance(),
            self.motor_ctrl_coefficient(),
            self.motor_ctrl_min_actuator_value(),
        )
    }
}
