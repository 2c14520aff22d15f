//! Tunable parameters of the genetic algorithm.
//!
//! [`GaParams`] groups every constant that shapes evolution. The defaults
//! match the classic configuration (3 elites, 30% selection, 30% mutation
//! probability, 0.07 mutation coefficient). Parameters are checked against a
//! population size with [`GaParams::validate`] before an engine is built.

use serde::{Deserialize, Serialize};

pub const ELITISM_NUM: usize = 3;
pub const SELECTION_PERCENTAGE: f64 = 0.3;
pub const MUTATION_PROBABILITY: f64 = 0.3;
pub const MUTATION_COEFFICIENT: f64 = 0.07;
pub const ROBOT_SIZE: f64 = 25.0;
pub const OBSTACLE_SENSOR_ERROR: f64 = 0.0;

/// Genetic algorithm configuration.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// configuration file only needs to name what it changes:
///
/// ```
/// use evobot_training::params::GaParams;
///
/// let params: GaParams = serde_json::from_str(r#"{"elitism_num": 2}"#).unwrap();
/// assert_eq!(params.elitism_num, 2);
/// assert_eq!(params.selection_percentage, 0.3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaParams {
    /// Number of top genomes carried unchanged into the next generation
    pub elitism_num: usize,
    /// Share of the population selected as parents, in `(0, 1)`
    pub selection_percentage: f64,
    /// Per-gene mutation probability, in `[0, 1]`
    pub mutation_probability: f64,
    /// Mutation magnitude relative to each gene's range
    pub mutation_coefficient: f64,
    /// Robot diameter (also the wheel base)
    pub robot_size: f64,
    /// Half-width of the uniform noise added to sensor readings
    pub sensor_error: f64,
    /// Ticks after which a generation is terminated even if robots survive
    pub generation_tick_limit: Option<u64>,
}

impl Default for GaParams {
    fn default() -> Self {
        Self {
            elitism_num: ELITISM_NUM,
            selection_percentage: SELECTION_PERCENTAGE,
            mutation_probability: MUTATION_PROBABILITY,
            mutation_coefficient: MUTATION_COEFFICIENT,
            robot_size: ROBOT_SIZE,
            sensor_error: OBSTACLE_SENSOR_ERROR,
            generation_tick_limit: None,
        }
    }
}

impl GaParams {
    /// Returns `round(population_num * selection_percentage)`.
    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn selection_count(&self, population_num: usize) -> usize {
        (population_num as f64 * self.selection_percentage).round() as usize
    }

    /// Number of parents selected each generation.
    ///
    /// Elites always take their slots, so the pool is never smaller than
    /// `elitism_num` even when the rounded selection count is.
    #[must_use]
    pub fn parent_pool_size(&self, population_num: usize) -> usize {
        self.selection_count(population_num).max(self.elitism_num)
    }

    pub fn validate(&self, population_num: usize) -> Result<(), ConfigError> {
        if population_num <= self.elitism_num {
            return Err(ConfigError::PopulationTooSmall {
                population_num,
                elitism_num: self.elitism_num,
            });
        }
        if !(self.selection_percentage > 0.0 && self.selection_percentage < 1.0) {
            return Err(ConfigError::InvalidSelectionPercentage(
                self.selection_percentage,
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(ConfigError::InvalidMutationProbability(
                self.mutation_probability,
            ));
        }
        if !(self.mutation_coefficient.is_finite() && self.mutation_coefficient >= 0.0) {
            return Err(ConfigError::InvalidMutationCoefficient(
                self.mutation_coefficient,
            ));
        }
        if !(self.robot_size.is_finite() && self.robot_size > 0.0) {
            return Err(ConfigError::InvalidRobotSize(self.robot_size));
        }
        if !(self.sensor_error.is_finite() && self.sensor_error >= 0.0) {
            return Err(ConfigError::InvalidSensorError(self.sensor_error));
        }
        let pool_size = self.parent_pool_size(population_num);
        if pool_size < 2 {
            return Err(ConfigError::ParentPoolTooSmall { pool_size });
        }
        Ok(())
    }
}

/// A rejected engine configuration.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::IsVariant)]
pub enum ConfigError {
    #[display(
        "population_num ({population_num}) must be greater than elitism_num ({elitism_num})"
    )]
    PopulationTooSmall {
        population_num: usize,
        elitism_num: usize,
    },
    #[display("selection_percentage must be in (0, 1) (got {_0})")]
    InvalidSelectionPercentage(#[error(not(source))] f64),
    #[display("mutation_probability must be in [0, 1] (got {_0})")]
    InvalidMutationProbability(#[error(not(source))] f64),
    #[display("mutation_coefficient must be finite and non-negative (got {_0})")]
    InvalidMutationCoefficient(#[error(not(source))] f64),
    #[display("robot_size must be finite and positive (got {_0})")]
    InvalidRobotSize(#[error(not(source))] f64),
    #[display("sensor_error must be finite and non-negative (got {_0})")]
    InvalidSensorError(#[error(not(source))] f64),
    #[display("parent pool of {pool_size} genomes cannot provide two distinct parents")]
    ParentPoolTooSmall { pool_size: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let params = GaParams::default();
        assert_eq!(params.elitism_num, 3);
        assert_eq!(params.selection_percentage, 0.3);
        assert_eq!(params.mutation_probability, 0.3);
        assert_eq!(params.mutation_coefficient, 0.07);
        assert_eq!(params.robot_size, 25.0);
        assert_eq!(params.sensor_error, 0.0);
        assert_eq!(params.generation_tick_limit, None);
    }

    #[test]
    fn test_population_must_exceed_elitism() {
        let params = GaParams::default();
        assert_eq!(
            params.validate(3),
            Err(ConfigError::PopulationTooSmall {
                population_num: 3,
                elitism_num: 3
            })
        );
        assert!(params.validate(4).is_ok());
    }

    #[test]
    fn test_selection_count_rounds() {
        let params = GaParams::default();
        assert_eq!(params.selection_count(10), 3);
        assert_eq!(params.selection_count(5), 2); // 1.5 rounds away from zero
        assert_eq!(params.selection_count(7), 2);
        assert_eq!(params.selection_count(9), 3);
        assert_eq!(params.selection_count(100), 30);
    }

    #[test]
    fn test_pool_never_smaller_than_elites() {
        let params = GaParams::default();
        for population_num in 4..200 {
            let pool = params.parent_pool_size(population_num);
            assert!(pool >= params.elitism_num);
            assert!(pool <= population_num);
        }
        assert_eq!(params.parent_pool_size(4), 3);
        assert_eq!(params.parent_pool_size(20), 6);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let check = |params: GaParams| params.validate(10).unwrap_err();
        assert!(
            check(GaParams {
                selection_percentage: 1.0,
                ..GaParams::default()
            })
            .is_invalid_selection_percentage()
        );
        assert!(
            check(GaParams {
                mutation_probability: 1.5,
                ..GaParams::default()
            })
            .is_invalid_mutation_probability()
        );
        assert!(
            check(GaParams {
                mutation_coefficient: f64::NAN,
                ..GaParams::default()
            })
            .is_invalid_mutation_coefficient()
        );
        assert!(
            check(GaParams {
                robot_size: 0.0,
                ..GaParams::default()
            })
            .is_invalid_robot_size()
        );
        assert!(
            check(GaParams {
                sensor_error: -1.0,
                ..GaParams::default()
            })
            .is_invalid_sensor_error()
        );
    }

    #[test]
    fn test_rejects_single_parent_pool() {
        let params = GaParams {
            elitism_num: 1,
            selection_percentage: 0.1,
            ..GaParams::default()
        };
        assert_eq!(
            params.validate(5),
            Err(ConfigError::ParentPoolTooSmall { pool_size: 1 })
        );
        assert!(params.validate(15).is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let params: GaParams =
            serde_json::from_str(r#"{"mutation_probability": 0.1, "generation_tick_limit": 500}"#)
                .unwrap();
        assert_eq!(params.mutation_probability, 0.1);
        assert_eq!(params.generation_tick_limit, Some(500));
        assert_eq!(params.elitism_num, ELITISM_NUM);
    }
}
