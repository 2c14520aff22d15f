//! Parent selection: elitism followed by roulette-wheel selection.
//!
//! Given the genomes of a finished generation sorted best-first, the top
//! `elitism_num` genomes are taken unconditionally. The remaining slots of the
//! parent pool are filled by fitness-proportionate (roulette) selection
//! without replacement: once picked, a genome leaves the candidate list.
//!
//! # Degenerate Weights
//!
//! Roulette weights are `max(fitness, 0)`. When the remaining weights do not
//! sum to a positive finite value (for instance every candidate has zero
//! mileage), the pick is uniform over the remaining candidates.

use rand::Rng;

use crate::genome::Genome;

/// Sorts genomes by fitness, best first.
///
/// The sort is stable, so genomes with equal fitness keep their order.
#[must_use]
pub fn sorted_by_fitness(mut genomes: Vec<Genome>) -> Vec<Genome> {
    genomes.sort_by(|a, b| b.fitness().total_cmp(&a.fitness()));
    genomes
}

/// Selects a parent pool of `pool_size` genomes.
///
/// The pool starts with the first `elitism_num` genomes of `sorted` (elites)
/// followed by roulette picks from the rest. The pool is shorter than
/// `pool_size` only when there are not enough genomes.
///
/// # Panics
///
/// Panics if `sorted` is not sorted by fitness in descending order.
pub fn select_parents<R>(
    sorted: Vec<Genome>,
    elitism_num: usize,
    pool_size: usize,
    rng: &mut R,
) -> Vec<Genome>
where
    R: Rng + ?Sized,
{
    assert!(
        sorted.is_sorted_by(|a, b| a.fitness() >= b.fitness()),
        "genomes must be sorted by fitness in descending order"
    );
    let mut remaining = sorted;
    let elite_count = elitism_num.min(remaining.len());
    let mut selected: Vec<Genome> = remaining.drain(..elite_count).collect();

    while selected.len() < pool_size {
        let Some(index) = roulette_select(&remaining, rng) else {
            break;
        };
        selected.push(remaining.remove(index));
    }
    selected
}

/// Picks a candidate index with probability proportional to its fitness.
///
/// Returns `None` only when `candidates` is empty.
pub fn roulette_select<R>(candidates: &[Genome], rng: &mut R) -> Option<usize>
where
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return None;
    }
    let weight = |genome: &Genome| genome.fitness().max(0.0);
    let total: f64 = candidates.iter().map(weight).sum();
    if !(total.is_finite() && total > 0.0) {
        return Some(rng.random_range(0..candidates.len()));
    }

    let mut value = rng.random_range(0.0..total);
    for (i, genome) in candidates.iter().enumerate() {
        value -= weight(genome);
        if value < 0.0 {
            return Some(i);
        }
    }
    // rounding left a sliver past the last weight
    Some(candidates.len() - 1)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn genomes_with_fitness(fitness: &[f64]) -> Vec<Genome> {
        fitness
            .iter()
            .enumerate()
            .map(|(i, f)| {
                #[expect(clippy::cast_precision_loss)]
                let mut genome = Genome::from_genes(1, [0.0, i as f64 + 1.0, 100.0, 0.0, 1.0]);
                genome.set_fitness(*f);
                genome
            })
            .collect()
    }

    #[test]
    fn test_sorted_by_fitness_descending() {
        let genomes = genomes_with_fitness(&[3.0, 9.0, 1.0, 9.0]);
        let sorted = sorted_by_fitness(genomes.clone());
        let fitness: Vec<f64> = sorted.iter().map(Genome::fitness).collect();
        assert_eq!(fitness, [9.0, 9.0, 3.0, 1.0]);
        // stable: first 9.0 stays first
        assert_eq!(sorted[0], genomes[1]);
        assert_eq!(sorted[1], genomes[3]);
    }

    #[test]
    fn test_elites_come_first() {
        let mut rng = Pcg32::seed_from_u64(10);
        let genomes = genomes_with_fitness(&[10.0, 9.0, 8.0, 7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        let pool = select_parents(genomes.clone(), 3, 5, &mut rng);
        assert_eq!(pool.len(), 5);
        assert_eq!(&pool[..3], &genomes[..3]);
    }

    #[test]
    fn test_pool_has_no_duplicates_and_only_candidates() {
        let mut rng = Pcg32::seed_from_u64(11);
        let genomes = sorted_by_fitness(genomes_with_fitness(&[
            5.0, 40.0, 0.0, 12.0, 7.5, 3.0, 0.0, 22.0, 1.0, 9.0, 14.0, 2.0,
        ]));
        for _ in 0..200 {
            let pool = select_parents(genomes.clone(), 3, 8, &mut rng);
            assert_eq!(pool.len(), 8);
            let mut seen = HashSet::new();
            for parent in &pool {
                let index = genomes.iter().position(|g| g == parent).unwrap();
                assert!(seen.insert(index), "genome selected twice");
            }
        }
    }

    #[test]
    fn test_pool_limited_by_candidates() {
        let mut rng = Pcg32::seed_from_u64(12);
        let genomes = genomes_with_fitness(&[3.0, 2.0, 1.0]);
        let pool = select_parents(genomes, 1, 10, &mut rng);
        assert_eq!(pool.len(), 3);
    }

    #[test]
    fn test_pool_smaller_than_elites_keeps_all_elites() {
        let mut rng = Pcg32::seed_from_u64(13);
        let genomes = genomes_with_fitness(&[5.0, 4.0, 3.0, 2.0]);
        let pool = select_parents(genomes.clone(), 3, 1, &mut rng);
        assert_eq!(pool, genomes[..3]);
    }

    #[test]
    #[should_panic(expected = "sorted by fitness")]
    fn test_unsorted_input_panics() {
        let mut rng = Pcg32::seed_from_u64(14);
        let genomes = genomes_with_fitness(&[1.0, 2.0]);
        let _ = select_parents(genomes, 1, 2, &mut rng);
    }

    #[test]
    fn test_roulette_prefers_fitter_candidates() {
        let mut rng = Pcg32::seed_from_u64(15);
        let genomes = genomes_with_fitness(&[90.0, 10.0]);
        let mut counts = [0usize; 2];
        for _ in 0..10_000 {
            counts[roulette_select(&genomes, &mut rng).unwrap()] += 1;
        }
        assert!((8_500..=9_500).contains(&counts[0]), "{counts:?}");
    }

    #[test]
    fn test_roulette_never_picks_zero_weight_when_others_positive() {
        let mut rng = Pcg32::seed_from_u64(16);
        let genomes = genomes_with_fitness(&[0.0, 5.0, 0.0, -3.0]);
        for _ in 0..1_000 {
            assert_eq!(roulette_select(&genomes, &mut rng), Some(1));
        }
    }

    #[test]
    fn test_roulette_equal_fitness_is_uniform() {
        let mut rng = Pcg32::seed_from_u64(17);
        let genomes = genomes_with_fitness(&[5.0; 10]);
        let mut counts = [0usize; 10];
        for _ in 0..20_000 {
            counts[roulette_select(&genomes, &mut rng).unwrap()] += 1;
        }
        for count in counts {
            assert!((1_700..=2_300).contains(&count), "{counts:?}");
        }
    }

    #[test]
    fn test_roulette_zero_sum_falls_back_to_uniform() {
        let mut rng = Pcg32::seed_from_u64(18);
        let genomes = genomes_with_fitness(&[0.0, 0.0, 0.0, -1.0]);
        let mut counts = [0usize; 4];
        for _ in 0..8_000 {
            counts[roulette_select(&genomes, &mut rng).unwrap()] += 1;
        }
        for count in counts {
            assert!((1_700..=2_300).contains(&count), "{counts:?}");
        }
    }

    #[test]
    fn test_roulette_empty() {
        let mut rng = Pcg32::seed_from_u64(19);
        assert_eq!(roulette_select(&[], &mut rng), None);
    }
}
