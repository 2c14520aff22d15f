//! Crossover and mutation orchestration.
//!
//! [`breed`] turns a parent pool into a full generation: the elites at the
//! head of the pool are copied unchanged, and every other slot is filled by
//! crossing two distinct parents and mutating the offspring.

use rand::Rng;

use crate::{genome::Genome, params::GaParams};

/// Produces `population_num` genomes for `generation` from `parents`.
///
/// The first `params.elitism_num` parents are elites and are copied as-is,
/// keeping their original generation tag and fitness. Parents may be paired
/// any number of times, but never with themselves.
///
/// # Panics
///
/// Panics if `parents` holds fewer than two genomes or fewer than
/// `params.elitism_num` genomes.
pub fn breed<R>(
    parents: &[Genome],
    population_num: usize,
    generation: u32,
    params: &GaParams,
    rng: &mut R,
) -> Vec<Genome>
where
    R: Rng + ?Sized,
{
    assert!(parents.len() >= 2, "at least two parents are required");
    assert!(
        parents.len() >= params.elitism_num,
        "parent pool must contain all elites"
    );

    let mut genomes = Vec::with_capacity(population_num);
    genomes.extend(parents.iter().take(params.elitism_num).cloned());

    while genomes.len() < population_num {
        let (mother, father) = choose_parents(parents.len(), rng);
        let mut child = parents[mother].crossover(&parents[father], generation, rng);
        child.mutation(
            params.mutation_probability,
            params.mutation_coefficient,
            rng,
        );
        genomes.push(child);
    }
    genomes
}

/// Draws two distinct indices uniformly from `0..len`.
fn choose_parents<R>(len: usize, rng: &mut R) -> (usize, usize)
where
    R: Rng + ?Sized,
{
    let first = rng.random_range(0..len);
    let mut second = rng.random_range(0..len - 1);
    if second >= first {
        second += 1;
    }
    (first, second)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    fn parents(count: usize, rng: &mut Pcg32) -> Vec<Genome> {
        (0..count)
            .map(|i| {
                let mut genome = Genome::random(1, &mut *rng);
                #[expect(clippy::cast_precision_loss)]
                let fitness = (count - i) as f64;
                genome.set_fitness(fitness);
                genome
            })
            .collect()
    }

    #[test]
    fn test_breed_fills_population() {
        let mut rng = Pcg32::seed_from_u64(20);
        let parents = parents(3, &mut rng);
        let params = GaParams::default();
        let genomes = breed(&parents, 10, 2, &params, &mut rng);
        assert_eq!(genomes.len(), 10);
    }

    #[test]
    fn test_elites_copied_unchanged() {
        let mut rng = Pcg32::seed_from_u64(21);
        let parents = parents(5, &mut rng);
        let params = GaParams {
            mutation_probability: 1.0,
            ..GaParams::default()
        };
        let genomes = breed(&parents, 12, 2, &params, &mut rng);
        assert_eq!(&genomes[..3], &parents[..3]);
        assert!(genomes[..3].iter().all(|g| g.generation() == 1));
    }

    #[test]
    fn test_offspring_tagged_with_new_generation() {
        let mut rng = Pcg32::seed_from_u64(22);
        let parents = parents(4, &mut rng);
        let params = GaParams::default();
        let genomes = breed(&parents, 20, 7, &params, &mut rng);
        for child in &genomes[params.elitism_num..] {
            assert_eq!(child.generation(), 7);
            assert_eq!(child.fitness(), 0.0);
        }
    }

    #[test]
    fn test_offspring_genes_come_from_pool_without_mutation() {
        let mut rng = Pcg32::seed_from_u64(23);
        let parents = parents(4, &mut rng);
        let params = GaParams {
            mutation_probability: 0.0,
            ..GaParams::default()
        };
        let genomes = breed(&parents, 30, 2, &params, &mut rng);
        for child in &genomes[params.elitism_num..] {
            for (i, value) in child.genes().iter().enumerate() {
                assert!(parents.iter().any(|p| p.genes()[i] == *value));
            }
        }
    }

    #[test]
    fn test_choose_parents_distinct_and_in_range() {
        let mut rng = Pcg32::seed_from_u64(24);
        let mut seen = [[false; 3]; 3];
        for _ in 0..1_000 {
            let (a, b) = choose_parents(3, &mut rng);
            assert_ne!(a, b);
            assert!(a < 3 && b < 3);
            seen[a][b] = true;
        }
        // every ordered pair of distinct parents shows up
        for a in 0..3 {
            for b in 0..3 {
                assert_eq!(seen[a][b], a != b);
            }
        }
    }

    #[test]
    #[should_panic(expected = "two parents")]
    fn test_single_parent_panics() {
        let mut rng = Pcg32::seed_from_u64(25);
        let parents = parents(1, &mut rng);
        let params = GaParams {
            elitism_num: 1,
            ..GaParams::default()
        };
        let _ = breed(&parents, 4, 2, &params, &mut rng);
    }
}
