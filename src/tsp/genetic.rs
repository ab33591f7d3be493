//! Generational genetic search for instances beyond the exact regime.
//!
//! # Algorithm
//!
//! Fixed-schedule elitist GA: the population (optionally seeded with an
//! incumbent tour) doubles each generation through single-point
//! order-preserving crossover of uniformly drawn distinct parents, children
//! mutate with probability [`MUTATION_RATE`] (a swap of two distinct
//! positions), and truncation keeps the best [`POPULATION_SIZE`]
//! individuals. The best tour ever seen is tracked independently of
//! truncation, so the reported cost never regresses across generations.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceMatrix;

/// Number of individuals kept after each generation.
pub(crate) const POPULATION_SIZE: usize = 100;

/// Number of generations to run.
pub(crate) const GENERATIONS_COUNT: usize = 150;

/// Probability that a freshly produced child is mutated.
pub(crate) const MUTATION_RATE: f64 = 0.4;

/// Runs the genetic search and returns the best cycle cost and tour found.
///
/// `heuristic_hint`, when present, must be a permutation of
/// `0..distances.size()`; it joins the initial population, so the result
/// never costs more than the hint.
pub(crate) fn evolve<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    heuristic_hint: Option<&[usize]>,
    rng: &mut R,
) -> (f64, Vec<usize>) {
    let n = distances.size();

    let mut population: Vec<Vec<usize>> = Vec::with_capacity(2 * POPULATION_SIZE);
    if let Some(hint) = heuristic_hint {
        population.push(hint.to_vec());
    }
    while population.len() < POPULATION_SIZE {
        let mut individual: Vec<usize> = (0..n).collect();
        individual.shuffle(rng);
        population.push(individual);
    }

    let mut best = population[0].clone();
    let mut best_cost = tour_cost(&best, distances);
    for individual in &population[1..] {
        let cost = tour_cost(individual, distances);
        if cost < best_cost {
            best_cost = cost;
            best = individual.clone();
        }
    }

    for _ in 0..GENERATIONS_COUNT {
        while population.len() < 2 * POPULATION_SIZE {
            let (first, second) = distinct_pair(population.len(), rng);
            let cut = rng.random_range(1..n);
            let (mut first_child, mut second_child) =
                crossover(&population[first], &population[second], cut);
            if rng.random::<f64>() < MUTATION_RATE {
                mutate(&mut first_child, rng);
            }
            if rng.random::<f64>() < MUTATION_RATE {
                mutate(&mut second_child, rng);
            }
            population.push(first_child);
            population.push(second_child);
        }

        let mut scored: Vec<(f64, Vec<usize>)> = population
            .drain(..)
            .map(|individual| (tour_cost(&individual, distances), individual))
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0));
        scored.truncate(POPULATION_SIZE);

        if scored[0].0 < best_cost {
            best_cost = scored[0].0;
            best = scored[0].1.clone();
        }
        population.extend(scored.into_iter().map(|(_, individual)| individual));
    }

    (best_cost, best)
}

/// Cost of the closed cycle visiting `tour` in order, wraparound included.
pub(crate) fn tour_cost(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let n = tour.len();
    (0..n)
        .map(|i| distances.get(tour[i], tour[(i + 1) % n]))
        .sum()
}

/// Single-point order-preserving crossover at the given cut point.
///
/// The first child keeps the first parent's prefix `[..cut]` verbatim and
/// fills the rest with the second parent's remaining genes in the second
/// parent's order. The second child takes the second parent's genes that
/// fell inside that prefix (again in the second parent's order), followed
/// by the first parent's tail `[cut..]` verbatim.
pub(crate) fn crossover(
    first: &[usize],
    second: &[usize],
    cut: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = first.len();
    debug_assert_eq!(n, second.len());
    debug_assert!(cut >= 1 && cut < n);

    let mut in_prefix = vec![false; n];
    for &gene in &first[..cut] {
        in_prefix[gene] = true;
    }

    let mut first_child = first[..cut].to_vec();
    let mut second_child = Vec::with_capacity(n);
    for &gene in second {
        if in_prefix[gene] {
            second_child.push(gene);
        } else {
            first_child.push(gene);
        }
    }
    second_child.extend_from_slice(&first[cut..]);

    (first_child, second_child)
}

/// Swaps two distinct random positions.
pub(crate) fn mutate<R: Rng + ?Sized>(individual: &mut [usize], rng: &mut R) {
    let n = individual.len();
    let first = rng.random_range(0..n);
    let mut second = rng.random_range(0..n);
    while second == first {
        second = rng.random_range(0..n);
    }
    individual.swap(first, second);
}

fn distinct_pair<R: Rng + ?Sized>(len: usize, rng: &mut R) -> (usize, usize) {
    let first = rng.random_range(0..len);
    let mut second = rng.random_range(0..len);
    while second == first {
        second = rng.random_range(0..len);
    }
    (first, second)
}
