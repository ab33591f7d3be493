//! Held-Karp exact TSP dynamic program.
//!
//! # Algorithm
//!
//! Classical subset DP: for a subset `S` of non-depot cities and an end
//! city `c ∈ S`, `cost(S, c)` is the cheapest path that starts at city 0,
//! visits exactly the cities in `S`, and ends at `c`:
//!
//! `cost({c}, c) = d(0, c)`
//! `cost(S, c) = min over p ∈ S \ {c} of cost(S \ {c}, p) + d(p, c)`
//!
//! The optimal cycle closes the best full-subset path back to city 0; the
//! tour is reconstructed by walking predecessor choices backward.
//!
//! # Complexity
//!
//! `O(2^n * n)` states with `O(n)` transitions each. The state table is a
//! flat arena indexed by `(subset bitmask, end city)` to keep the memory
//! layout predictable.
//!
//! # Reference
//!
//! Held, M. & Karp, R. M. (1962). "A Dynamic Programming Approach to
//! Sequencing Problems", *Journal of the SIAM* 10(1), 196-210.

use crate::distance::DistanceMatrix;

/// Solves the TSP exactly, returning the optimal cycle cost and a tour
/// starting at city 0.
pub(crate) fn held_karp(distances: &DistanceMatrix) -> (f64, Vec<usize>) {
    let n = distances.size();
    debug_assert!(n >= 2, "trivial instances are handled by the dispatcher");

    // Non-depot cities 1..n map to bits 0..n-1 of the subset mask.
    let m = n - 1;
    let full: usize = (1 << m) - 1;
    let mut cost = vec![f64::INFINITY; (full + 1) * m];
    let mut parent = vec![usize::MAX; (full + 1) * m];

    for j in 0..m {
        cost[(1 << j) * m + j] = distances.get(0, j + 1);
    }

    for mask in 1..=full {
        for j in 0..m {
            if mask & (1 << j) == 0 {
                continue;
            }
            let rest = mask & !(1 << j);
            if rest == 0 {
                // Single-city subset, seeded above.
                continue;
            }
            let mut best = f64::INFINITY;
            let mut best_prev = usize::MAX;
            for p in 0..m {
                if rest & (1 << p) == 0 {
                    continue;
                }
                let candidate = cost[rest * m + p] + distances.get(p + 1, j + 1);
                if candidate < best {
                    best = candidate;
                    best_prev = p;
                }
            }
            cost[mask * m + j] = best;
            parent[mask * m + j] = best_prev;
        }
    }

    let mut best_cost = f64::INFINITY;
    let mut end = 0;
    for j in 0..m {
        let candidate = cost[full * m + j] + distances.get(j + 1, 0);
        if candidate < best_cost {
            best_cost = candidate;
            end = j;
        }
    }

    let mut tour = Vec::with_capacity(n);
    let mut mask = full;
    let mut j = end;
    loop {
        tour.push(j + 1);
        let prev = parent[mask * m + j];
        mask &= !(1 << j);
        if mask == 0 {
            break;
        }
        j = prev;
    }
    tour.push(0);
    tour.reverse();

    (best_cost, tour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_optimal() {
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
            .expect("finite");
        let (cost, tour) = held_karp(&dm);
        assert!((cost - 4.0).abs() < 1e-9);
        assert_eq!(tour[0], 0);
        assert_eq!(tour.len(), 4);
    }

    #[test]
    fn test_collinear_cities() {
        // 0-1-2-3 on a line: optimal cycle sweeps out and back, cost 6.
        let dm = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)])
            .expect("finite");
        let (cost, tour) = held_karp(&dm);
        assert!((cost - 6.0).abs() < 1e-9);
        assert_eq!(tour[0], 0);
    }

    #[test]
    fn test_tour_visits_every_city_once() {
        let dm = DistanceMatrix::from_points(&[
            (0.0, 0.0),
            (4.0, 1.0),
            (2.0, 5.0),
            (7.0, 3.0),
            (1.0, 8.0),
            (6.0, 7.0),
        ])
        .expect("finite");
        let (_, tour) = held_karp(&dm);
        let mut sorted = tour.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_cost_matches_reported_tour() {
        let dm = DistanceMatrix::from_points(&[
            (0.0, 0.0),
            (4.0, 1.0),
            (2.0, 5.0),
            (7.0, 3.0),
            (1.0, 8.0),
        ])
        .expect("finite");
        let (cost, tour) = held_karp(&dm);
        let mut walked = 0.0;
        for i in 0..tour.len() {
            walked += dm.get(tour[i], tour[(i + 1) % tour.len()]);
        }
        assert!((cost - walked).abs() < 1e-9);
    }
}
