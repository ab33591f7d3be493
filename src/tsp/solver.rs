//! Solve dispatch and tour rotation.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::{RoutingError, RoutingResult};

use super::exact;
use super::genetic;

/// Largest city count solved exactly by the Held-Karp dynamic program.
///
/// The DP table holds `O(2^n * n)` states, which bounds the exact regime.
pub const HELD_KARP_LIMIT: usize = 17;

/// Finds a minimum-cost closed tour over the given cities.
///
/// Returns `(tour_cost, tour)` where `tour` is a permutation of
/// `0..cities.len()` rotated so that `tour[0] == first`, and `tour_cost` is
/// the cost of visiting the cities in that order and returning to the
/// start.
///
/// Instances of up to [`HELD_KARP_LIMIT`] cities are solved exactly;
/// larger instances fall back to a generational genetic search seeded with
/// `heuristic_hint` when one is supplied (an unrotated permutation of
/// `0..cities.len()`, typically the incumbent tour).
///
/// # Errors
///
/// Fails on an empty city set, an anchor outside `0..cities.len()`, or
/// non-finite coordinates.
///
/// # Examples
///
/// ```
/// use d2d_routing::tsp::solve;
///
/// let cities = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
/// let (cost, tour) = solve(&cities, 2, None).unwrap();
/// assert!((cost - 4.0).abs() < 1e-9);
/// assert_eq!(tour[0], 2);
/// ```
pub fn solve(
    cities: &[(f64, f64)],
    first: usize,
    heuristic_hint: Option<&[usize]>,
) -> RoutingResult<(f64, Vec<usize>)> {
    solve_with_rng(cities, first, heuristic_hint, &mut rand::rng())
}

/// [`solve`] with a caller-provided random source.
///
/// Only the genetic branch draws randomness; supplying a seeded RNG makes
/// large-instance runs reproducible.
pub fn solve_with_rng<R: Rng + ?Sized>(
    cities: &[(f64, f64)],
    first: usize,
    heuristic_hint: Option<&[usize]>,
    rng: &mut R,
) -> RoutingResult<(f64, Vec<usize>)> {
    let n = cities.len();
    if n == 0 {
        return Err(RoutingError::EmptyCitySet);
    }

    if n == 1 {
        let mut tour = vec![0];
        rotate_to_anchor(&mut tour, first)?;
        return Ok((0.0, tour));
    }

    let distances = DistanceMatrix::from_points(cities)?;

    let (cost, mut tour) = match n {
        2 => (2.0 * distances.get(0, 1), vec![0, 1]),
        3 => (
            distances.get(0, 1) + distances.get(1, 2) + distances.get(2, 0),
            vec![0, 1, 2],
        ),
        _ if n <= HELD_KARP_LIMIT => exact::held_karp(&distances),
        _ => genetic::evolve(&distances, heuristic_hint, rng),
    };

    rotate_to_anchor(&mut tour, first)?;
    Ok((cost, tour))
}

/// Rotates a tour in place so that it begins at `anchor`, preserving the
/// cyclic visiting order.
///
/// # Errors
///
/// Fails with [`RoutingError::AnchorNotFound`] if `anchor` does not occur
/// in the tour.
///
/// # Examples
///
/// ```
/// use d2d_routing::tsp::rotate_to_anchor;
///
/// let mut tour = vec![0, 1, 2, 3];
/// rotate_to_anchor(&mut tour, 2).unwrap();
/// assert_eq!(tour, vec![2, 3, 0, 1]);
/// ```
pub fn rotate_to_anchor(tour: &mut [usize], anchor: usize) -> RoutingResult<()> {
    let position = tour
        .iter()
        .position(|&city| city == anchor)
        .ok_or(RoutingError::AnchorNotFound { anchor })?;
    tour.rotate_left(position);
    Ok(())
}
