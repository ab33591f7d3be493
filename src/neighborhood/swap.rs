//! Segment-swap move generation.
//!
//! # Algorithm
//!
//! A segment-swap move exchanges two contiguous stop blocks of lengths
//! `first_length` and `second_length`, either within one route (the block
//! between the segments keeps its order but shifts) or across two routes
//! (block relocation; route lengths change when the segment lengths
//! differ). The depot at index 0 and the closing depot at the end of a
//! route are never part of a swapped segment.
//!
//! Every candidate is materialized eagerly and deduplicated by structural
//! equality over the full nested route collections; the result is an
//! ordered set, so iteration order is deterministic.

use std::collections::BTreeSet;

use crate::error::{RoutingError, RoutingResult};
use crate::models::Solution;

/// Returns every distinct solution reachable by one segment-swap move.
///
/// Union of the three move families ([`truck_truck_swap`],
/// [`truck_drone_swap`], [`drone_drone_swap`]), deduplicated by structural
/// equality. The input solution is never mutated.
///
/// # Errors
///
/// Fails with [`RoutingError::EmptySegment`] unless both segment lengths
/// are at least 1.
///
/// # Examples
///
/// ```
/// use d2d_routing::models::Solution;
/// use d2d_routing::neighborhood::swap;
///
/// let solution = Solution::new(vec![vec![0, 1, 2, 3, 4, 0]], vec![]);
/// let neighbors = swap(&solution, 1, 1).unwrap();
/// assert!(neighbors.contains(&Solution::new(vec![vec![0, 2, 1, 3, 4, 0]], vec![])));
/// assert!(!neighbors.contains(&solution));
/// ```
pub fn swap(
    solution: &Solution,
    first_length: usize,
    second_length: usize,
) -> RoutingResult<BTreeSet<Solution>> {
    let mut result = truck_truck_swap(solution, first_length, second_length)?;
    result.extend(truck_drone_swap(solution, first_length, second_length)?);
    result.extend(drone_drone_swap(solution, first_length, second_length)?);
    Ok(result)
}

/// Segment swaps within one technician route and between pairs of
/// technician routes.
///
/// Intra-route moves need a route of at least `2 + first_length +
/// second_length` stops (both depot ends plus both segments); inter-route
/// moves enumerate every ordered pair of distinct trucks.
pub fn truck_truck_swap(
    solution: &Solution,
    first_length: usize,
    second_length: usize,
) -> RoutingResult<BTreeSet<Solution>> {
    check_segment_lengths(first_length, second_length)?;

    let mut result = BTreeSet::new();
    let trucks = solution.truck_routes();

    for first_truck in 0..trucks.len() {
        let route = &trucks[first_truck];
        if route.len() >= 2 + first_length + second_length {
            for first_index in 1..route.len() - first_length {
                for second_index in first_index + first_length..route.len() - second_length {
                    let mut candidate = solution.clone();
                    *candidate.truck_route_mut(first_truck) = exchange_within(
                        route,
                        first_index,
                        first_length,
                        second_index,
                        second_length,
                    );
                    result.insert(candidate);
                }
            }
        }

        for second_truck in 0..trucks.len() {
            if second_truck == first_truck {
                continue;
            }
            let second_route = &trucks[second_truck];
            for first_index in 1..route.len().saturating_sub(first_length) {
                for second_index in 1..second_route.len().saturating_sub(second_length) {
                    let (new_first, new_second) = exchange_between(
                        route,
                        first_index,
                        first_length,
                        second_route,
                        second_index,
                        second_length,
                    );
                    let mut candidate = solution.clone();
                    *candidate.truck_route_mut(first_truck) = new_first;
                    *candidate.truck_route_mut(second_truck) = new_second;
                    result.insert(candidate);
                }
            }
        }
    }

    Ok(result)
}

/// Segment swaps within one drone trip and between pairs of distinct drone
/// trips, trips being addressed by `(drone, trip)` across the whole fleet.
pub fn drone_drone_swap(
    solution: &Solution,
    first_length: usize,
    second_length: usize,
) -> RoutingResult<BTreeSet<Solution>> {
    check_segment_lengths(first_length, second_length)?;

    let mut result = BTreeSet::new();
    let drones = solution.drone_routes();

    for first_drone in 0..drones.len() {
        for first_trip in 0..drones[first_drone].len() {
            let trip = &drones[first_drone][first_trip];
            if trip.len() >= 2 + first_length + second_length {
                for first_index in 1..trip.len() - first_length {
                    for second_index in first_index + first_length..trip.len() - second_length {
                        let mut candidate = solution.clone();
                        *candidate.drone_trip_mut(first_drone, first_trip) = exchange_within(
                            trip,
                            first_index,
                            first_length,
                            second_index,
                            second_length,
                        );
                        result.insert(candidate);
                    }
                }
            }

            for second_drone in 0..drones.len() {
                for second_trip in 0..drones[second_drone].len() {
                    if (second_drone, second_trip) == (first_drone, first_trip) {
                        continue;
                    }
                    let other = &drones[second_drone][second_trip];
                    for first_index in 1..trip.len().saturating_sub(first_length) {
                        for second_index in 1..other.len().saturating_sub(second_length) {
                            let (new_first, new_second) = exchange_between(
                                trip,
                                first_index,
                                first_length,
                                other,
                                second_index,
                                second_length,
                            );
                            let mut candidate = solution.clone();
                            *candidate.drone_trip_mut(first_drone, first_trip) = new_first;
                            *candidate.drone_trip_mut(second_drone, second_trip) = new_second;
                            result.insert(candidate);
                        }
                    }
                }
            }
        }
    }

    Ok(result)
}

/// Segment swap between a technician route and a drone trip.
///
/// Extension point, intentionally unimplemented: moving stops across the
/// echelons requires re-checking dronability and payload, which the
/// segment machinery does not model yet. Always yields the empty set.
pub fn truck_drone_swap(
    _solution: &Solution,
    first_length: usize,
    second_length: usize,
) -> RoutingResult<BTreeSet<Solution>> {
    check_segment_lengths(first_length, second_length)?;
    Ok(BTreeSet::new())
}

fn check_segment_lengths(first_length: usize, second_length: usize) -> RoutingResult<()> {
    if first_length == 0 || second_length == 0 {
        return Err(RoutingError::EmptySegment {
            first_length,
            second_length,
        });
    }
    Ok(())
}

/// Exchanges the segments at `[first_index, first_index + first_length)`
/// and `[second_index, second_index + second_length)` of one route; the
/// stops between them keep their order.
fn exchange_within(
    route: &[usize],
    first_index: usize,
    first_length: usize,
    second_index: usize,
    second_length: usize,
) -> Vec<usize> {
    let mut swapped = Vec::with_capacity(route.len());
    swapped.extend_from_slice(&route[..first_index]);
    swapped.extend_from_slice(&route[second_index..second_index + second_length]);
    swapped.extend_from_slice(&route[first_index + first_length..second_index]);
    swapped.extend_from_slice(&route[first_index..first_index + first_length]);
    swapped.extend_from_slice(&route[second_index + second_length..]);
    swapped
}

/// Moves `first`'s segment into `second` and vice versa; the receiving
/// route grows or shrinks when the segment lengths differ.
fn exchange_between(
    first: &[usize],
    first_index: usize,
    first_length: usize,
    second: &[usize],
    second_index: usize,
    second_length: usize,
) -> (Vec<usize>, Vec<usize>) {
    let mut new_first = Vec::with_capacity(first.len() - first_length + second_length);
    new_first.extend_from_slice(&first[..first_index]);
    new_first.extend_from_slice(&second[second_index..second_index + second_length]);
    new_first.extend_from_slice(&first[first_index + first_length..]);

    let mut new_second = Vec::with_capacity(second.len() - second_length + first_length);
    new_second.extend_from_slice(&second[..second_index]);
    new_second.extend_from_slice(&first[first_index..first_index + first_length]);
    new_second.extend_from_slice(&second[second_index + second_length..]);

    (new_first, new_second)
}
