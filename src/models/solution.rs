//! Multi-vehicle solution representation.

use serde::{Deserialize, Serialize};

/// A complete two-echelon solution: one route per truck and an ordered list
/// of trips per drone.
///
/// Routes are sequences of customer indices, conventionally starting and
/// ending at the depot (index 0). A drone flies several trips in sequence,
/// returning to the depot between them to swap batteries.
///
/// Equality, ordering, and hashing are structural over the full nested
/// route collections, so solutions can be deduplicated in sets.
///
/// # Examples
///
/// ```
/// use d2d_routing::models::Solution;
///
/// let solution = Solution::new(
///     vec![vec![0, 1, 2, 0]],
///     vec![vec![vec![0, 3, 0], vec![0, 4, 0]]],
/// );
/// assert_eq!(solution.num_trucks(), 1);
/// assert_eq!(solution.num_drones(), 1);
/// assert_eq!(solution.drone_routes()[0].len(), 2);
/// ```
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Solution {
    truck_routes: Vec<Vec<usize>>,
    drone_routes: Vec<Vec<Vec<usize>>>,
}

impl Solution {
    /// Creates a solution from truck routes and per-drone trip lists.
    pub fn new(truck_routes: Vec<Vec<usize>>, drone_routes: Vec<Vec<Vec<usize>>>) -> Self {
        Self {
            truck_routes,
            drone_routes,
        }
    }

    /// One route per truck.
    pub fn truck_routes(&self) -> &[Vec<usize>] {
        &self.truck_routes
    }

    /// One ordered trip list per drone.
    pub fn drone_routes(&self) -> &[Vec<Vec<usize>>] {
        &self.drone_routes
    }

    /// Number of trucks.
    pub fn num_trucks(&self) -> usize {
        self.truck_routes.len()
    }

    /// Number of drones.
    pub fn num_drones(&self) -> usize {
        self.drone_routes.len()
    }

    pub(crate) fn truck_route_mut(&mut self, truck: usize) -> &mut Vec<usize> {
        &mut self.truck_routes[truck]
    }

    pub(crate) fn drone_trip_mut(&mut self, drone: usize, trip: usize) -> &mut Vec<usize> {
        &mut self.drone_routes[drone][trip]
    }
}
